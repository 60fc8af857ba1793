use std::error::Error;
use std::fmt::{self, Display};
use std::io;

use crate::domain::ValidationError;

/// Library-wide error type for wrapcfg operations.
#[derive(Debug)]
pub enum AppError {
    /// Underlying I/O failure.
    Io(io::Error),
    /// TOML content could not be deserialized.
    TomlParse(toml::de::Error),
    /// JSON content could not be deserialized.
    JsonParse(serde_json::Error),
    /// A field of the configuration record violates its constraint.
    Invalid(ValidationError),
    /// A config file already exists at the target location.
    ConfigExists,
    /// No wrap.config file found in the current directory.
    ConfigNotFound,
    /// The requested key is not part of the configuration schema.
    UnsupportedKey(String),
    /// Configuration or environment issue.
    Validation(String),
}

impl Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Io(err) => write!(f, "{}", err),
            AppError::TomlParse(err) => write!(f, "Invalid TOML configuration: {}", err),
            AppError::JsonParse(err) => write!(f, "Invalid JSON configuration: {}", err),
            AppError::Invalid(err) => write!(f, "{}", err),
            AppError::ConfigExists => {
                write!(f, "A wrap.config file already exists (use --force to overwrite)")
            }
            AppError::ConfigNotFound => {
                write!(f, "No wrap.config.toml or wrap.config.json found in current directory")
            }
            AppError::UnsupportedKey(key) => {
                write!(
                    f,
                    "Unknown configuration key '{}': expected appId, appName, webDir, or bundledWebRuntime",
                    key
                )
            }
            AppError::Validation(message) => write!(f, "{message}"),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            AppError::Io(err) => Some(err),
            AppError::TomlParse(err) => Some(err),
            AppError::JsonParse(err) => Some(err),
            AppError::Invalid(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for AppError {
    fn from(value: io::Error) -> Self {
        AppError::Io(value)
    }
}

impl From<toml::de::Error> for AppError {
    fn from(value: toml::de::Error) -> Self {
        AppError::TomlParse(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        AppError::JsonParse(value)
    }
}

impl From<ValidationError> for AppError {
    fn from(value: ValidationError) -> Self {
        AppError::Invalid(value)
    }
}

impl AppError {
    /// Provide an `io::ErrorKind`-like view for callers expecting legacy behavior.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::ConfigNotFound => io::ErrorKind::NotFound,
            AppError::ConfigExists => io::ErrorKind::AlreadyExists,
            AppError::TomlParse(_) | AppError::JsonParse(_) | AppError::Invalid(_) => {
                io::ErrorKind::InvalidData
            }
            AppError::UnsupportedKey(_) | AppError::Validation(_) => io::ErrorKind::InvalidInput,
        }
    }
}

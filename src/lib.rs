//! wrapcfg: author and validate `wrap.config` build settings for the
//! web-to-native wrapper toolchain.
//!
//! The configuration record is a four-field contract (`appId`, `appName`,
//! `webDir`, `bundledWebRuntime`) read once per build invocation by the
//! external build tool. This crate owns the schema and the authoring tooling;
//! the build pipeline itself lives elsewhere.

pub mod commands;
pub mod config_file;
pub mod domain;
pub mod error;

use std::path::PathBuf;

use config_file::ConfigFile;

pub use commands::check::CheckOutcome;
pub use commands::init::InitOptions;
pub use domain::{BuildConfig, ConfigFormat, DEFAULT_WEB_DIR, ValidationError};
pub use error::AppError;

/// Scaffold a new wrap.config file in the current directory.
pub fn init(options: &InitOptions) -> Result<PathBuf, AppError> {
    let config_file = ConfigFile::current()?;
    let path = commands::init::execute(&config_file, options)?;
    println!("✅ Wrote {}", path.display());
    Ok(path)
}

/// Validate the wrap.config file in the current directory.
pub fn check() -> Result<CheckOutcome, AppError> {
    let config_file = ConfigFile::current()?;
    let outcome = commands::check::execute(&config_file)?;
    println!("✅ {} is valid", outcome.path.display());
    Ok(outcome)
}

/// Print the resolved configuration record as pretty JSON.
pub fn show() -> Result<String, AppError> {
    let config_file = ConfigFile::current()?;
    commands::show::execute(&config_file)
}

/// Update a single configuration key in place.
pub fn set(key: &str, value: &str) -> Result<(), AppError> {
    let config_file = ConfigFile::current()?;
    commands::set::execute(&config_file, key, value)?;
    println!("✅ Set {} = {}", key, value);
    Ok(())
}

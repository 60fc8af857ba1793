//! The wrap.config configuration record.

use serde::{Deserialize, Serialize};

use crate::domain::validation::{is_relative_asset_dir, is_reverse_domain_id};

/// Web asset directory used when the config file omits `webDir`.
pub const DEFAULT_WEB_DIR: &str = "dist";

/// Build settings consumed by the native-wrapper build tool.
///
/// Serialized with the camelCase keys the external tool's schema recognizes
/// (`appId`, `appName`, `webDir`, `bundledWebRuntime`). The schema is closed:
/// unknown keys fail deserialization. The record is read once per invocation
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BuildConfig {
    /// Platform-level bundle/package identifier in reverse-domain form.
    pub app_id: String,
    /// Human-readable application label.
    pub app_name: String,
    /// Directory containing compiled web assets, relative to the project root.
    #[serde(default = "default_web_dir")]
    pub web_dir: String,
    /// Whether a web-view runtime is bundled into the native package rather
    /// than provided by the host OS.
    #[serde(default)]
    pub bundled_web_runtime: bool,
}

fn default_web_dir() -> String {
    DEFAULT_WEB_DIR.to_string()
}

/// Field-level constraint violation in a configuration record.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("appId '{0}' is not a valid reverse-domain identifier (expected e.g. com.example.app)")]
    InvalidAppId(String),
    #[error("appName must be a non-empty string")]
    EmptyAppName,
    #[error("webDir '{0}' must be a non-empty relative path without parent-directory components")]
    InvalidWebDir(String),
}

impl BuildConfig {
    /// Check every field against its schema constraint.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !is_reverse_domain_id(&self.app_id) {
            return Err(ValidationError::InvalidAppId(self.app_id.clone()));
        }
        if self.app_name.trim().is_empty() {
            return Err(ValidationError::EmptyAppName);
        }
        if !is_relative_asset_dir(&self.web_dir) {
            return Err(ValidationError::InvalidWebDir(self.web_dir.clone()));
        }
        Ok(())
    }
}

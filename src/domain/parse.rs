//! Pure parse/validate for wrap.config content.

use std::path::Path;

use crate::domain::BuildConfig;
use crate::error::AppError;

/// On-disk serialization format of a wrap.config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(ConfigFormat::Toml),
            Some("json") => Ok(ConfigFormat::Json),
            _ => Err(AppError::Validation(format!(
                "Unsupported config format for '{}': expected .toml or .json",
                path.display()
            ))),
        }
    }
}

/// Parse and validate a configuration record from file content.
pub fn parse_config_content(content: &str, format: ConfigFormat) -> Result<BuildConfig, AppError> {
    let config: BuildConfig = match format {
        ConfigFormat::Toml => toml::from_str(content)?,
        ConfigFormat::Json => serde_json::from_str(content)?,
    };
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn format_detection() {
        assert_eq!(
            ConfigFormat::from_path(&PathBuf::from("wrap.config.toml")).unwrap(),
            ConfigFormat::Toml
        );
        assert_eq!(
            ConfigFormat::from_path(&PathBuf::from("wrap.config.json")).unwrap(),
            ConfigFormat::Json
        );
        assert!(ConfigFormat::from_path(&PathBuf::from("wrap.config.yaml")).is_err());
    }

    #[test]
    fn parses_valid_toml() {
        let toml = r#"
appId = "com.sapher.bleapp"
appName = "app"
webDir = "dist"
bundledWebRuntime = false
"#;
        let config = parse_config_content(toml, ConfigFormat::Toml).unwrap();
        assert_eq!(config.app_id, "com.sapher.bleapp");
        assert!(!config.bundled_web_runtime);
    }

    #[test]
    fn parse_fails_on_malformed_toml() {
        let result = parse_config_content("appId = ", ConfigFormat::Toml);
        assert!(matches!(result, Err(AppError::TomlParse(_))));
    }

    #[test]
    fn parse_fails_on_malformed_json() {
        let result = parse_config_content("{", ConfigFormat::Json);
        assert!(matches!(result, Err(AppError::JsonParse(_))));
    }

    #[test]
    fn parse_fails_validation_on_bad_app_id() {
        let toml = r#"
appId = "NotAnId"
appName = "app"
"#;
        let result = parse_config_content(toml, ConfigFormat::Toml);
        assert!(matches!(result, Err(AppError::Invalid(_))));
    }

    #[test]
    fn parse_fails_on_missing_required_field() {
        let result = parse_config_content(r#"appName = "app""#, ConfigFormat::Toml);
        assert!(matches!(result, Err(AppError::TomlParse(_))));
    }
}

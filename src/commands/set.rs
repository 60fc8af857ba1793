//! Set command: update a single key of the wrap.config file in place.

use crate::config_file::ConfigFile;
use crate::domain::{ConfigFormat, parse_config_content};
use crate::error::AppError;

/// Schema keys accepted by `set`.
const KEYS: [&str; 4] = ["appId", "appName", "webDir", "bundledWebRuntime"];

/// Execute the set command.
///
/// TOML configs are edited through `toml_edit` so comments and layout survive.
/// JSON configs are re-serialized. The updated record is validated in full
/// before anything is written back.
pub fn execute(config_file: &ConfigFile, key: &str, value: &str) -> Result<(), AppError> {
    if !KEYS.contains(&key) {
        return Err(AppError::UnsupportedKey(key.to_string()));
    }

    let (path, format, content) = config_file.read_raw()?;
    let updated = match format {
        ConfigFormat::Toml => set_in_toml(&content, key, value)?,
        ConfigFormat::Json => set_in_json(&content, key, value)?,
    };

    // Reject edits that would leave an invalid record on disk.
    parse_config_content(&updated, format)?;
    config_file.write_raw(&path, &updated)
}

fn set_in_toml(content: &str, key: &str, value: &str) -> Result<String, AppError> {
    let mut doc = content
        .parse::<toml_edit::DocumentMut>()
        .map_err(|e| AppError::Validation(format!("Failed to parse wrap.config.toml: {}", e)))?;

    let mut new_val = typed_toml_value(key, value)?;
    let item = &mut doc[key];
    if let Some(current_val) = item.as_value_mut() {
        *new_val.decor_mut() = current_val.decor().clone();
        *current_val = new_val;
    } else {
        *item = toml_edit::Item::Value(new_val);
    }

    Ok(doc.to_string())
}

fn typed_toml_value(key: &str, value: &str) -> Result<toml_edit::Value, AppError> {
    if key == "bundledWebRuntime" {
        let flag = parse_bool(value)?;
        Ok(toml_edit::Value::from(flag))
    } else {
        Ok(toml_edit::Value::from(value))
    }
}

fn set_in_json(content: &str, key: &str, value: &str) -> Result<String, AppError> {
    let mut doc: serde_json::Value = serde_json::from_str(content)?;
    let object = doc
        .as_object_mut()
        .ok_or_else(|| AppError::Validation("wrap.config.json is not a JSON object".into()))?;

    let new_val = if key == "bundledWebRuntime" {
        serde_json::Value::Bool(parse_bool(value)?)
    } else {
        serde_json::Value::String(value.to_string())
    };
    object.insert(key.to_string(), new_val);

    let mut updated = serde_json::to_string_pretty(&doc)?;
    updated.push('\n');
    Ok(updated)
}

fn parse_bool(value: &str) -> Result<bool, AppError> {
    value.parse::<bool>().map_err(|_| {
        AppError::Validation(format!("bundledWebRuntime expects true or false, got '{}'", value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const CONFIG: &str = r#"# project config
appId = "com.sapher.bleapp" # keep me
appName = "app"
webDir = "dist"
bundledWebRuntime = false
"#;

    fn setup(content: &str, name: &str) -> (TempDir, ConfigFile) {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(name), content).unwrap();
        let config_file = ConfigFile::new(dir.path().to_path_buf());
        (dir, config_file)
    }

    #[test]
    fn set_updates_value_and_preserves_comments() {
        let (dir, config_file) = setup(CONFIG, "wrap.config.toml");

        execute(&config_file, "appId", "com.example.other").unwrap();
        let updated = fs::read_to_string(dir.path().join("wrap.config.toml")).unwrap();

        assert!(updated.contains("appId = \"com.example.other\" # keep me"));
        assert!(updated.contains("# project config"));
        assert!(updated.contains("webDir = \"dist\""));
    }

    #[test]
    fn set_parses_runtime_flag_as_boolean() {
        let (dir, config_file) = setup(CONFIG, "wrap.config.toml");

        execute(&config_file, "bundledWebRuntime", "true").unwrap();
        let updated = fs::read_to_string(dir.path().join("wrap.config.toml")).unwrap();
        assert!(updated.contains("bundledWebRuntime = true"));

        let err = execute(&config_file, "bundledWebRuntime", "yes").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn set_rejects_unknown_key() {
        let (_dir, config_file) = setup(CONFIG, "wrap.config.toml");
        let err = execute(&config_file, "serverUrl", "http://x").unwrap_err();
        assert!(matches!(err, AppError::UnsupportedKey(_)));
    }

    #[test]
    fn set_rejects_value_that_breaks_validation() {
        let (dir, config_file) = setup(CONFIG, "wrap.config.toml");

        let err = execute(&config_file, "appId", "NotValid").unwrap_err();
        assert!(matches!(err, AppError::Invalid(_)));

        // File untouched after the rejected edit.
        let content = fs::read_to_string(dir.path().join("wrap.config.toml")).unwrap();
        assert_eq!(content, CONFIG);
    }

    #[test]
    fn set_updates_json_config() {
        let json = r#"{
  "appId": "com.sapher.bleapp",
  "appName": "app"
}
"#;
        let (dir, config_file) = setup(json, "wrap.config.json");

        execute(&config_file, "webDir", "public").unwrap();
        let updated = fs::read_to_string(dir.path().join("wrap.config.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&updated).unwrap();
        assert_eq!(value["webDir"], "public");
    }
}

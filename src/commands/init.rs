//! Init command: scaffold a new wrap.config file.

use std::path::PathBuf;

use crate::config_file::ConfigFile;
use crate::domain::{BuildConfig, ConfigFormat, DEFAULT_WEB_DIR};
use crate::error::AppError;

/// Options for the init command.
pub struct InitOptions {
    /// Reverse-domain application identifier.
    pub app_id: String,
    /// Human-readable application name.
    pub app_name: String,
    /// Web asset directory; defaults to "dist" when absent.
    pub web_dir: Option<String>,
    /// Bundle a web-view runtime into the native package.
    pub bundled_web_runtime: bool,
    /// Write JSON instead of TOML.
    pub json: bool,
    /// Overwrite an existing config file.
    pub force: bool,
}

/// Execute the init command. Returns the path of the written file.
pub fn execute(config_file: &ConfigFile, options: &InitOptions) -> Result<PathBuf, AppError> {
    let config = BuildConfig {
        app_id: options.app_id.clone(),
        app_name: options.app_name.clone(),
        web_dir: options.web_dir.clone().unwrap_or_else(|| DEFAULT_WEB_DIR.to_string()),
        bundled_web_runtime: options.bundled_web_runtime,
    };
    config.validate()?;

    let format = if options.json { ConfigFormat::Json } else { ConfigFormat::Toml };
    let content = render(&config, format)?;
    config_file.write_initial(&content, format, options.force)
}

fn render(config: &BuildConfig, format: ConfigFormat) -> Result<String, AppError> {
    match format {
        ConfigFormat::Toml => Ok(render_toml(config)),
        ConfigFormat::Json => {
            let mut content = serde_json::to_string_pretty(config)?;
            content.push('\n');
            Ok(content)
        }
    }
}

fn render_toml(config: &BuildConfig) -> String {
    format!(
        r#"# Build settings for the native-wrapper toolchain.
# Read once per build invocation; edit by hand or via `wrapcfg set`.

# Platform-level bundle/package identifier (reverse-domain form).
appId = "{}"

# Human-readable application label.
appName = "{}"

# Directory with compiled web assets, relative to this file.
webDir = "{}"

# Bundle a web-view runtime into the native package instead of
# relying on the one provided by the host OS.
bundledWebRuntime = {}
"#,
        config.app_id, config.app_name, config.web_dir, config.bundled_web_runtime
    )
}

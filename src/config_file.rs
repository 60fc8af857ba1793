//! Location and I/O for the on-disk wrap.config file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::{BuildConfig, ConfigFormat, parse_config_content};
use crate::error::AppError;

/// The TOML config file name.
pub const TOML_FILE: &str = "wrap.config.toml";

/// The JSON config file name.
pub const JSON_FILE: &str = "wrap.config.json";

/// Represents the wrap.config file rooted at a project directory.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    /// The project root directory.
    root: PathBuf,
}

impl ConfigFile {
    /// Create a config handle for the given project root.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a config handle for the current directory.
    pub fn current() -> Result<Self, AppError> {
        let cwd = std::env::current_dir()?;
        Ok(Self::new(cwd))
    }

    /// Path the config would have in the given format.
    pub fn path_for(&self, format: ConfigFormat) -> PathBuf {
        match format {
            ConfigFormat::Toml => self.root.join(TOML_FILE),
            ConfigFormat::Json => self.root.join(JSON_FILE),
        }
    }

    /// Find an existing config file. TOML takes precedence when both exist.
    pub fn locate(&self) -> Option<(PathBuf, ConfigFormat)> {
        for name in [TOML_FILE, JSON_FILE] {
            let path = self.root.join(name);
            if path.exists() {
                let format = ConfigFormat::from_path(&path).ok()?;
                return Some((path, format));
            }
        }
        None
    }

    /// Check whether any config file exists at the root.
    pub fn exists(&self) -> bool {
        self.locate().is_some()
    }

    /// Read and validate the configuration record.
    ///
    /// The file is read exactly once; the returned record is owned and
    /// detached from the file afterwards.
    pub fn load(&self) -> Result<(PathBuf, BuildConfig), AppError> {
        let (path, format) = self.locate().ok_or(AppError::ConfigNotFound)?;
        let content = fs::read_to_string(&path)?;
        let config = parse_config_content(&content, format)?;
        Ok((path, config))
    }

    /// Write initial config content in the given format.
    ///
    /// Refuses to clobber an existing config (either format) unless forced.
    /// A forced write removes the other-format file so the written config is
    /// the one `locate` resolves.
    pub fn write_initial(
        &self,
        content: &str,
        format: ConfigFormat,
        force: bool,
    ) -> Result<PathBuf, AppError> {
        if self.exists() && !force {
            return Err(AppError::ConfigExists);
        }
        let path = self.path_for(format);
        fs::write(&path, content)?;

        let other = match format {
            ConfigFormat::Toml => self.path_for(ConfigFormat::Json),
            ConfigFormat::Json => self.path_for(ConfigFormat::Toml),
        };
        if other.exists() {
            fs::remove_file(&other)?;
        }
        Ok(path)
    }

    /// Read raw content of the located config file.
    pub fn read_raw(&self) -> Result<(PathBuf, ConfigFormat, String), AppError> {
        let (path, format) = self.locate().ok_or(AppError::ConfigNotFound)?;
        let content = fs::read_to_string(&path)?;
        Ok((path, format, content))
    }

    /// Overwrite the config file at `path` with new content.
    pub fn write_raw(&self, path: &Path, content: &str) -> Result<(), AppError> {
        fs::write(path, content)?;
        Ok(())
    }
}

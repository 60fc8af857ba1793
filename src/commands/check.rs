//! Check command: locate, parse, and validate the wrap.config file.

use std::path::PathBuf;

use crate::config_file::ConfigFile;
use crate::domain::BuildConfig;
use crate::error::AppError;

/// Result of a successful check.
#[derive(Debug)]
pub struct CheckOutcome {
    /// Path of the validated config file.
    pub path: PathBuf,
    /// The resolved configuration record.
    pub config: BuildConfig,
}

/// Execute the check command.
pub fn execute(config_file: &ConfigFile) -> Result<CheckOutcome, AppError> {
    let (path, config) = config_file.load()?;
    Ok(CheckOutcome { path, config })
}

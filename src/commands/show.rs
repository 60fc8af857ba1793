//! Show command: print the resolved record in the shape the build tool consumes.

use crate::config_file::ConfigFile;
use crate::error::AppError;

/// Execute the show command. Returns the resolved record as pretty JSON.
pub fn execute(config_file: &ConfigFile) -> Result<String, AppError> {
    let (_, config) = config_file.load()?;
    let json = serde_json::to_string_pretty(&config)?;
    Ok(json)
}

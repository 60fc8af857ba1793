//! Domain model for the wrap.config configuration record.

mod build_config;
mod parse;
pub mod validation;

pub use build_config::{BuildConfig, DEFAULT_WEB_DIR, ValidationError};
pub use parse::{ConfigFormat, parse_config_content};

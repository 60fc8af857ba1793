//! Authoring commands for the wrap.config file.

pub mod check;
pub mod init;
pub mod set;
pub mod show;

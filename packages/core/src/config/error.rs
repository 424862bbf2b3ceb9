//! Config store error types

use thiserror::Error;

/// Errors that can occur while loading or saving the config file
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Could not read the config file
    #[error("Failed to load config file: {0}")]
    Load(String),

    /// Config file exists but does not parse
    #[error("Invalid config file {path}: {message}")]
    Parse { path: String, message: String },

    /// Could not write the config file
    #[error("Failed to save config file: {0}")]
    Save(String),
}

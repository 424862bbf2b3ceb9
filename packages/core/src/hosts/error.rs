//! Host registry error types

use thiserror::Error;

/// Errors that can occur during host registry operations
#[derive(Error, Debug)]
pub enum HostError {
    /// No host with that name is configured
    #[error("Host not found: {0}")]
    NotFound(String),

    /// A host with that name already exists
    #[error("Host already exists: {0}")]
    AlreadyExists(String),

    /// The current default host may not be removed
    #[error("Host '{0}' is the current default and can't be removed. Switch to another host first.")]
    Protected(String),

    /// No name given and no default host configured
    #[error("No default host configured")]
    NoDefault,

    /// Host names are lookup keys and may not be empty
    #[error("Host name can't be empty")]
    EmptyName,
}

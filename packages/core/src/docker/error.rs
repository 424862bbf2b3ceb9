//! Engine-client error types
//!
//! Errors from talking to a container-engine daemon, with pattern
//! matching on the raw client errors to surface actionable messages.

use thiserror::Error;

/// Errors that can occur while connecting to or querying a daemon
#[derive(Error, Debug)]
pub enum DockerError {
    /// Failed to reach the daemon
    #[error("Daemon connection failed: {0}")]
    Connection(String),

    /// Daemon is not running at the configured endpoint
    #[error("Daemon not reachable. Check the host URL and that the engine is running.")]
    NotRunning,

    /// Permission denied accessing the daemon socket
    #[error(
        "Permission denied accessing the daemon socket. You may need to add your user to the 'docker' group."
    )]
    PermissionDenied,

    /// Host entry cannot produce a usable connection
    #[error("Invalid host configuration: {0}")]
    InvalidEndpoint(String),

    /// Registry rejected the supplied credentials
    #[error("Authentication failed: {0}")]
    AuthDenied(String),
}

impl From<bollard::errors::Error> for DockerError {
    fn from(err: bollard::errors::Error) -> Self {
        let msg = err.to_string();

        if msg.contains("Cannot connect to the Docker daemon")
            || msg.contains("connection refused")
            || msg.contains("No such file or directory")
        {
            DockerError::NotRunning
        } else if msg.contains("permission denied") || msg.contains("Permission denied") {
            DockerError::PermissionDenied
        } else {
            DockerError::Connection(msg)
        }
    }
}

//! Registry auth error types

use thiserror::Error;

/// Errors that can occur during registry login bookkeeping
#[derive(Error, Debug)]
pub enum RegistryError {
    /// No login record exists for that server address
    #[error("Not logged in to {0}")]
    NotFound(String),

    /// A record exists but holds no credentials
    #[error("Already logged out of {0}")]
    AlreadyLoggedOut(String),

    /// The registry rejected the credentials
    #[error("Login failed: {0}")]
    Auth(String),

    /// The verification round-trip itself failed
    #[error("Registry request failed: {0}")]
    Transport(String),

    /// Stored token is not a valid credential encoding
    #[error("Invalid auth token: {0}")]
    InvalidToken(String),
}

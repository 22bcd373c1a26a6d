//! Error types for spc-core

use thiserror::Error;

/// Result type alias using spc-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in spc-core operations
///
/// The `Display` output of the first three variants is the message handed to
/// a report's error callback.
#[derive(Error, Debug)]
pub enum Error {
    /// The push-messaging capability could not supply a token
    #[error("Error getting FCM token")]
    TokenUnavailable(String),

    /// The collection endpoint answered with a non-success status
    #[error("Failed to send data: {0}")]
    HttpStatus(u16),

    /// The request never produced a response
    #[error("Error sending data: {0}")]
    Transport(String),

    /// Key-value persistence error
    #[error("Storage error: {0}")]
    Storage(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Missing or malformed endpoint configuration
    #[error("Configuration error: {0}")]
    Config(String),
}

//! Common error types for MoodLens

use thiserror::Error;

use crate::scoring::PolarityError;

/// Common result type for MoodLens operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across MoodLens crates
#[derive(Error, Debug)]
pub enum Error {
    /// Database operation error (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// I/O operation error (wraps std::io::Error)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Requested resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input or request parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Text-sentiment provider failed; the request cannot produce a score
    #[error("Sentiment provider error: {0}")]
    Polarity(#[from] PolarityError),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

//! Error types for the Careku assistant.
//!
//! This module defines a unified error enum covering configuration,
//! gateway, knowledge-base, and serialization failures. Error causes are
//! distinguished by variant, never by matching message substrings.

use thiserror::Error;

/// Maximum number of characters of a gateway error body carried in an error.
pub const MAX_ERROR_BODY_CHARS: usize = 120;

/// Unified error type for the Careku assistant.
///
/// Retrieval, scoring, ranking, and prompt composition are total functions
/// and never produce errors; only configuration and the gateway call can
/// fail.
#[derive(Error, Debug)]
pub enum AppError {
    /// Required credential or configuration value missing or invalid.
    /// Raised before any network attempt; not retryable.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The completion service answered with a non-success HTTP status.
    /// `body` is truncated to [`MAX_ERROR_BODY_CHARS`] characters.
    #[error("Gateway error (status {status}): {body}")]
    Gateway { status: u16, body: String },

    /// The request to the completion service could not be completed
    /// (connect failure, timeout) before an HTTP status existed.
    #[error("Gateway request failed: {0}")]
    Transport(String),

    /// Knowledge base validation errors
    #[error("Knowledge error: {0}")]
    Knowledge(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Build a `Gateway` error from a status code and raw response body,
    /// truncating the body for diagnostics.
    pub fn gateway(status: u16, body: &str) -> Self {
        AppError::Gateway {
            status,
            body: truncate_body(body),
        }
    }
}

/// Truncate a response body on a character boundary.
fn truncate_body(body: &str) -> String {
    match body.char_indices().nth(MAX_ERROR_BODY_CHARS) {
        Some((idx, _)) => body[..idx].to_string(),
        None => body.to_string(),
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;

//! Stylist client error types

use thiserror::Error;

/// Stylist error type
#[derive(Debug, Error)]
pub enum StylistError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote API returned a non-success status
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Response body did not carry a usable generation
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for stylist operations
pub type StylistResult<T> = Result<T, StylistError>;

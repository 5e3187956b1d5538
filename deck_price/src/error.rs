//! Error types for deck_price

use thiserror::Error;

/// Unified error type for deck_price operations
#[derive(Debug, Error)]
pub enum PriceError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// HTTP error status code
    #[error("HTTP error: {0}")]
    HttpStatus(reqwest::StatusCode),

    /// Report could not be written
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for deck_price operations
pub type Result<T> = std::result::Result<T, PriceError>;

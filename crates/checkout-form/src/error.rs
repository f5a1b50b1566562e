//! Error Types
//!
//! Validators and maskers are total and never fail; errors only come from
//! loading form configuration.

use thiserror::Error;

/// Result type alias for form setup
pub type Result<T> = std::result::Result<T, FormError>;

#[derive(Error, Debug)]
pub enum FormError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

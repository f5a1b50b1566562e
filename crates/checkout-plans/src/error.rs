//! Plan Hand-off Error Types

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, PlanError>;

/// Errors raised while handing a plan selection over to checkout
#[derive(Error, Debug)]
pub enum PlanError {
    /// Redirect requested without a plan name
    #[error("No plan specified")]
    MissingPlan,

    /// Selection store unavailable or rejected the operation
    #[error("Storage error: {0}")]
    Storage(String),

    /// Browser refused to navigate to the checkout page
    #[error("Navigation error: {0}")]
    Navigation(String),

    /// Redirect URL could not be built or parsed
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PlanError {
    /// Get user-friendly message
    pub const fn user_message(&self) -> &str {
        match self {
            Self::MissingPlan => "Please choose a plan before continuing.",
            Self::Storage(_) => "Your plan selection could not be saved in this browser.",
            Self::Config(_) | Self::Json(_) => "Service configuration error.",
            Self::Url(_) | Self::Navigation(_) => "An error occurred processing your request.",
        }
    }
}

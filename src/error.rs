//! Error handling module for the QR wizard
//!
//! Provides centralized error handling with proper error types using thiserror.
//! All errors in the application should use these types for consistency.

use thiserror::Error;

/// Main error type for the QR wizard
#[derive(Error, Debug)]
pub enum QrWizardError {
    /// IO errors (temp files, downloads, terminal)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP transport errors from the generation service call
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Validation errors (missing required fields, no type selected).
    /// The message is surfaced to the user verbatim.
    #[error("{0}")]
    Validation(String),

    /// Generation failures reported by the service or the transport
    #[error("{0}")]
    Generation(String),

    /// Download requested with no generated result bound
    #[error("No QR code to download")]
    NoResult,

    /// State errors (invalid internal state)
    #[error("State error: {0}")]
    State(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),
}

/// Result type alias for QR wizard operations
pub type Result<T> = std::result::Result<T, QrWizardError>;

// Convenient error constructors
impl QrWizardError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a generation error
    pub fn generation(msg: impl Into<String>) -> Self {
        Self::Generation(msg.into())
    }

    /// Create a state error
    pub fn state(msg: impl Into<String>) -> Self {
        Self::State(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }
}

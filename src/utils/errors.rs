//! Error handling for EventHub
//!
//! This module defines the main error type used throughout the crate
//! and provides a unified error reporting strategy for the views.

use thiserror::Error;
use crate::forms::FieldErrors;

/// Main error type for EventHub
#[derive(Error, Debug)]
pub enum EventHubError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request timed out")]
    Timeout,

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("{resource} not found: {id}")]
    NotFound {
        resource: &'static str,
        id: String,
        /// The backend's own explanation, when the 404 body carried one
        message: Option<String>,
    },

    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias for EventHub operations
pub type Result<T> = std::result::Result<T, EventHubError>;

/// Message shown when the backend rejects the session token
pub const SESSION_EXPIRED_MESSAGE: &str = "Session expired. Please login again.";

impl EventHubError {
    /// Check if the error is worth retrying by hand
    pub fn is_recoverable(&self) -> bool {
        match self {
            EventHubError::Http(_) => true,
            EventHubError::Timeout => true,
            EventHubError::ServiceUnavailable(_) => true,
            EventHubError::Api { status, .. } => *status >= 500,
            EventHubError::Unauthorized => false,
            EventHubError::NotFound { .. } => false,
            EventHubError::Validation(_) => true,
            EventHubError::InvalidInput(_) => true,
            EventHubError::Config(_) => false,
            EventHubError::Serialization(_) => false,
            EventHubError::Csv(_) => true,
            EventHubError::Io(_) => true,
            EventHubError::UrlParse(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            EventHubError::Config(_) => ErrorSeverity::Critical,
            EventHubError::UrlParse(_) => ErrorSeverity::Critical,
            EventHubError::Unauthorized => ErrorSeverity::Warning,
            EventHubError::NotFound { .. } => ErrorSeverity::Warning,
            EventHubError::Validation(_) => ErrorSeverity::Info,
            EventHubError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }

    /// Text suitable for a toast: the server's own message when it sent one
    pub fn user_message(&self) -> String {
        match self {
            EventHubError::Api { message, .. } => message.clone(),
            EventHubError::Unauthorized => SESSION_EXPIRED_MESSAGE.to_string(),
            EventHubError::NotFound { message: Some(message), .. } => message.clone(),
            EventHubError::InvalidInput(message) => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}

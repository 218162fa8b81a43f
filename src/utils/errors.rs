//! Error handling for PCB Point
//!
//! This module defines the main error types used throughout the client
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the PCB Point client
#[derive(Error, Debug)]
pub enum PcbPointError {
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Not logged in")]
    NotLoggedIn,

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Student not found: {student_id}")]
    StudentNotFound { student_id: String },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Remote API specific errors
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API timeout")]
    Timeout,

    #[error("API unreachable")]
    Unreachable,

    #[error("HTTP {status}: {}", message.as_deref().unwrap_or("no message"))]
    Status { status: u16, message: Option<String> },

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

/// Result type alias for PCB Point operations
pub type Result<T> = std::result::Result<T, PcbPointError>;

impl PcbPointError {
    /// Check if the error is recoverable
    pub fn is_recoverable(&self) -> bool {
        match self {
            PcbPointError::Api(ApiError::Timeout) => true,
            PcbPointError::Api(ApiError::Unreachable) => true,
            PcbPointError::Api(ApiError::RequestFailed(_)) => true,
            PcbPointError::Api(ApiError::Status { status, .. }) => *status >= 500,
            PcbPointError::Api(ApiError::InvalidResponse(_)) => false,
            PcbPointError::Config(_) => false,
            PcbPointError::PermissionDenied(_) => false,
            PcbPointError::NotLoggedIn => false,
            PcbPointError::Authentication(_) => false,
            PcbPointError::StudentNotFound { .. } => false,
            PcbPointError::Http(_) => true,
            PcbPointError::Serialization(_) => false,
            PcbPointError::Io(_) => true,
            PcbPointError::UrlParse(_) => false,
            PcbPointError::InvalidInput(_) => false,
        }
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            PcbPointError::Config(_) => ErrorSeverity::Critical,
            PcbPointError::PermissionDenied(_) => ErrorSeverity::Warning,
            PcbPointError::NotLoggedIn => ErrorSeverity::Warning,
            PcbPointError::Authentication(_) => ErrorSeverity::Warning,
            PcbPointError::InvalidInput(_) => ErrorSeverity::Info,
            _ => ErrorSeverity::Error,
        }
    }

    /// Text for the one-line toast shown to the user.
    ///
    /// A message supplied by the server wins over everything else.
    pub fn user_message(&self) -> String {
        match self {
            PcbPointError::Api(ApiError::Status { message: Some(message), .. }) => message.clone(),
            PcbPointError::Api(ApiError::Status { status, message: None }) => {
                format!("Request failed with status {}", status)
            }
            PcbPointError::Api(ApiError::Timeout) => "The server took too long to respond".to_string(),
            PcbPointError::Api(ApiError::Unreachable) => "Could not reach the server".to_string(),
            PcbPointError::Api(_) | PcbPointError::Http(_) => "Something went wrong".to_string(),
            PcbPointError::NotLoggedIn => "Please log in first".to_string(),
            PcbPointError::Authentication(message) => message.clone(),
            PcbPointError::PermissionDenied(message) => message.clone(),
            PcbPointError::InvalidInput(message) => message.clone(),
            PcbPointError::StudentNotFound { student_id } => format!("No student with id {}", student_id),
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

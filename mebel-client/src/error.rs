//! Client error types

use shared::{AppError, ErrorCode};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Error body returned by the admin API
    #[error("API error {code}: {message}")]
    Api {
        code: u16,
        message: String,
        details: Option<serde_json::Value>,
    },

    /// Rejected by a client-side guard before any request was sent
    #[error("{0}")]
    Rejected(#[from] AppError),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Conflicting state on the server
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Local credential storage failed
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// A delivery note was created but neither the status change nor its
    /// removal went through
    #[error("Delivery note left inconsistent: {0}")]
    DeliveryNoteInconsistent(String),
}

impl ClientError {
    /// Structured error code, when the error carries one
    pub fn error_code(&self) -> Option<ErrorCode> {
        match self {
            Self::Api { code, .. } => ErrorCode::try_from(*code).ok(),
            Self::Rejected(err) => Some(err.code),
            Self::Unauthorized => Some(ErrorCode::NotAuthenticated),
            Self::DeliveryNoteInconsistent(_) => Some(ErrorCode::DeliveryNoteInconsistent),
            _ => None,
        }
    }

    /// Message to show in a notification: the server's or guard's own
    /// message when there is one, `fallback` otherwise
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Api { message, .. } if !message.is_empty() => message.clone(),
            Self::Rejected(err) => err.message.clone(),
            Self::Validation(msg) | Self::Conflict(msg) if !msg.is_empty() => msg.clone(),
            _ => fallback.to_string(),
        }
    }

    /// Whether the request was refused for missing or expired credentials
    pub fn is_unauthorized(&self) -> bool {
        matches!(self.error_code(), Some(code) if code.category() == shared::ErrorCategory::Auth)
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;

//! Client Error Types
//!
//! Errors that can come back from the bookstore backend or from local
//! persistence. Field validation failures are not errors in this sense; they
//! are reported through [`crate::shared::validation::ValidationReport`] and
//! never reach the network.
//!
//! # Error Categories
//!
//! - `Forbidden` - the backend rejected the bearer token (HTTP 403)
//! - `Network` / `Status` / `Serialization` - generic request failures
//! - `Storage` - the local key/value store could not be read or written
//!
//! # Usage
//!
//! ```rust
//! use bookstore_admin::shared::error::ClientError;
//!
//! let error = ClientError::status(401, Some("bad credentials".to_string()));
//! assert_eq!(error.user_message("Incorrect username or password"), "bad credentials");
//! ```
use thiserror::Error;

/// Errors surfaced by the API client and the local store
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The request never produced a response
    #[error("Network error: {message}")]
    Network {
        /// Human-readable error message
        message: String,
    },

    /// The backend answered with a non-success status
    #[error("Request failed with status {status}")]
    Status {
        /// HTTP status code
        status: u16,
        /// `message` field of the error body, when the body had one
        message: Option<String>,
    },

    /// The backend rejected the stored token
    #[error("Access forbidden: token rejected")]
    Forbidden,

    /// A body could not be encoded or decoded
    #[error("Serialization error: {message}")]
    Serialization {
        /// Human-readable error message
        message: String,
    },

    /// Local storage read/write failure
    #[error("Storage error: {message}")]
    Storage {
        /// Human-readable error message
        message: String,
    },
}

impl ClientError {
    /// Create a new network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a new status error
    pub fn status(status: u16, message: Option<String>) -> Self {
        Self::Status { status, message }
    }

    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create a new storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    /// True for missing or rejected credentials
    pub fn is_authorization(&self) -> bool {
        matches!(self, Self::Forbidden)
    }

    /// Message to show the user, falling back to `default` when the failure
    /// carried nothing better.
    pub fn user_message(&self, default: &str) -> String {
        match self {
            Self::Status {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            Self::Status { .. } | Self::Forbidden => default.to_string(),
            Self::Network { message }
            | Self::Serialization { message }
            | Self::Storage { message } => {
                if message.is_empty() {
                    default.to_string()
                } else {
                    message.clone()
                }
            }
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::serialization(err.to_string())
        } else {
            Self::network(err.to_string())
        }
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        Self::storage(err.to_string())
    }
}

//! Error types for the Career Link client core.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A shared error type for every client-side operation.
///
/// Failures are tagged by kind so that presentation layers and tests can
/// branch on the category of a failure instead of parsing message text.
/// Every variant carries a human-readable message suitable for rendering
/// in a dismissible banner.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ApiError {
    /// Transport-level failure (connection refused, timeout, DNS)
    #[error("Network error: {message}")]
    Network { message: String },

    /// Authentication rejected by the backend (401/403)
    #[error("Authentication error: {message}")]
    Auth { message: String },

    /// Request rejected as invalid (other 4xx)
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Backend-side failure (5xx)
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    /// Response body could not be decoded into the expected shape
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl ApiError {
    /// Creates a Network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates an Auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Creates a Server error
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server {
            status,
            message: message.into(),
        }
    }

    /// Creates a Serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Classifies a non-2xx HTTP status into an error kind.
    ///
    /// 401 and 403 are authentication failures, any other 4xx is a
    /// validation failure, everything else is a server failure.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        let message = message.into();
        match status {
            401 | 403 => Self::Auth { message },
            400..=499 => Self::Validation { message },
            _ => Self::Server { status, message },
        }
    }

    /// Check if this is a Network error
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }

    /// Check if this is an Auth error
    pub fn is_auth(&self) -> bool {
        matches!(self, Self::Auth { .. })
    }

    /// Check if this is a Validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }

    /// Check if this is a Server error
    pub fn is_server(&self) -> bool {
        matches!(self, Self::Server { .. })
    }

    /// Check if this is a Serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self, Self::Serialization { .. })
    }

    /// Returns the human-readable message without the kind prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::Network { message }
            | Self::Auth { message }
            | Self::Validation { message }
            | Self::Server { message, .. }
            | Self::Serialization { message } => message,
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return Self::Serialization {
                message: err.to_string(),
            };
        }
        if let Some(status) = err.status() {
            return Self::from_status(status.as_u16(), err.to_string());
        }
        Self::Network {
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;

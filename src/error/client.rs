//! Unified error type.

use thiserror::Error;

use super::{ConfigError, ErrorCategory, TransportError};

/// Any error the client can surface.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClientError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type alias using ClientError.
pub type ClientResult<T> = Result<T, ClientError>;

impl ClientError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            ClientError::Transport(err) => err.category(),
            ClientError::Config(_) => ErrorCategory::Configuration,
        }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            ClientError::Transport(err) => err.is_retryable(),
            ClientError::Config(_) => false,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            ClientError::Transport(err) => err.error_code(),
            ClientError::Config(err) => err.error_code(),
        }
    }

    /// Message suitable for the terminal, with a recovery hint.
    pub fn user_message(&self) -> String {
        format!("{}. {}", self, self.category().recovery_hint())
    }
}

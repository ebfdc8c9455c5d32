//! Event stream transport errors.

use thiserror::Error;

use super::ErrorCategory;
use crate::sse::SseParseError;

/// Failure of one event stream subscription.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("Connection to {url} failed: {message}")]
    ConnectionFailed { url: String, message: String },

    #[error("Request to {url} timed out")]
    Timeout { url: String },

    #[error("HTTP client could not be built: {message}")]
    ClientBuild { message: String },

    #[error("Event endpoint returned HTTP {status}")]
    HttpStatus { status: u16 },

    #[error("Stream read failed: {message}")]
    Read { message: String },

    #[error(transparent)]
    Parse(#[from] SseParseError),

    /// The server closed the stream. Server-sent event streams never end
    /// cleanly, so this is reported like any other failure.
    #[error("Stream closed by server")]
    StreamEnded,
}

impl TransportError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            TransportError::ConnectionFailed { .. }
            | TransportError::Timeout { .. }
            | TransportError::Read { .. }
            | TransportError::StreamEnded => ErrorCategory::Network,
            TransportError::HttpStatus { .. } => ErrorCategory::Server,
            TransportError::ClientBuild { .. } | TransportError::Parse(_) => {
                ErrorCategory::Client
            }
        }
    }

    pub fn is_retryable(&self) -> bool {
        match self {
            TransportError::HttpStatus { status } => *status >= 500 || *status == 429,
            other => other.category().is_retryable(),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            TransportError::ConnectionFailed { .. } => "TRANSPORT_CONNECT",
            TransportError::Timeout { .. } => "TRANSPORT_TIMEOUT",
            TransportError::ClientBuild { .. } => "TRANSPORT_CLIENT",
            TransportError::HttpStatus { .. } => "TRANSPORT_STATUS",
            TransportError::Read { .. } => "TRANSPORT_READ",
            TransportError::Parse(_) => "TRANSPORT_PARSE",
            TransportError::StreamEnded => "TRANSPORT_EOF",
        }
    }
}

/// Classify a reqwest error raised while dialing or reading `url`.
pub fn classify_reqwest_error(err: &reqwest::Error, url: &str) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout {
            url: url.to_string(),
        }
    } else if err.is_connect() || err.is_request() {
        TransportError::ConnectionFailed {
            url: url.to_string(),
            message: err.to_string(),
        }
    } else if let Some(status) = err.status() {
        TransportError::HttpStatus {
            status: status.as_u16(),
        }
    } else {
        TransportError::Read {
            message: err.to_string(),
        }
    }
}

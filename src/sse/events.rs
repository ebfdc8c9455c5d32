//! SSE event types and definitions

use std::fmt;

/// Event type assumed when a block carries no `event:` field.
pub const DEFAULT_EVENT_TYPE: &str = "message";

/// A single classified line of an SSE stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SseLine {
    /// `event: <type>`
    Event(String),
    /// `data: <payload>`
    Data(String),
    /// `id: <last event id>`
    Id(String),
    /// `retry: <reconnection time>`
    Retry(String),
    /// `: comment` (keepalives land here)
    Comment(String),
    /// Blank line, dispatches the accumulated event
    Empty,
}

/// A complete event assembled from one SSE block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SseEvent {
    /// Explicit `event:` name, `None` for default message events
    pub event_type: Option<String>,
    /// Data lines joined with `\n`
    pub data: String,
    /// Last `id:` seen in the block
    pub id: Option<String>,
    /// Reconnection hint in milliseconds, if the server sent a valid one
    pub retry_ms: Option<u64>,
}

impl SseEvent {
    /// Create a default (`message`) event carrying `data`.
    pub fn message(data: impl Into<String>) -> Self {
        Self {
            event_type: None,
            data: data.into(),
            id: None,
            retry_ms: None,
        }
    }

    /// The effective event type, `message` when none was given.
    pub fn kind(&self) -> &str {
        self.event_type.as_deref().unwrap_or(DEFAULT_EVENT_TYPE)
    }

    /// Whether this is a default message event (the only kind the relay sends).
    pub fn is_message(&self) -> bool {
        self.kind() == DEFAULT_EVENT_TYPE
    }
}

/// SSE parsing errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SseParseError {
    /// A single line grew beyond the buffer limit without a newline
    LineTooLong { limit: usize },
}

impl fmt::Display for SseParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SseParseError::LineTooLong { limit } => {
                write!(f, "SSE line exceeds {} bytes", limit)
            }
        }
    }
}

impl std::error::Error for SseParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_constructor() {
        let event = SseEvent::message("Turn 1");
        assert_eq!(event.data, "Turn 1");
        assert!(event.is_message());
        assert_eq!(event.kind(), "message");
    }

    #[test]
    fn test_named_event_is_not_message() {
        let event = SseEvent {
            event_type: Some("status".to_string()),
            data: "x".to_string(),
            id: None,
            retry_ms: None,
        };
        assert!(!event.is_message());
        assert_eq!(event.kind(), "status");
    }

    #[test]
    fn test_explicit_message_event_type() {
        let event = SseEvent {
            event_type: Some("message".to_string()),
            data: "x".to_string(),
            id: None,
            retry_ms: None,
        };
        assert!(event.is_message());
    }

    #[test]
    fn test_parse_error_display() {
        assert_eq!(
            SseParseError::LineTooLong { limit: 10 }.to_string(),
            "SSE line exceeds 10 bytes"
        );
    }
}

//! SSE stream parsing logic
//!
//! Contains the byte-level [`LineBuffer`] that splits network chunks into
//! lines, and the stateful [`SseParser`] that accumulates lines and emits
//! complete events.

use bytes::Bytes;

use crate::sse::events::{SseEvent, SseLine, SseParseError};

/// Upper bound for a single line held in the [`LineBuffer`].
pub const MAX_LINE_BYTES: usize = 1024 * 1024;

/// Parse a single SSE line into its component type
pub fn parse_sse_line(line: &str) -> SseLine {
    if line.is_empty() {
        return SseLine::Empty;
    }

    if let Some(stripped) = line.strip_prefix(':') {
        return SseLine::Comment(stripped.trim().to_string());
    }

    let (field, value) = match line.split_once(':') {
        Some((field, value)) => (field, value.strip_prefix(' ').unwrap_or(value)),
        None => (line, ""),
    };

    match field {
        "event" => SseLine::Event(value.to_string()),
        "data" => SseLine::Data(value.to_string()),
        "id" => SseLine::Id(value.to_string()),
        "retry" => SseLine::Retry(value.to_string()),
        // Unknown fields are ignored by the protocol
        _ => SseLine::Comment(line.to_string()),
    }
}

/// Stateful SSE parser that accumulates lines and emits complete events
#[derive(Debug, Default)]
pub struct SseParser {
    /// Current event type being accumulated
    current_event_type: Option<String>,
    /// Accumulated data lines (SSE allows multiple data: lines)
    data_buffer: Vec<String>,
    /// Last id seen in the current block
    current_id: Option<String>,
    /// Retry hint seen in the current block
    current_retry: Option<u64>,
}

impl SseParser {
    /// Create a new SSE parser
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a line to the parser, potentially returning a complete event
    ///
    /// Returns `Some(event)` when the line was the blank line closing a block
    /// that carried at least one `data:` field.
    pub fn feed_line(&mut self, line: &str) -> Option<SseEvent> {
        match parse_sse_line(line) {
            SseLine::Event(event_type) => {
                self.current_event_type = Some(event_type);
                None
            }
            SseLine::Data(data) => {
                self.data_buffer.push(data);
                None
            }
            SseLine::Id(id) => {
                self.current_id = Some(id);
                None
            }
            SseLine::Retry(value) => {
                // Non-numeric retry values are ignored
                if let Ok(ms) = value.trim().parse::<u64>() {
                    self.current_retry = Some(ms);
                }
                None
            }
            SseLine::Empty => self.try_emit_event(),
            SseLine::Comment(_) => None,
        }
    }

    /// Try to emit a complete event from accumulated state
    fn try_emit_event(&mut self) -> Option<SseEvent> {
        let event_type = self.current_event_type.take();
        let id = self.current_id.take();
        let retry_ms = self.current_retry.take();

        // A block without data dispatches nothing
        if self.data_buffer.is_empty() {
            return None;
        }

        let data = self.data_buffer.join("\n");
        self.data_buffer.clear();

        Some(SseEvent {
            event_type: event_type.filter(|t| !t.is_empty()),
            data,
            id,
            retry_ms,
        })
    }
}

/// Splits a byte stream into text lines.
///
/// Chunks may end mid-line or mid-character; bytes are held until a `\n`
/// arrives so multi-byte characters are never split. `\r\n` endings are
/// normalised.
#[derive(Debug)]
pub struct LineBuffer {
    pending: Vec<u8>,
    limit: usize,
}

impl Default for LineBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl LineBuffer {
    /// Create a buffer with the default line limit.
    pub fn new() -> Self {
        Self::with_limit(MAX_LINE_BYTES)
    }

    /// Create a buffer that rejects lines longer than `limit` bytes.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            pending: Vec::new(),
            limit,
        }
    }

    /// Append a network chunk and return every line it completed.
    pub fn push(&mut self, chunk: &Bytes) -> Result<Vec<String>, SseParseError> {
        self.pending.extend_from_slice(chunk);

        let mut lines = Vec::new();
        while let Some(pos) = self.pending.iter().position(|b| *b == b'\n') {
            let mut raw: Vec<u8> = self.pending.drain(..=pos).collect();
            raw.pop();
            if raw.last() == Some(&b'\r') {
                raw.pop();
            }
            lines.push(String::from_utf8_lossy(&raw).into_owned());
        }

        if self.pending.len() > self.limit {
            self.pending.clear();
            return Err(SseParseError::LineTooLong { limit: self.limit });
        }

        Ok(lines)
    }

    /// Whether a partial line is waiting for more bytes.
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Tests for parse_sse_line

    #[test]
    fn test_parse_empty_line() {
        assert_eq!(parse_sse_line(""), SseLine::Empty);
    }

    #[test]
    fn test_parse_comment_line() {
        assert_eq!(parse_sse_line(": ping"), SseLine::Comment("ping".to_string()));
    }

    #[test]
    fn test_parse_data_strips_single_space() {
        assert_eq!(
            parse_sse_line("data:  two spaces"),
            SseLine::Data(" two spaces".to_string())
        );
        assert_eq!(parse_sse_line("data:tight"), SseLine::Data("tight".to_string()));
    }

    #[test]
    fn test_parse_data_keeps_colons_in_value() {
        assert_eq!(
            parse_sse_line("data: <p class='logline'>|move|p1a: Pikachu</p>"),
            SseLine::Data("<p class='logline'>|move|p1a: Pikachu</p>".to_string())
        );
    }

    #[test]
    fn test_parse_field_without_colon() {
        assert_eq!(parse_sse_line("data"), SseLine::Data(String::new()));
    }

    #[test]
    fn test_parse_event_id_retry() {
        assert_eq!(parse_sse_line("event: status"), SseLine::Event("status".to_string()));
        assert_eq!(parse_sse_line("id: 42"), SseLine::Id("42".to_string()));
        assert_eq!(parse_sse_line("retry: 3000"), SseLine::Retry("3000".to_string()));
    }

    #[test]
    fn test_parse_unknown_field_is_comment() {
        assert!(matches!(parse_sse_line("foo: bar"), SseLine::Comment(_)));
    }

    // Tests for SseParser

    #[test]
    fn test_single_message_event() {
        let mut parser = SseParser::new();
        assert!(parser.feed_line("data: Turn 1").is_none());
        let event = parser.feed_line("").unwrap();
        assert_eq!(event, SseEvent::message("Turn 1"));
    }

    #[test]
    fn test_multiline_data_joined() {
        let mut parser = SseParser::new();
        parser.feed_line("data: first");
        parser.feed_line("data: second");
        let event = parser.feed_line("").unwrap();
        assert_eq!(event.data, "first\nsecond");
    }

    #[test]
    fn test_comment_only_block_emits_nothing() {
        let mut parser = SseParser::new();
        assert!(parser.feed_line(": ping").is_none());
        assert!(parser.feed_line("").is_none());
    }

    #[test]
    fn test_event_type_without_data_is_discarded() {
        let mut parser = SseParser::new();
        parser.feed_line("event: status");
        assert!(parser.feed_line("").is_none());

        // The stale type must not leak into the next block
        parser.feed_line("data: hello");
        let event = parser.feed_line("").unwrap();
        assert!(event.is_message());
    }

    #[test]
    fn test_named_event_with_id_and_retry() {
        let mut parser = SseParser::new();
        parser.feed_line("event: status");
        parser.feed_line("id: 7");
        parser.feed_line("retry: 1500");
        parser.feed_line("data: ok");
        let event = parser.feed_line("").unwrap();
        assert_eq!(event.kind(), "status");
        assert_eq!(event.id.as_deref(), Some("7"));
        assert_eq!(event.retry_ms, Some(1500));
    }

    #[test]
    fn test_invalid_retry_ignored() {
        let mut parser = SseParser::new();
        parser.feed_line("retry: soon");
        parser.feed_line("data: x");
        let event = parser.feed_line("").unwrap();
        assert_eq!(event.retry_ms, None);
    }

    #[test]
    fn test_empty_data_field_dispatches() {
        let mut parser = SseParser::new();
        parser.feed_line("data:");
        let event = parser.feed_line("").unwrap();
        assert_eq!(event.data, "");
    }

    // Tests for LineBuffer

    #[test]
    fn test_line_buffer_splits_lines() {
        let mut buffer = LineBuffer::new();
        let lines = buffer.push(&Bytes::from("data: a\n\ndata: b\n")).unwrap();
        assert_eq!(lines, vec!["data: a", "", "data: b"]);
        assert!(!buffer.has_pending());
    }

    #[test]
    fn test_line_buffer_holds_partial_line() {
        let mut buffer = LineBuffer::new();
        assert!(buffer.push(&Bytes::from("data: hel")).unwrap().is_empty());
        assert!(buffer.has_pending());
        let lines = buffer.push(&Bytes::from("lo\n")).unwrap();
        assert_eq!(lines, vec!["data: hello"]);
    }

    #[test]
    fn test_line_buffer_crlf_across_chunks() {
        let mut buffer = LineBuffer::new();
        assert!(buffer.push(&Bytes::from("data: x\r")).unwrap().is_empty());
        let lines = buffer.push(&Bytes::from("\n\r\n")).unwrap();
        assert_eq!(lines, vec!["data: x", ""]);
    }

    #[test]
    fn test_line_buffer_multibyte_split() {
        let text = "data: ¡Batalla terminada!\n";
        let bytes = text.as_bytes();
        // Split inside the two-byte '¡'
        let split = "data: ".len() + 1;
        let mut buffer = LineBuffer::new();
        assert!(buffer
            .push(&Bytes::copy_from_slice(&bytes[..split]))
            .unwrap()
            .is_empty());
        let lines = buffer.push(&Bytes::copy_from_slice(&bytes[split..])).unwrap();
        assert_eq!(lines, vec!["data: ¡Batalla terminada!"]);
    }

    #[test]
    fn test_line_buffer_limit() {
        let mut buffer = LineBuffer::with_limit(4);
        let result = buffer.push(&Bytes::from("abcdef"));
        assert_eq!(result, Err(SseParseError::LineTooLong { limit: 4 }));
        assert!(!buffer.has_pending());
    }
}

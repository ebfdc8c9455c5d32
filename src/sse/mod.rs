//! SSE (Server-Sent Events) stream parser
//!
//! Parses the event stream served by the battle relay's `/connect` endpoint.
//! SSE format consists of:
//! - `event: <type>` - event type line (absent for default `message` events)
//! - `data: <payload>` - data payload line(s)
//! - `id: <id>` / `retry: <ms>` - bookkeeping fields
//! - Empty line - signals end of event
//! - Lines starting with `:` - comments such as `: ping` keepalives (ignored)
//!
//! # Module structure
//! - `events` - Event type definitions (SseEvent, SseLine, SseParseError)
//! - `parser` - Parsing logic (SseParser, LineBuffer, parse_sse_line)

mod events;
mod parser;

pub use events::{SseEvent, SseLine, SseParseError, DEFAULT_EVENT_TYPE};
pub use parser::{parse_sse_line, LineBuffer, SseParser};

//! Error handling for the battle log client.
//!
//! - **Error Categories**: high-level classification for handling decisions
//! - **Domain-specific Errors**: [`TransportError`] for the event stream,
//!   [`ConfigError`] for startup configuration
//! - **Unified Error Type**: [`ClientError`] consolidates both
//!
//! | Category | Description | Retryable |
//! |----------|-------------|-----------|
//! | Network | Connection, DNS, timeout, stream dropped | Yes |
//! | Server | Non-2xx status from the event endpoint | 5xx only |
//! | Client | Malformed stream data | No |
//! | Configuration | Bad origin, flags or environment | No |
//!
//! Transport errors never reach the user directly: the controller turns every
//! one of them into a reconnect attempt or a terminal "retry" state.

mod category;
mod client;
mod config;
mod transport;

pub use category::ErrorCategory;
pub use client::{ClientError, ClientResult};
pub use config::ConfigError;
pub use transport::{classify_reqwest_error, TransportError};

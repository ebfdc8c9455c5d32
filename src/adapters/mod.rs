//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`ReqwestSseTransport`] - server-sent event subscriptions over reqwest
//!
//! # Mock Implementations
//!
//! The [`mock`] submodule provides test doubles:
//! - [`mock::MockTransport`] - records dials and closes, simulates callbacks
//! - [`mock::RecordingView`] - records every UI mutation

pub mod mock;
pub mod reqwest_sse;

pub use mock::{MockTransport, RecordingView, ViewCall};
pub use reqwest_sse::{ReqwestSseHandle, ReqwestSseTransport};

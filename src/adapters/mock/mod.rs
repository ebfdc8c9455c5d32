//! Mock implementations for testing.
//!
//! - [`MockTransport`] - records subscriptions and lets tests drive callbacks
//! - [`RecordingView`] - records UI mutations in order

pub mod transport;
pub mod view;

pub use transport::MockTransport;
pub use view::{RecordingView, ViewCall};

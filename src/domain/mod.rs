//! Domain objects shared by the controller, the runtime and the UI.
//!
//! ## Domain Objects
//!
//! - [`SessionId`] - identity of one transport subscription
//! - [`RetryTicket`] - identity of one scheduled re-dial
//! - [`PayloadKind`] - what the marker sniffing found in a payload

pub mod markers;
pub mod session;

pub use markers::{classify_payload, PayloadKind, ENDED_MARKERS, SUMMARY_MARKER};
pub use session::{RetryTicket, SessionId};

//! Trait seams between the controller runtime and the outside world.
//!
//! # Traits
//!
//! - [`EventTransport`] - opens one server-sent event subscription per session
//! - [`TransportHandle`] - closes a subscription
//! - [`BattleView`] - the log, summary and room form the controller drives
//!
//! Production implementations live in `crate::adapters` and
//! `crate::view_state`; test doubles live in `crate::adapters::mock`.

pub mod transport;
pub mod view;

pub use transport::{EventTransport, TransportHandle, TransportSink};
pub use view::BattleView;

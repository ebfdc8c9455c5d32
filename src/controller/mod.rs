//! Connection controller: the reconnect state machine.
//!
//! The controller owns the current session, the reconnect counter and the
//! "battle ended" flag. It never touches a transport or a screen itself:
//! every trigger goes in as a [`ControllerEvent`] and every consequence comes
//! out as a list of [`Effect`]s, which the runtime applies in order.
//!
//! ```ignore
//! use battlelog::controller::{ConnectionController, ControllerEvent};
//!
//! let mut controller = ConnectionController::default();
//! let effects = controller.handle(ControllerEvent::Submit { room: "abc".into() });
//! // effects: reset log, clear summary, "connecting" affordance, open session-1
//! ```

pub mod effects;
pub mod events;
pub mod machine;
pub mod policy;

pub use effects::{Affordance, Effect, LineKind, LogLine};
pub use events::ControllerEvent;
pub use machine::{ConnectionController, Phase};
pub use policy::{ReconnectPolicy, DEFAULT_BACKOFF_STEP_MS, DEFAULT_MAX_RECONNECTS};

//! Triggers fed into the controller.

use crate::domain::{RetryTicket, SessionId};

/// Everything that can make the controller move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ControllerEvent {
    /// The user submitted the room form (raw, untrimmed input)
    Submit { room: String },
    /// The transport for `session` finished its handshake
    Opened { session: SessionId },
    /// The transport for `session` delivered a message payload
    Message { session: SessionId, data: String },
    /// The transport for `session` failed or was closed by the server
    TransportError { session: SessionId, reason: String },
    /// A scheduled re-dial timer fired
    RetryElapsed { ticket: RetryTicket },
}

impl ControllerEvent {
    /// Short name used in log output.
    pub fn name(&self) -> &'static str {
        match self {
            ControllerEvent::Submit { .. } => "submit",
            ControllerEvent::Opened { .. } => "opened",
            ControllerEvent::Message { .. } => "message",
            ControllerEvent::TransportError { .. } => "transport_error",
            ControllerEvent::RetryElapsed { .. } => "retry_elapsed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names() {
        let session = SessionId::new(1);
        assert_eq!(
            ControllerEvent::Submit { room: "a".into() }.name(),
            "submit"
        );
        assert_eq!(ControllerEvent::Opened { session }.name(), "opened");
        assert_eq!(
            ControllerEvent::RetryElapsed {
                ticket: RetryTicket::new(1, 1)
            }
            .name(),
            "retry_elapsed"
        );
    }
}

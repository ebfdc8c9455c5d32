//! Event stream transport abstraction.

use tokio::sync::mpsc;

use crate::controller::ControllerEvent;
use crate::domain::SessionId;

/// Delivers transport callbacks for one session back to the controller.
///
/// Every callback is tagged with the session it belongs to, so callbacks that
/// race with a close are recognised and dropped by the controller.
#[derive(Debug, Clone)]
pub struct TransportSink {
    session: SessionId,
    tx: mpsc::UnboundedSender<ControllerEvent>,
}

impl TransportSink {
    pub fn new(session: SessionId, tx: mpsc::UnboundedSender<ControllerEvent>) -> Self {
        Self { session, tx }
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    /// Report a completed handshake. Returns false once the receiver is gone.
    pub fn opened(&self) -> bool {
        self.send(ControllerEvent::Opened {
            session: self.session,
        })
    }

    /// Report one message payload.
    pub fn message(&self, data: impl Into<String>) -> bool {
        self.send(ControllerEvent::Message {
            session: self.session,
            data: data.into(),
        })
    }

    /// Report a failure or a server-side close.
    pub fn error(&self, reason: impl Into<String>) -> bool {
        self.send(ControllerEvent::TransportError {
            session: self.session,
            reason: reason.into(),
        })
    }

    fn send(&self, event: ControllerEvent) -> bool {
        self.tx.send(event).is_ok()
    }
}

/// A live subscription.
pub trait TransportHandle: Send {
    /// Stop delivering callbacks and release the connection. Idempotent.
    fn close(&mut self);

    /// Whether the subscription has not been closed yet.
    fn is_open(&self) -> bool;
}

/// Opens event stream subscriptions.
///
/// `open` must not block: the handshake and the stream run in the
/// background and report through `sink`.
pub trait EventTransport {
    fn open(&self, url: &str, sink: TransportSink) -> Box<dyn TransportHandle>;
}

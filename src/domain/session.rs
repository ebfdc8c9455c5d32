//! Session and retry identities.
//!
//! Every transport the controller opens gets a fresh [`SessionId`]; transport
//! callbacks carry it so that callbacks from a superseded subscription can be
//! told apart from the current one. Every scheduled re-dial gets a
//! [`RetryTicket`] for the same reason.

use std::fmt;

/// Identity of one transport subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SessionId(u64);

impl SessionId {
    /// Wrap a raw session number.
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// The raw session number.
    pub fn value(self) -> u64 {
        self.0
    }

    /// The id that follows this one.
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "session-{}", self.0)
    }
}

/// Identity of one scheduled re-dial.
///
/// A ticket is only honoured while it is the controller's pending ticket, so
/// a timer that fires after being superseded is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RetryTicket {
    id: u64,
    attempt: u32,
}

impl RetryTicket {
    /// Create a ticket for the given reconnect attempt.
    pub fn new(id: u64, attempt: u32) -> Self {
        Self { id, attempt }
    }

    /// Unique ticket number.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// The reconnect attempt (1-based) this ticket re-dials for.
    pub fn attempt(&self) -> u32 {
        self.attempt
    }
}

impl fmt::Display for RetryTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "retry-{} (attempt {})", self.id, self.attempt)
    }
}

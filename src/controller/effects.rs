//! Side effects requested by the controller.

use std::time::Duration;

use crate::domain::{RetryTicket, SessionId};

/// Kind of a log line, drives its styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// A payload received from the stream
    Event,
    /// Battle finished
    Success,
    /// Reconnect in progress
    Warning,
    /// Automatic reconnects exhausted
    Error,
}

/// One line to append to the battle log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub kind: LineKind,
    /// Markup fragment (payloads) or plain text (controller notices)
    pub text: String,
}

impl LogLine {
    pub fn event(text: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Event,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Success,
            text: text.into(),
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Warning,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: LineKind::Error,
            text: text.into(),
        }
    }
}

/// State of the room form: connect button label/enabled and input enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Affordance {
    /// Nothing dialed yet
    Ready,
    /// A fresh session is being dialed
    Connecting,
    /// The stream is open
    Connected,
    /// Waiting to re-dial after an error
    Reconnecting { attempt: u32, max: u32 },
    /// The battle ended, a new room may be entered
    Finished,
    /// Automatic reconnects are exhausted, manual retry is offered
    Retry,
}

impl Affordance {
    /// Label shown on the connect button.
    pub fn button_label(&self) -> String {
        match self {
            Affordance::Ready => "Connect".to_string(),
            Affordance::Connecting => "Connecting...".to_string(),
            Affordance::Connected => "Connected".to_string(),
            Affordance::Reconnecting { attempt, max } => {
                format!("Reconnecting ({}/{})...", attempt, max)
            }
            Affordance::Finished => "New battle".to_string(),
            Affordance::Retry => "Retry".to_string(),
        }
    }

    /// Whether the connect button accepts a submit.
    pub fn button_enabled(&self) -> bool {
        matches!(
            self,
            Affordance::Ready | Affordance::Finished | Affordance::Retry
        )
    }

    /// Whether the room input accepts typing.
    pub fn input_enabled(&self) -> bool {
        self.button_enabled()
    }
}

/// A single side effect, applied by the runtime in list order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Open a transport for `room`, tagged with `session`
    Open { session: SessionId, room: String },
    /// Close the transport tagged with `session`
    Close { session: SessionId },
    /// Post `RetryElapsed(ticket)` after `delay`
    ScheduleRetry { ticket: RetryTicket, delay: Duration },
    /// Invalidate a scheduled re-dial
    CancelRetry { ticket: RetryTicket },
    /// Clear the log and show a placeholder
    ResetLog { placeholder: String },
    /// Empty the summary panel
    ClearSummary,
    /// Append a line to the log
    AppendLine(LogLine),
    /// Keep the log scrolled to its last line
    ScrollLogToEnd,
    /// Replace the summary panel's content wholesale
    ReplaceSummary(String),
    /// Update the room form controls
    SetAffordance(Affordance),
    /// Empty the room input
    ClearRoomInput,
    /// Put the cursor back in the room input
    FocusRoomInput,
    /// Blocking user-facing alert
    Alert(String),
}

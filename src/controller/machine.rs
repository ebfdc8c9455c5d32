//! The connection state machine.
//!
//! ```text
//!            submit                opened
//!   Idle ──────────────▶ Connecting ──────▶ Connected
//!                          ▲    │ error         │ error
//!          retry elapsed   │    ▼               ▼
//!                        Retrying ◀──── (attempts < max)
//!                                       (attempts = max) ──▶ Failed
//!                                       (ended)          ──▶ Ended
//! ```
//!
//! `submit` is accepted in every state and always starts a fresh session.

use tracing::{debug, info, warn};

use super::effects::{Affordance, Effect, LogLine};
use super::events::ControllerEvent;
use super::policy::ReconnectPolicy;
use crate::domain::{classify_payload, RetryTicket, SessionId};

pub const VALIDATION_ALERT: &str = "Please enter a valid room id";
pub const IDLE_PLACEHOLDER: &str = "Events will show up here...";
pub const CONNECTING_PLACEHOLDER: &str = "Connecting...";
pub const BATTLE_FINISHED: &str = "Battle finished! You can connect to another battle.";
pub const CONNECTION_FAILED: &str = "Connection error. Check the room id and try again.";

/// Controller phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Connecting,
    Connected,
    Retrying,
    Ended,
    Failed,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::Connecting => "connecting",
            Phase::Connected => "connected",
            Phase::Retrying => "retrying",
            Phase::Ended => "ended",
            Phase::Failed => "failed",
        }
    }

    /// Phases in which stream callbacks are meaningful.
    pub fn is_streaming(&self) -> bool {
        matches!(self, Phase::Connecting | Phase::Connected | Phase::Retrying)
    }
}

/// Owns the session, the reconnect counter and the ended flag.
#[derive(Debug, Clone)]
pub struct ConnectionController {
    policy: ReconnectPolicy,
    phase: Phase,
    /// Room of the current session, kept for re-dials
    room: Option<String>,
    /// Session whose transport is currently open
    live_session: Option<SessionId>,
    /// Last session id handed out
    last_session: SessionId,
    reconnect_attempts: u32,
    ended: bool,
    pending_retry: Option<RetryTicket>,
    next_ticket: u64,
}

impl Default for ConnectionController {
    fn default() -> Self {
        Self::new(ReconnectPolicy::default())
    }
}

impl ConnectionController {
    pub fn new(policy: ReconnectPolicy) -> Self {
        Self {
            policy,
            phase: Phase::Idle,
            room: None,
            live_session: None,
            last_session: SessionId::new(0),
            reconnect_attempts: 0,
            ended: false,
            pending_retry: None,
            next_ticket: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn room(&self) -> Option<&str> {
        self.room.as_deref()
    }

    pub fn live_session(&self) -> Option<SessionId> {
        self.live_session
    }

    pub fn reconnect_attempts(&self) -> u32 {
        self.reconnect_attempts
    }

    pub fn is_ended(&self) -> bool {
        self.ended
    }

    pub fn pending_retry(&self) -> Option<RetryTicket> {
        self.pending_retry
    }

    pub fn policy(&self) -> &ReconnectPolicy {
        &self.policy
    }

    /// Apply one event and return the effects it requires, in order.
    pub fn handle(&mut self, event: ControllerEvent) -> Vec<Effect> {
        match event {
            ControllerEvent::Submit { room } => self.on_submit(&room),
            ControllerEvent::Opened { session } => self.on_opened(session),
            ControllerEvent::Message { session, data } => self.on_message(session, data),
            ControllerEvent::TransportError { session, reason } => {
                self.on_transport_error(session, &reason)
            }
            ControllerEvent::RetryElapsed { ticket } => self.on_retry_elapsed(ticket),
        }
    }

    /// Value-level form of [`handle`](Self::handle): `(state, event) -> (state, effects)`.
    pub fn step(mut self, event: ControllerEvent) -> (Self, Vec<Effect>) {
        let effects = self.handle(event);
        (self, effects)
    }

    fn on_submit(&mut self, raw: &str) -> Vec<Effect> {
        let room = raw.trim();
        if room.is_empty() {
            warn!("Rejected submit with an empty room id");
            return vec![Effect::Alert(VALIDATION_ALERT.to_string())];
        }

        let mut effects = Vec::new();
        self.cancel_pending_retry(&mut effects);
        self.close_live(&mut effects);

        self.reconnect_attempts = 0;
        self.ended = false;
        self.room = Some(room.to_string());

        effects.push(Effect::ResetLog {
            placeholder: CONNECTING_PLACEHOLDER.to_string(),
        });
        effects.push(Effect::ClearSummary);
        effects.push(Effect::SetAffordance(Affordance::Connecting));

        info!(room = room, "Dialing room");
        self.dial(room.to_string(), &mut effects);
        effects
    }

    fn on_opened(&mut self, session: SessionId) -> Vec<Effect> {
        if !self.is_current(session) {
            debug!(%session, "Ignoring open from a superseded session");
            return Vec::new();
        }

        info!(%session, "Stream opened");
        self.reconnect_attempts = 0;
        self.phase = Phase::Connected;
        vec![Effect::SetAffordance(Affordance::Connected)]
    }

    fn on_message(&mut self, session: SessionId, data: String) -> Vec<Effect> {
        if !self.is_current(session) || !self.phase.is_streaming() {
            debug!(%session, "Ignoring message from a superseded session");
            return Vec::new();
        }

        let kind = classify_payload(&data);
        let mut effects = Vec::new();

        // The ended check and the summary/log branch are independent: a single
        // payload may do both.
        if kind.ended {
            info!(%session, "Battle ended");
            self.ended = true;
            self.cancel_pending_retry(&mut effects);
            effects.push(Effect::AppendLine(LogLine::success(BATTLE_FINISHED)));
            effects.push(Effect::SetAffordance(Affordance::Finished));
            effects.push(Effect::ClearRoomInput);
            effects.push(Effect::FocusRoomInput);
        }

        if kind.summary {
            debug!(%session, bytes = data.len(), "Summary replaced");
            effects.push(Effect::ReplaceSummary(data));
        } else {
            debug!(%session, bytes = data.len(), "Log line appended");
            effects.push(Effect::AppendLine(LogLine::event(data)));
            effects.push(Effect::ScrollLogToEnd);
        }

        effects
    }

    fn on_transport_error(&mut self, session: SessionId, reason: &str) -> Vec<Effect> {
        if !self.is_current(session) {
            debug!(%session, reason, "Ignoring error from a superseded session");
            return Vec::new();
        }

        let mut effects = Vec::new();
        self.close_live(&mut effects);

        if self.ended {
            info!(%session, "Stream closed after the battle ended");
            self.phase = Phase::Ended;
            return effects;
        }

        if self.policy.allows_retry(self.reconnect_attempts) {
            self.reconnect_attempts += 1;
            let attempt = self.reconnect_attempts;
            let max = self.policy.max_attempts;
            let delay = self.policy.delay_for(attempt);

            self.next_ticket += 1;
            let ticket = RetryTicket::new(self.next_ticket, attempt);
            self.pending_retry = Some(ticket);

            warn!(
                %session,
                reason,
                attempt,
                max,
                delay_ms = delay.as_millis() as u64,
                "Stream error, scheduling reconnect"
            );
            effects.push(Effect::AppendLine(LogLine::warning(format!(
                "Reconnecting ({}/{})...",
                attempt, max
            ))));
            effects.push(Effect::ScrollLogToEnd);
            effects.push(Effect::ScheduleRetry { ticket, delay });
            effects.push(Effect::SetAffordance(Affordance::Reconnecting { attempt, max }));
            self.phase = Phase::Retrying;
        } else {
            warn!(
                %session,
                reason,
                attempts = self.reconnect_attempts,
                "Reconnects exhausted, waiting for a manual retry"
            );
            effects.push(Effect::AppendLine(LogLine::error(CONNECTION_FAILED)));
            effects.push(Effect::ScrollLogToEnd);
            effects.push(Effect::SetAffordance(Affordance::Retry));
            self.phase = Phase::Failed;
        }

        effects
    }

    fn on_retry_elapsed(&mut self, ticket: RetryTicket) -> Vec<Effect> {
        if self.pending_retry != Some(ticket) {
            debug!(%ticket, "Ignoring superseded retry");
            return Vec::new();
        }
        self.pending_retry = None;

        if self.ended {
            debug!(%ticket, "Skipping retry, battle already ended");
            return Vec::new();
        }

        let Some(room) = self.room.clone() else {
            return Vec::new();
        };

        let mut effects = Vec::new();
        self.close_live(&mut effects);
        info!(%ticket, room = room.as_str(), "Re-dialing room");
        self.dial(room, &mut effects);
        effects
    }

    fn dial(&mut self, room: String, effects: &mut Vec<Effect>) {
        let session = self.last_session.next();
        self.last_session = session;
        self.live_session = Some(session);
        self.phase = Phase::Connecting;
        effects.push(Effect::Open { session, room });
    }

    fn close_live(&mut self, effects: &mut Vec<Effect>) {
        if let Some(session) = self.live_session.take() {
            effects.push(Effect::Close { session });
        }
    }

    fn cancel_pending_retry(&mut self, effects: &mut Vec<Effect>) {
        if let Some(ticket) = self.pending_retry.take() {
            effects.push(Effect::CancelRetry { ticket });
        }
    }

    fn is_current(&self, session: SessionId) -> bool {
        self.live_session == Some(session)
    }
}

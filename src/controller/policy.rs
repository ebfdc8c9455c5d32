//! Reconnect policy: bounded, linear backoff.

use std::time::Duration;

/// Automatic reconnect attempts before the user has to retry by hand.
pub const DEFAULT_MAX_RECONNECTS: u32 = 10;

/// Backoff step; attempt `n` waits `n` steps.
pub const DEFAULT_BACKOFF_STEP_MS: u64 = 2_000;

/// How many automatic re-dials are allowed and how long each one waits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReconnectPolicy {
    /// Attempts allowed in one failure streak
    pub max_attempts: u32,
    /// Linear backoff step
    pub backoff_step: Duration,
}

impl Default for ReconnectPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_RECONNECTS,
            backoff_step: Duration::from_millis(DEFAULT_BACKOFF_STEP_MS),
        }
    }
}

impl ReconnectPolicy {
    /// Create a policy with explicit limits.
    pub fn new(max_attempts: u32, backoff_step: Duration) -> Self {
        Self {
            max_attempts,
            backoff_step,
        }
    }

    /// Delay before re-dialing for the given 1-based attempt.
    ///
    /// Linear, not exponential: 2s, 4s, 6s, ... with the default step.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        self.backoff_step.saturating_mul(attempt)
    }

    /// Whether another automatic attempt is allowed after `attempts` failures.
    pub fn allows_retry(&self, attempts: u32) -> bool {
        attempts < self.max_attempts
    }
}

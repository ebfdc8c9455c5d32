//! Client configuration.
//!
//! Precedence, lowest first: built-in defaults, `BATTLELOG_*` environment
//! variables, command-line flags.

use std::path::PathBuf;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

use crate::controller::{ReconnectPolicy, DEFAULT_BACKOFF_STEP_MS, DEFAULT_MAX_RECONNECTS};
use crate::endpoint::{parse_origin, Endpoint};
use crate::error::ConfigError;

/// Origin assumed when none is configured.
pub const DEFAULT_ORIGIN: &str = "http://localhost:8080";

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Upper bound on one TCP/TLS handshake before it counts as a failed attempt.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

pub const ENV_ORIGIN: &str = "BATTLELOG_ORIGIN";
pub const ENV_LOG_FILE: &str = "BATTLELOG_LOG_FILE";
pub const ENV_LOG_LEVEL: &str = "BATTLELOG_LOG_LEVEL";

/// Configuration for one client run.
///
/// # Example
///
/// ```ignore
/// use battlelog::config::ClientConfig;
///
/// let config = ClientConfig::default()
///     .with_origin("https://battles.example.com")
///     .with_initial_room("abc");
/// config.validate()?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Origin the client is pointed at; `localhost` resolves to the dev server
    pub origin: String,
    /// Automatic reconnects per failure streak
    pub max_reconnects: u32,
    /// Linear backoff step
    pub backoff_step: Duration,
    /// Handshake limit per subscription
    pub connect_timeout: Duration,
    /// Log file override
    pub log_file: Option<PathBuf>,
    /// Room submitted right after startup
    pub initial_room: Option<String>,
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN.to_string(),
            max_reconnects: DEFAULT_MAX_RECONNECTS,
            backoff_step: Duration::from_millis(DEFAULT_BACKOFF_STEP_MS),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            log_file: None,
            initial_room: None,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into();
        self
    }

    pub fn with_max_reconnects(mut self, max: u32) -> Self {
        self.max_reconnects = max;
        self
    }

    pub fn with_backoff_step(mut self, step: Duration) -> Self {
        self.backoff_step = step;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = Some(path.into());
        self
    }

    pub fn with_initial_room(mut self, room: impl Into<String>) -> Self {
        self.initial_room = Some(room.into());
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Defaults overridden by `BATTLELOG_*` variables. Empty values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(origin) = env_value(ENV_ORIGIN) {
            config = config.with_origin(origin);
        }
        if let Some(path) = env_value(ENV_LOG_FILE) {
            config = config.with_log_file(path);
        }
        if let Some(level) = env_value(ENV_LOG_LEVEL) {
            config = config.with_log_level(level);
        }
        config
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        parse_origin(&self.origin)?;
        if self.backoff_step.is_zero() {
            return Err(ConfigError::ZeroBackoff);
        }
        if self.connect_timeout.is_zero() {
            return Err(ConfigError::ZeroConnectTimeout);
        }
        EnvFilter::try_new(&self.log_level)
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))?;
        Ok(())
    }

    pub fn policy(&self) -> ReconnectPolicy {
        ReconnectPolicy::new(self.max_reconnects, self.backoff_step)
    }

    pub fn endpoint(&self) -> Result<Endpoint, ConfigError> {
        Endpoint::from_origin(&self.origin)
    }

    /// Where logs go: the override, else `<data dir>/battlelog/battlelog.log`.
    pub fn resolved_log_file(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(default_log_file)
    }
}

pub fn default_log_file() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("battlelog").join("battlelog.log"))
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

//! Configuration errors.

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid origin '{value}': {reason}")]
    InvalidOrigin { value: String, reason: String },

    #[error("Backoff step must be greater than zero")]
    ZeroBackoff,

    #[error("Connect timeout must be greater than zero")]
    ZeroConnectTimeout,

    #[error("Invalid log level '{0}'")]
    InvalidLogLevel(String),

    #[error("Unknown argument: {0}")]
    UnknownArgument(String),

    #[error("Missing value for {0}")]
    MissingValue(String),

    #[error("Invalid value for {flag}: {value}")]
    InvalidValue { flag: String, value: String },
}

impl ConfigError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::InvalidOrigin { .. } => "CONFIG_ORIGIN",
            ConfigError::ZeroBackoff => "CONFIG_BACKOFF",
            ConfigError::ZeroConnectTimeout => "CONFIG_CONNECT_TIMEOUT",
            ConfigError::InvalidLogLevel(_) => "CONFIG_LOG_LEVEL",
            ConfigError::UnknownArgument(_) => "CLI_UNKNOWN_ARG",
            ConfigError::MissingValue(_) => "CLI_MISSING_VALUE",
            ConfigError::InvalidValue { .. } => "CLI_INVALID_VALUE",
        }
    }
}

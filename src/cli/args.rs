//! Command-line argument parsing.

use std::path::PathBuf;

use crate::config::ClientConfig;
use crate::error::ConfigError;

/// Parsed CLI command to execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliCommand {
    /// Show version information
    Version,
    /// Show usage
    Help,
    /// Run the TUI application (default)
    RunTui(CliOptions),
}

/// Flags that override configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOptions {
    pub origin: Option<String>,
    pub room: Option<String>,
    pub log_file: Option<PathBuf>,
    pub log_level: Option<String>,
}

impl CliOptions {
    /// Apply the flags on top of `config`.
    pub fn apply(self, mut config: ClientConfig) -> ClientConfig {
        if let Some(origin) = self.origin {
            config = config.with_origin(origin);
        }
        if let Some(room) = self.room {
            config = config.with_initial_room(room);
        }
        if let Some(path) = self.log_file {
            config = config.with_log_file(path);
        }
        if let Some(level) = self.log_level {
            config = config.with_log_level(level);
        }
        config
    }
}

/// Parse command-line arguments (program name first).
///
/// `--version` and `--help` win over everything else. Value flags accept both
/// `--flag value` and `--flag=value`.
///
/// # Examples
///
/// ```
/// use battlelog::cli::args::{parse_args, CliCommand};
///
/// let args = vec!["battlelog".to_string(), "--version".to_string()];
/// assert_eq!(parse_args(args).unwrap(), CliCommand::Version);
/// ```
pub fn parse_args<I>(args: I) -> Result<CliCommand, ConfigError>
where
    I: IntoIterator<Item = String>,
{
    let mut options = CliOptions::default();
    let mut args = args.into_iter().skip(1);

    while let Some(arg) = args.next() {
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };

        match flag.as_str() {
            "--version" | "-V" => return Ok(CliCommand::Version),
            "--help" | "-h" => return Ok(CliCommand::Help),
            "--origin" => options.origin = Some(take_value(&flag, inline, &mut args)?),
            "--room" => options.room = Some(take_value(&flag, inline, &mut args)?),
            "--log-file" => {
                options.log_file = Some(PathBuf::from(take_value(&flag, inline, &mut args)?))
            }
            "--log-level" => options.log_level = Some(take_value(&flag, inline, &mut args)?),
            _ => return Err(ConfigError::UnknownArgument(arg)),
        }
    }

    Ok(CliCommand::RunTui(options))
}

fn take_value(
    flag: &str,
    inline: Option<String>,
    rest: &mut impl Iterator<Item = String>,
) -> Result<String, ConfigError> {
    let value = match inline {
        Some(value) => value,
        None => rest
            .next()
            .ok_or_else(|| ConfigError::MissingValue(flag.to_string()))?,
    };
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            flag: flag.to_string(),
            value,
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliCommand, ConfigError> {
        parse_args(
            std::iter::once("battlelog")
                .chain(args.iter().copied())
                .map(String::from),
        )
    }

    #[test]
    fn test_parse_version_flags() {
        assert_eq!(parse(&["--version"]).unwrap(), CliCommand::Version);
        assert_eq!(parse(&["-V"]).unwrap(), CliCommand::Version);
    }

    #[test]
    fn test_parse_help_flags() {
        assert_eq!(parse(&["--help"]).unwrap(), CliCommand::Help);
        assert_eq!(parse(&["--room", "abc", "-h"]).unwrap(), CliCommand::Help);
    }

    #[test]
    fn test_parse_no_args() {
        assert_eq!(
            parse(&[]).unwrap(),
            CliCommand::RunTui(CliOptions::default())
        );
    }

    #[test]
    fn test_parse_value_flags() {
        let command = parse(&[
            "--origin",
            "https://example.com",
            "--room=abc",
            "--log-file",
            "/tmp/x.log",
            "--log-level=debug",
        ])
        .unwrap();
        assert_eq!(
            command,
            CliCommand::RunTui(CliOptions {
                origin: Some("https://example.com".into()),
                room: Some("abc".into()),
                log_file: Some(PathBuf::from("/tmp/x.log")),
                log_level: Some("debug".into()),
            })
        );
    }

    #[test]
    fn test_room_value_may_contain_equals() {
        let command = parse(&["--room=a=b"]).unwrap();
        assert!(matches!(
            command,
            CliCommand::RunTui(CliOptions { room: Some(room), .. }) if room == "a=b"
        ));
    }

    #[test]
    fn test_parse_unknown_flag() {
        assert_eq!(
            parse(&["--unknown"]),
            Err(ConfigError::UnknownArgument("--unknown".into()))
        );
    }

    #[test]
    fn test_parse_missing_value() {
        assert_eq!(
            parse(&["--origin"]),
            Err(ConfigError::MissingValue("--origin".into()))
        );
        assert!(matches!(
            parse(&["--room="]),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_options_override_config() {
        let config = CliOptions {
            origin: Some("https://example.com".into()),
            room: Some("abc".into()),
            ..CliOptions::default()
        }
        .apply(ClientConfig::default().with_log_level("warn"));

        assert_eq!(config.origin, "https://example.com");
        assert_eq!(config.initial_room.as_deref(), Some("abc"));
        assert_eq!(config.log_level, "warn");
    }
}

//! Command-line interface.
//!
//! The CLI dispatcher is called early in main(), before the terminal is
//! taken over:
//!
//! ```ignore
//! use battlelog::cli::{parse_args, run_cli_command, CliCommand};
//!
//! let command = parse_args(std::env::args())?;
//! if run_cli_command(&command) {
//!     return Ok(());
//! }
//! // CliCommand::RunTui(options): continue to the TUI
//! ```

pub mod args;
pub mod help;
pub mod version;

pub use args::{parse_args, CliCommand, CliOptions};
pub use help::{handle_help_command, HELP};
pub use version::{handle_version_command, VERSION};

/// Run a CLI-only command. Returns true when the process should exit.
pub fn run_cli_command(command: &CliCommand) -> bool {
    match command {
        CliCommand::Version => {
            handle_version_command();
            true
        }
        CliCommand::Help => {
            handle_help_command();
            true
        }
        CliCommand::RunTui(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_tui_is_not_handled() {
        assert!(!run_cli_command(&CliCommand::RunTui(CliOptions::default())));
    }
}

//! Help command.

pub const HELP: &str = "\
battlelog - follow a battle room's live event stream

USAGE:
    battlelog [OPTIONS]

OPTIONS:
    --origin <URL>        Server origin (default http://localhost:8080;
                          any localhost origin streams from port 42069)
    --room <ID>           Connect to this room at startup
    --log-file <PATH>     Write logs here instead of the data directory
    --log-level <FILTER>  Log filter when RUST_LOG is unset (default info)
    -h, --help            Print help
    -V, --version         Print version

ENVIRONMENT:
    BATTLELOG_ORIGIN, BATTLELOG_LOG_FILE, BATTLELOG_LOG_LEVEL, RUST_LOG

KEYS:
    Enter             Connect (when the input is enabled)
    PgUp / PgDn       Scroll the log
    Ctrl+Home / End   Jump to the top or end of the log
    Esc               Dismiss an alert
    Ctrl+C            Quit
";

pub fn handle_help_command() {
    print!("{}", HELP);
}

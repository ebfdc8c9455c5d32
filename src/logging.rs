//! Structured logging with tracing.
//!
//! The terminal belongs to the UI, so events are written to a file. When no
//! file can be opened logging stays off.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

/// Where log output ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    File(PathBuf),
    Disabled(String),
}

/// Filter from `RUST_LOG`, else from `level`.
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
}

/// Open `path` for appending, creating parent directories.
pub fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber. Safe to call once per process.
pub fn init_logging(level: &str, path: Option<&Path>) -> LogTarget {
    let Some(path) = path else {
        return LogTarget::Disabled("no log directory available".to_string());
    };

    let file = match open_log_file(path) {
        Ok(file) => file,
        Err(e) => return LogTarget::Disabled(format!("{}: {}", path.display(), e)),
    };

    let installed = fmt()
        .with_env_filter(build_filter(level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .compact()
        .try_init();

    match installed {
        Ok(()) => LogTarget::File(path.to_path_buf()),
        Err(e) => LogTarget::Disabled(e.to_string()),
    }
}

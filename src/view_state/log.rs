//! Battle log entries.

use chrono::{DateTime, Local};

use crate::controller::{LineKind, LogLine};

#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub kind: LineKind,
    /// Markup for stream payloads, plain text for notices
    pub text: String,
    pub received_at: DateTime<Local>,
}

/// Ordered log with an optional placeholder.
///
/// The placeholder is shown while the log is empty and disappears with the
/// first appended line.
#[derive(Debug, Clone)]
pub struct LogState {
    entries: Vec<LogEntry>,
    placeholder: Option<String>,
}

impl LogState {
    pub fn new(placeholder: &str) -> Self {
        Self {
            entries: Vec::new(),
            placeholder: Some(placeholder.to_string()),
        }
    }

    pub fn reset(&mut self, placeholder: &str) {
        self.entries.clear();
        self.placeholder = Some(placeholder.to_string());
    }

    pub fn append(&mut self, line: LogLine) {
        self.placeholder = None;
        self.entries.push(LogEntry {
            kind: line.kind,
            text: line.text,
            received_at: Local::now(),
        });
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count_of(&self, kind: LineKind) -> usize {
        self.entries.iter().filter(|e| e.kind == kind).count()
    }
}

//! Recording view for testing.

use crate::controller::{Affordance, LineKind, LogLine};
use crate::traits::BattleView;

/// One recorded [`BattleView`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCall {
    ResetLog(String),
    AppendLine(LogLine),
    ScrollLogToEnd,
    ReplaceSummary(String),
    ClearSummary,
    SetAffordance(Affordance),
    ClearRoomInput,
    FocusRoomInput,
    Alert(String),
}

/// View that records every call in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    pub calls: Vec<ViewCall>,
}

impl RecordingView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines appended since the last log reset.
    pub fn log_lines(&self) -> Vec<LogLine> {
        let start = self
            .calls
            .iter()
            .rposition(|c| matches!(c, ViewCall::ResetLog(_)))
            .map_or(0, |i| i + 1);
        self.calls[start..]
            .iter()
            .filter_map(|c| match c {
                ViewCall::AppendLine(line) => Some(line.clone()),
                _ => None,
            })
            .collect()
    }

    /// Texts of appended lines of one kind, across resets.
    pub fn texts_of(&self, kind: LineKind) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                ViewCall::AppendLine(line) if line.kind == kind => Some(line.text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn last_affordance(&self) -> Option<Affordance> {
        self.calls.iter().rev().find_map(|c| match c {
            ViewCall::SetAffordance(a) => Some(*a),
            _ => None,
        })
    }

    /// Current summary content: the last replace, unless cleared since.
    pub fn summary(&self) -> Option<String> {
        self.calls.iter().rev().find_map(|c| match c {
            ViewCall::ReplaceSummary(s) => Some(Some(s.clone())),
            ViewCall::ClearSummary => Some(None),
            _ => None,
        })?
    }

    pub fn alerts(&self) -> Vec<String> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                ViewCall::Alert(message) => Some(message.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl BattleView for RecordingView {
    fn reset_log(&mut self, placeholder: &str) {
        self.calls.push(ViewCall::ResetLog(placeholder.to_string()));
    }

    fn append_line(&mut self, line: LogLine) {
        self.calls.push(ViewCall::AppendLine(line));
    }

    fn scroll_log_to_end(&mut self) {
        self.calls.push(ViewCall::ScrollLogToEnd);
    }

    fn replace_summary(&mut self, markup: &str) {
        self.calls.push(ViewCall::ReplaceSummary(markup.to_string()));
    }

    fn clear_summary(&mut self) {
        self.calls.push(ViewCall::ClearSummary);
    }

    fn set_affordance(&mut self, affordance: Affordance) {
        self.calls.push(ViewCall::SetAffordance(affordance));
    }

    fn clear_room_input(&mut self) {
        self.calls.push(ViewCall::ClearRoomInput);
    }

    fn focus_room_input(&mut self) {
        self.calls.push(ViewCall::FocusRoomInput);
    }

    fn alert(&mut self, message: &str) {
        self.calls.push(ViewCall::Alert(message.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_lines_since_reset() {
        let mut view = RecordingView::new();
        view.append_line(LogLine::event("old"));
        view.reset_log("Connecting...");
        view.append_line(LogLine::event("new"));
        assert_eq!(view.log_lines(), vec![LogLine::event("new")]);
        assert_eq!(view.texts_of(LineKind::Event), vec!["old", "new"]);
    }

    #[test]
    fn test_summary_tracks_clear() {
        let mut view = RecordingView::new();
        assert_eq!(view.summary(), None);
        view.replace_summary("<div>1</div>");
        assert_eq!(view.summary().as_deref(), Some("<div>1</div>"));
        view.clear_summary();
        assert_eq!(view.summary(), None);
    }
}

//! View state: everything the UI renders, mutated only through [`BattleView`].
//!
//! ```text
//! SessionDriver ──effects──▶ ViewState ──borrow──▶ ui::render
//! ```
//!
//! ## Components
//!
//! - [`ViewState`]: aggregate implementing [`BattleView`]
//! - [`LogState`]: battle log entries and placeholder
//! - [`RoomForm`]: room input, cursor and connect button
//! - [`ScrollState`]: log scroll position

mod form;
mod log;
mod scroll_state;

pub use form::RoomForm;
pub use log::{LogEntry, LogState};
pub use scroll_state::ScrollState;

use chrono::{DateTime, Local};

use crate::controller::{Affordance, LogLine};
use crate::traits::BattleView;

/// Initial placeholder shown before any room is dialed.
pub use crate::controller::machine::IDLE_PLACEHOLDER;

#[derive(Debug, Clone)]
pub struct ViewState {
    pub log: LogState,
    /// Summary panel markup, replaced wholesale
    pub summary: Option<String>,
    pub summary_updated_at: Option<DateTime<Local>>,
    pub form: RoomForm,
    /// Pending blocking alert
    pub alert: Option<String>,
    pub scroll: ScrollState,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            log: LogState::new(IDLE_PLACEHOLDER),
            summary: None,
            summary_updated_at: None,
            form: RoomForm::new(),
            alert: None,
            scroll: ScrollState::new(),
        }
    }

    /// Start with a room already typed in.
    pub fn with_room(mut self, room: &str) -> Self {
        self.form.set_value(room);
        self
    }

    pub fn affordance(&self) -> Affordance {
        self.form.affordance()
    }

    pub fn has_alert(&self) -> bool {
        self.alert.is_some()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }
}

impl BattleView for ViewState {
    fn reset_log(&mut self, placeholder: &str) {
        self.log.reset(placeholder);
        self.scroll.scroll_to_end();
    }

    fn append_line(&mut self, line: LogLine) {
        self.log.append(line);
    }

    fn scroll_log_to_end(&mut self) {
        self.scroll.scroll_to_end();
    }

    fn replace_summary(&mut self, markup: &str) {
        self.summary = Some(markup.to_string());
        self.summary_updated_at = Some(Local::now());
    }

    fn clear_summary(&mut self) {
        self.summary = None;
        self.summary_updated_at = None;
    }

    fn set_affordance(&mut self, affordance: Affordance) {
        self.form.set_affordance(affordance);
    }

    fn clear_room_input(&mut self) {
        self.form.clear();
    }

    fn focus_room_input(&mut self) {
        self.form.focus();
    }

    fn alert(&mut self, message: &str) {
        self.alert = Some(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::LineKind;

    #[test]
    fn test_initial_state() {
        let view = ViewState::new();
        assert_eq!(view.log.placeholder(), Some(IDLE_PLACEHOLDER));
        assert!(view.log.is_empty());
        assert_eq!(view.affordance(), Affordance::Ready);
        assert!(view.summary.is_none());
        assert!(!view.has_alert());
    }

    #[test]
    fn test_reset_then_first_line_removes_placeholder() {
        let mut view = ViewState::new();
        view.reset_log("Connecting...");
        assert_eq!(view.log.placeholder(), Some("Connecting..."));

        view.append_line(LogLine::event("Turn 1"));
        assert_eq!(view.log.placeholder(), None);
        assert_eq!(view.log.entries()[0].kind, LineKind::Event);
    }

    #[test]
    fn test_summary_replaced_and_cleared() {
        let mut view = ViewState::new();
        view.replace_summary("<div class='battle-summary'>1</div>");
        view.replace_summary("<div class='battle-summary'>2</div>");
        assert_eq!(
            view.summary.as_deref(),
            Some("<div class='battle-summary'>2</div>")
        );
        assert!(view.summary_updated_at.is_some());

        view.clear_summary();
        assert!(view.summary.is_none());
    }

    #[test]
    fn test_alert_dismissed() {
        let mut view = ViewState::new();
        view.alert("Please enter a valid room id");
        assert!(view.has_alert());
        view.dismiss_alert();
        assert!(!view.has_alert());
    }

    #[test]
    fn test_finished_clears_and_focuses_input() {
        let mut view = ViewState::new().with_room("abc");
        view.form.blur();
        view.set_affordance(Affordance::Finished);
        view.clear_room_input();
        view.focus_room_input();
        assert_eq!(view.form.value(), "");
        assert!(view.form.is_focused());
        assert!(view.form.is_enabled());
    }
}

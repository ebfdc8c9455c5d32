//! UI collaborator driven by the controller.

use crate::controller::{Affordance, LogLine};

/// The surface the controller's UI effects are applied to.
///
/// Implemented by the terminal view state and by a recording mock in tests.
pub trait BattleView {
    /// Remove every log line and show `placeholder` until the first line arrives.
    fn reset_log(&mut self, placeholder: &str);

    fn append_line(&mut self, line: LogLine);

    /// Make the last log line visible and keep following new ones.
    fn scroll_log_to_end(&mut self);

    /// Replace the summary panel with a markup fragment.
    fn replace_summary(&mut self, markup: &str);

    fn clear_summary(&mut self);

    fn set_affordance(&mut self, affordance: Affordance);

    fn clear_room_input(&mut self);

    fn focus_room_input(&mut self);

    /// Blocking alert, dismissed by the user.
    fn alert(&mut self, message: &str);
}

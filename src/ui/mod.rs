//! UI rendering
//!
//! One screen, top to bottom:
//! - Header
//! - Room form: input plus connect button
//! - Log panel and summary panel, side by side or stacked on narrow terminals
//! - Status line
//!
//! A pending alert is drawn over everything and takes the keyboard.

mod alert;
mod form;
mod layout;
mod log_panel;
mod status;
mod styled;
mod summary_panel;
pub mod theme;

pub use layout::{screen_areas, LayoutContext, ScreenAreas};
pub use log_panel::log_lines;
pub use status::StatusInfo;
pub use summary_panel::summary_lines;

use ratatui::Frame;

use crate::view_state::ViewState;

/// Render the whole screen.
pub fn render(frame: &mut Frame, view: &mut ViewState, status: &StatusInfo) {
    let areas = screen_areas(frame.area());

    form::render_header(frame, areas.header);
    form::render_form(frame, &view.form, areas.form, !view.has_alert());
    log_panel::render_log(frame, view, areas.log);
    summary_panel::render_summary(frame, view, areas.summary);
    status::render_status(frame, status, areas.status);

    if let Some(message) = view.alert.as_deref() {
        alert::render_alert(frame, message, frame.area());
    }
}

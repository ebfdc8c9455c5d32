//! Status line and keybind hints.

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::theme::{COLOR_DIM, COLOR_ERROR, COLOR_SUCCESS, COLOR_WARNING};
use crate::controller::Phase;

/// Connection facts shown at the bottom of the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusInfo {
    pub stream_origin: String,
    pub phase: Phase,
    pub room: Option<String>,
    pub attempts: u32,
    pub max_attempts: u32,
}

impl StatusInfo {
    pub fn label(&self) -> String {
        match self.phase {
            Phase::Retrying => format!(
                "{} {}/{}",
                self.phase.as_str(),
                self.attempts,
                self.max_attempts
            ),
            _ => self.phase.as_str().to_string(),
        }
    }
}

fn phase_style(phase: Phase) -> Style {
    match phase {
        Phase::Connected => Style::default().fg(COLOR_SUCCESS),
        Phase::Connecting | Phase::Retrying => Style::default().fg(COLOR_WARNING),
        Phase::Failed => Style::default().fg(COLOR_ERROR),
        Phase::Idle | Phase::Ended => Style::default().fg(COLOR_DIM),
    }
}

pub fn status_line(status: &StatusInfo) -> Line<'static> {
    let dim = Style::default().fg(COLOR_DIM);
    let mut spans = vec![
        Span::styled("● ", phase_style(status.phase)),
        Span::styled(status.label(), phase_style(status.phase)),
        Span::styled(format!("  {}", status.stream_origin), dim),
    ];
    if let Some(room) = &status.room {
        spans.push(Span::styled(format!("  room {}", room), dim));
    }
    spans.push(Span::styled(
        "  Enter connect · PgUp/PgDn scroll · Ctrl+C quit",
        dim,
    ));
    Line::from(spans)
}

pub fn render_status(frame: &mut Frame, status: &StatusInfo, area: Rect) {
    frame.render_widget(Paragraph::new(status_line(status)), area);
}

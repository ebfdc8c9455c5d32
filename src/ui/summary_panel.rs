//! Summary panel: the latest battle-state fragment.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::styled::markup_to_lines;
use super::theme::{COLOR_BORDER, COLOR_DIM};
use crate::view_state::ViewState;

pub fn summary_lines(view: &ViewState) -> Vec<Line<'static>> {
    match view.summary.as_deref() {
        Some(markup) => markup_to_lines(markup, Style::default()),
        None => vec![Line::from(Span::styled(
            "No summary yet",
            Style::default().fg(COLOR_DIM).add_modifier(Modifier::ITALIC),
        ))],
    }
}

pub fn render_summary(frame: &mut Frame, view: &ViewState, area: Rect) {
    let mut block = Block::default()
        .title(" Summary ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    if let Some(at) = view.summary_updated_at {
        block = block.title_bottom(
            Line::from(Span::styled(
                format!(" {} ", at.format("%H:%M:%S")),
                Style::default().fg(COLOR_DIM),
            ))
            .right_aligned(),
        );
    }

    let paragraph = Paragraph::new(summary_lines(view))
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

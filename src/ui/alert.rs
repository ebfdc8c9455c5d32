//! Blocking alert dialog.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::layout::centered_rect;
use super::theme::{COLOR_DIALOG_BG, COLOR_DIM, COLOR_HEADER, COLOR_WARNING};

pub fn render_alert(frame: &mut Frame, message: &str, area: Rect) {
    let width = (message.chars().count() as u16 + 6).clamp(30, 60);
    let dialog = centered_rect(width, 6, area);

    let lines = vec![
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(COLOR_HEADER),
        )),
        Line::default(),
        Line::from(Span::styled(
            "Press Enter or Esc to dismiss",
            Style::default().fg(COLOR_DIM),
        )),
    ];

    let block = Block::default()
        .title(Span::styled(
            " Alert ",
            Style::default()
                .fg(COLOR_WARNING)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_WARNING))
        .style(Style::default().bg(COLOR_DIALOG_BG));

    frame.render_widget(Clear, dialog);
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        dialog,
    );
}

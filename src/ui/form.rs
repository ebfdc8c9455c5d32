//! Header and room form.

use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::theme::{
    COLOR_BORDER, COLOR_BORDER_FOCUSED, COLOR_BUTTON_BUSY, COLOR_BUTTON_ENABLED, COLOR_DIM,
    COLOR_HEADER, COLOR_INPUT_BG,
};
use crate::view_state::RoomForm;

const TITLE: &str = "Battle Log";
const SUBTITLE: &str = "Live events from a battle room";

pub fn render_header(frame: &mut Frame, area: Rect) {
    let mut lines = vec![Line::from(Span::styled(
        TITLE,
        Style::default()
            .fg(COLOR_HEADER)
            .add_modifier(Modifier::BOLD),
    ))];
    if area.height > 1 {
        lines.push(Line::from(Span::styled(SUBTITLE, Style::default().fg(COLOR_DIM))));
    }
    frame.render_widget(Paragraph::new(lines), area);
}

/// Width of the connect button including its border.
pub fn button_width(form: &RoomForm) -> u16 {
    // "Reconnecting (10/10)..." is the widest label
    (form.button_label().chars().count() as u16 + 4).max(14)
}

pub fn render_form(frame: &mut Frame, form: &RoomForm, area: Rect, accepts_input: bool) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(button_width(form))])
        .split(area);

    let enabled = form.is_enabled();
    let focused = form.is_focused() && accepts_input;

    let border = if focused && enabled {
        COLOR_BORDER_FOCUSED
    } else {
        COLOR_BORDER
    };
    let text_style = if enabled {
        Style::default().bg(COLOR_INPUT_BG)
    } else {
        Style::default().bg(COLOR_INPUT_BG).fg(COLOR_DIM)
    };

    let content = if form.value().is_empty() {
        Span::styled("Room id", Style::default().fg(COLOR_DIM))
    } else {
        Span::raw(form.value().to_string())
    };

    let input = Paragraph::new(Line::from(content))
        .style(text_style)
        .block(
            Block::default()
                .title(" Room ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border)),
        );
    frame.render_widget(input, columns[0]);

    let button_color = if enabled {
        COLOR_BUTTON_ENABLED
    } else {
        COLOR_BUTTON_BUSY
    };
    let button = Paragraph::new(Line::from(Span::styled(
        form.button_label(),
        Style::default()
            .fg(button_color)
            .add_modifier(Modifier::BOLD),
    )))
    .centered()
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(button_color)),
    );
    frame.render_widget(button, columns[1]);

    if focused && enabled {
        let inner_width = columns[0].width.saturating_sub(2);
        let column = (form.cursor_column() as u16).min(inner_width.saturating_sub(1));
        frame.set_cursor_position(Position::new(columns[0].x + 1 + column, columns[0].y + 1));
    }
}

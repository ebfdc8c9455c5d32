//! Battle log panel.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use super::styled::{markup_to_lines, wrap_lines};
use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_ERROR, COLOR_PLACEHOLDER, COLOR_SUCCESS, COLOR_WARNING};
use crate::controller::LineKind;
use crate::view_state::{LogEntry, ScrollState, ViewState};

fn base_style(kind: LineKind) -> Style {
    match kind {
        LineKind::Event => Style::default(),
        LineKind::Success => Style::default().fg(COLOR_SUCCESS).add_modifier(Modifier::BOLD),
        LineKind::Warning => Style::default().fg(COLOR_WARNING),
        LineKind::Error => Style::default().fg(COLOR_ERROR).add_modifier(Modifier::BOLD),
    }
}

/// Display lines of one entry, timestamp on the first one.
pub fn entry_lines(entry: &LogEntry) -> Vec<Line<'static>> {
    let base = base_style(entry.kind);
    let mut lines = match entry.kind {
        LineKind::Event => markup_to_lines(&entry.text, base),
        _ => vec![Line::from(Span::styled(entry.text.clone(), base))],
    };

    let stamp = Span::styled(
        entry.received_at.format("%H:%M:%S ").to_string(),
        Style::default().fg(COLOR_DIM),
    );
    if let Some(first) = lines.first_mut() {
        first.spans.insert(0, stamp);
    }
    lines
}

/// Every display line of the log, unwrapped.
pub fn log_lines(view: &ViewState) -> Vec<Line<'static>> {
    if view.log.is_empty() {
        let placeholder = view.log.placeholder().unwrap_or_default().to_string();
        return vec![Line::from(Span::styled(
            placeholder,
            Style::default()
                .fg(COLOR_PLACEHOLDER)
                .add_modifier(Modifier::ITALIC),
        ))];
    }
    view.log.entries().iter().flat_map(entry_lines).collect()
}

/// First visible row for a wrapped height and viewport, updating scroll bounds.
pub fn visible_from(scroll: &mut ScrollState, content_rows: usize, viewport_rows: u16) -> usize {
    let max = content_rows.saturating_sub(viewport_rows as usize);
    scroll.set_max_scroll(max);
    max - scroll.offset
}

/// The wrapped rows that fit the viewport at the current scroll offset.
///
/// `Paragraph::scroll` takes a `u16` row offset, so long logs are sliced here.
pub fn visible_rows(
    rows: Vec<Line<'static>>,
    scroll: &mut ScrollState,
    viewport_rows: u16,
) -> Vec<Line<'static>> {
    let top = visible_from(scroll, rows.len(), viewport_rows);
    rows.into_iter()
        .skip(top)
        .take(viewport_rows as usize)
        .collect()
}

pub fn render_log(frame: &mut Frame, view: &mut ViewState, area: Rect) {
    let block = Block::default()
        .title(" Log ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);

    let rows = visible_rows(
        wrap_lines(log_lines(view), inner.width),
        &mut view.scroll,
        inner.height,
    );

    let block = if view.scroll.user_has_scrolled {
        block.title_bottom(Line::from(format!(" {}% ", view.scroll.scroll_percentage())).right_aligned())
    } else {
        block
    };

    frame.render_widget(Paragraph::new(rows).block(block), area);
}

//! Markup to ratatui text conversion.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthChar;

use super::theme::class_color;
use crate::markup::{parse_markup, MarkupLine, SpanStyle};

pub fn span_style(style: &SpanStyle, base: Style) -> Style {
    let mut out = base;
    if let Some(color) = style.class.as_deref().and_then(class_color) {
        out = out.fg(color);
    }
    if let Some((r, g, b)) = style.color {
        out = out.fg(Color::Rgb(r, g, b));
    }
    if style.bold {
        out = out.add_modifier(Modifier::BOLD);
    }
    if style.italic {
        out = out.add_modifier(Modifier::ITALIC);
    }
    out
}

pub fn to_line(line: &MarkupLine, base: Style) -> Line<'static> {
    Line::from(
        line.spans
            .iter()
            .map(|s| Span::styled(s.text.clone(), span_style(&s.style, base)))
            .collect::<Vec<_>>(),
    )
}

/// Render a markup fragment into lines. Never returns an empty list.
pub fn markup_to_lines(markup: &str, base: Style) -> Vec<Line<'static>> {
    let lines: Vec<Line<'static>> = parse_markup(markup)
        .iter()
        .map(|line| to_line(line, base))
        .collect();
    if lines.is_empty() {
        vec![Line::default()]
    } else {
        lines
    }
}

/// Hard-wrap a line at `width` display columns, keeping span styles.
///
/// Pre-wrapping keeps scroll arithmetic exact: one output line is one row.
pub fn wrap_line(line: Line<'static>, width: u16) -> Vec<Line<'static>> {
    let width = width as usize;
    if width == 0 || line.width() <= width {
        return vec![line];
    }

    let mut rows = Vec::new();
    let mut row: Vec<Span<'static>> = Vec::new();
    let mut row_width = 0;

    for span in line.spans {
        let mut chunk = String::new();
        for c in span.content.chars() {
            let w = c.width().unwrap_or(0);
            if row_width + w > width && row_width > 0 {
                if !chunk.is_empty() {
                    row.push(Span::styled(std::mem::take(&mut chunk), span.style));
                }
                rows.push(Line::from(std::mem::take(&mut row)));
                row_width = 0;
            }
            chunk.push(c);
            row_width += w;
        }
        if !chunk.is_empty() {
            row.push(Span::styled(chunk, span.style));
        }
    }
    if !row.is_empty() {
        rows.push(Line::from(row));
    }
    rows
}

pub fn wrap_lines(lines: Vec<Line<'static>>, width: u16) -> Vec<Line<'static>> {
    lines
        .into_iter()
        .flat_map(|line| wrap_line(line, width))
        .collect()
}

//! Responsive layout
//!
//! Splits the terminal into header, form, log, summary and status rows.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Terminal width breakpoints
pub mod breakpoints {
    /// Below this the summary stacks under the log
    pub const SM_WIDTH: u16 = 80;
    /// Below this the header collapses to one line
    pub const SM_HEIGHT: u16 = 24;
}

/// Layout context holding terminal dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutContext {
    pub width: u16,
    pub height: u16,
}

impl LayoutContext {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    pub fn from_rect(area: Rect) -> Self {
        Self::new(area.width, area.height)
    }

    /// Calculate a width as a percentage of terminal width, minimum 1.
    pub fn percent_width(&self, percentage: u16) -> u16 {
        ((self.width as u32 * percentage as u32) / 100).max(1) as u16
    }

    pub fn is_narrow(&self) -> bool {
        self.width < breakpoints::SM_WIDTH
    }

    pub fn is_short(&self) -> bool {
        self.height < breakpoints::SM_HEIGHT
    }

    /// Stack the summary under the log instead of beside it.
    pub fn should_stack_panels(&self) -> bool {
        self.is_narrow()
    }

    pub fn header_height(&self) -> u16 {
        if self.is_short() {
            1
        } else {
            2
        }
    }
}

/// Areas of the main screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub header: Rect,
    pub form: Rect,
    pub log: Rect,
    pub summary: Rect,
    pub status: Rect,
}

/// Form height: bordered single-line input.
pub const FORM_HEIGHT: u16 = 3;

pub fn screen_areas(area: Rect) -> ScreenAreas {
    let ctx = LayoutContext::from_rect(area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(ctx.header_height()),
            Constraint::Length(FORM_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    let direction = if ctx.should_stack_panels() {
        Direction::Vertical
    } else {
        Direction::Horizontal
    };
    let panels = Layout::default()
        .direction(direction)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[2]);

    ScreenAreas {
        header: rows[0],
        form: rows[1],
        log: panels[0],
        summary: panels[1],
        status: rows[3],
    }
}

/// Centered rect of at most `width` x `height` inside `area`.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

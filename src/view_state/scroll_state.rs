//! Scroll state for the battle log.

/// Scroll position, counted in rendered lines up from the bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScrollState {
    /// Lines scrolled up from the bottom (0 = following new content)
    pub offset: usize,
    /// Maximum offset, updated during render
    pub max_scroll: usize,
    /// True when the user scrolled away from the bottom
    pub user_has_scrolled: bool,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_at_bottom(&self) -> bool {
        self.offset == 0
    }

    pub fn is_at_top(&self) -> bool {
        self.offset >= self.max_scroll
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.offset = self.offset.saturating_add(lines).min(self.max_scroll);
        self.user_has_scrolled = self.offset > 0;
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.offset = self.offset.saturating_sub(lines);
        self.user_has_scrolled = self.offset > 0;
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = self.max_scroll;
        self.user_has_scrolled = self.offset > 0;
    }

    pub fn scroll_to_end(&mut self) {
        self.offset = 0;
        self.user_has_scrolled = false;
    }

    /// Record the content height from the last render and clamp the offset.
    pub fn set_max_scroll(&mut self, max_scroll: usize) {
        self.max_scroll = max_scroll;
        self.offset = self.offset.min(max_scroll);
    }

    /// Get scroll percentage (0-100, 100 = bottom)
    pub fn scroll_percentage(&self) -> u8 {
        if self.max_scroll == 0 {
            100
        } else {
            100 - ((self.offset as f64 / self.max_scroll as f64) * 100.0) as u8
        }
    }
}

//! Room form: the input and the connect button.

use unicode_width::UnicodeWidthStr;

use crate::controller::Affordance;

/// Room input with a char-indexed cursor, plus the button state.
#[derive(Debug, Clone)]
pub struct RoomForm {
    value: String,
    /// Cursor position in chars
    cursor: usize,
    focused: bool,
    affordance: Affordance,
}

impl Default for RoomForm {
    fn default() -> Self {
        Self::new()
    }
}

impl RoomForm {
    pub fn new() -> Self {
        Self {
            value: String::new(),
            cursor: 0,
            focused: true,
            affordance: Affordance::Ready,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: &str) {
        self.value = value.to_string();
        self.cursor = self.value.chars().count();
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Display column of the cursor, accounting for wide characters.
    pub fn cursor_column(&self) -> usize {
        let byte = self.byte_index(self.cursor);
        self.value[..byte].width()
    }

    pub fn affordance(&self) -> Affordance {
        self.affordance
    }

    pub fn set_affordance(&mut self, affordance: Affordance) {
        self.affordance = affordance;
    }

    pub fn button_label(&self) -> String {
        self.affordance.button_label()
    }

    /// Whether the input accepts typing and submits.
    pub fn is_enabled(&self) -> bool {
        self.affordance.input_enabled()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn focus(&mut self) {
        self.focused = true;
    }

    pub fn blur(&mut self) {
        self.focused = false;
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Clear from the keyboard; ignored while disabled.
    pub fn clear_if_enabled(&mut self) {
        if self.is_enabled() {
            self.clear();
        }
    }

    /// Insert at the cursor. Ignored while disabled. Returns whether the value changed.
    pub fn insert_char(&mut self, c: char) -> bool {
        if !self.is_enabled() || c.is_control() {
            return false;
        }
        let byte = self.byte_index(self.cursor);
        self.value.insert(byte, c);
        self.cursor += 1;
        true
    }

    pub fn backspace(&mut self) -> bool {
        if !self.is_enabled() || self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let byte = self.byte_index(self.cursor);
        self.value.remove(byte);
        true
    }

    pub fn delete(&mut self) -> bool {
        if !self.is_enabled() || self.cursor >= self.value.chars().count() {
            return false;
        }
        let byte = self.byte_index(self.cursor);
        self.value.remove(byte);
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.value.chars().count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.chars().count();
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(i, _)| i)
    }
}

//! Color theme constants
//!
//! Minimal dark palette; log classes map onto the same colors the battle
//! server's web page uses.

use ratatui::style::Color;

// ============================================================================
// Chrome
// ============================================================================

/// Primary border color
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Border of the focused element
pub const COLOR_BORDER_FOCUSED: Color = Color::White;

/// Header text color
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for less important info
pub const COLOR_DIM: Color = Color::DarkGray;

/// Background for the room input
pub const COLOR_INPUT_BG: Color = Color::Rgb(20, 20, 30);

/// Background for dialog boxes
pub const COLOR_DIALOG_BG: Color = Color::Rgb(10, 15, 35);

// ============================================================================
// Log line classes
// ============================================================================

/// Battle finished
pub const COLOR_SUCCESS: Color = Color::Rgb(46, 204, 113); // #2ecc71

/// Reconnecting
pub const COLOR_WARNING: Color = Color::Rgb(241, 196, 15); // #f1c40f

/// Connection lost for good
pub const COLOR_ERROR: Color = Color::Rgb(231, 76, 60); // #e74c3c

/// Raw protocol lines
pub const COLOR_LOGLINE: Color = Color::Gray;

/// Suggestions inside the summary
pub const COLOR_SUGGESTION: Color = Color::Rgb(126, 214, 223); // #7ed6df

/// Placeholder text
pub const COLOR_PLACEHOLDER: Color = Color::DarkGray;

// ============================================================================
// Connect button
// ============================================================================

pub const COLOR_BUTTON_ENABLED: Color = Color::LightGreen;

pub const COLOR_BUTTON_BUSY: Color = Color::Gray;

/// Map a markup `class` to a foreground color.
pub fn class_color(class: &str) -> Option<Color> {
    match class {
        "success" => Some(COLOR_SUCCESS),
        "warning" => Some(COLOR_WARNING),
        "error" => Some(COLOR_ERROR),
        "logline" => Some(COLOR_LOGLINE),
        "suggestion" => Some(COLOR_SUGGESTION),
        "placeholder" => Some(COLOR_PLACEHOLDER),
        _ => None,
    }
}

//! Colors for the three kinds of human output this tool prints.

use owo_colors::Style;

/// Styles for status marks and config keys; all plain when color is off.
#[derive(Debug, Default, Clone, Copy)]
pub struct Styles {
    /// `✓` after a remote change went through.
    pub done: Style,
    /// `ℹ` for neutral notes.
    pub note: Style,
    /// Keys in `config show`.
    pub key: Style,
}

impl Styles {
    /// Green/blue marks and dimmed keys, or no styling at all.
    #[must_use]
    pub fn new(colored: bool) -> Self {
        if !colored {
            return Self::default();
        }
        Self {
            done: Style::new().green(),
            note: Style::new().blue(),
            key: Style::new().dimmed(),
        }
    }
}

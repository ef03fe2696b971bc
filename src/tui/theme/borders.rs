//! Border styles

use ratatui::symbols::border;

/// Rounded for every block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BorderStyle;

impl BorderStyle {
    pub fn to_border_set() -> border::Set<'static> {
        border::ROUNDED
    }

    /// Heavier outline for the focused button.
    pub fn to_focused_set() -> border::Set<'static> {
        border::THICK
    }
}

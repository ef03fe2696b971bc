//! Screen chrome: frame colors, border set, glyphs
//!
//! The fetched palette only colors the swatch buttons; everything around
//! them uses this fixed theme.

pub mod borders;
pub mod chrome;
pub mod icons;

pub use borders::BorderStyle;
pub use chrome::Chrome;
pub use icons::Icons;

#[derive(Debug, Clone)]
pub struct Theme {
    pub chrome: Chrome,
    pub icons: Icons,
}

impl Theme {
    pub fn new() -> Self {
        Self {
            chrome: Chrome::MONO,
            icons: Icons::unicode(),
        }
    }

    pub fn border_set(&self) -> ratatui::symbols::border::Set<'static> {
        BorderStyle::to_border_set()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

pub fn get_theme() -> Theme {
    Theme::new()
}

//! Fixed colors for everything outside the swatches

use ratatui::style::Color;

#[derive(Debug, Clone, Copy)]
pub struct Chrome {
    pub fg_primary: Color,
    pub fg_secondary: Color,
    pub border: Color,
    pub accent: Color,
    /// Fetch buttons render white-on-black regardless of palette.
    pub button_fg: Color,
    pub button_bg: Color,
    pub success: Color,
    pub error: Color,
}

impl Chrome {
    pub const MONO: Self = Self {
        fg_primary: Color::Rgb(255, 255, 255),   // #ffffff
        fg_secondary: Color::Rgb(136, 136, 136), // #888888
        border: Color::Rgb(64, 64, 64),          // #404040
        accent: Color::Rgb(200, 200, 200),       // #c8c8c8
        button_fg: Color::Rgb(255, 255, 255),
        button_bg: Color::Rgb(0, 0, 0),
        success: Color::Rgb(120, 200, 120), // #78c878
        error: Color::Rgb(230, 100, 100),   // #e66464
    };
}

impl Default for Chrome {
    fn default() -> Self {
        Self::MONO
    }
}

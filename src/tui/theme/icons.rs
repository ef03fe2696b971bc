//! Glyphs used in the status line and button list.
//! Plain Unicode; no patched font required.

#[derive(Debug, Clone)]
pub struct Icons {
    pub success: &'static str,
    pub error: &'static str,
    pub info: &'static str,
    pub loading: &'static str,
    pub swatch: &'static str,
    pub separator: &'static str,
}

impl Icons {
    pub const fn unicode() -> Self {
        Self {
            success: "✓",
            error: "✗",
            info: "•",
            loading: "⠿",
            swatch: "■",
            separator: "│",
        }
    }
}

impl Default for Icons {
    fn default() -> Self {
        Self::unicode()
    }
}

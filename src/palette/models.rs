use super::color::{Rgb, hex_to_rgb};
use serde::{Deserialize, Serialize};

/// Four-color scheme driving the primary surfaces in light and dark mode.
///
/// Values are kept exactly as received; conversion to RGB happens in
/// [`Palette::resolve`]. A palette is replaced as a whole, never patched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    light_primary: String,
    light_on_primary: String,
    dark_primary: String,
    dark_on_primary: String,
}

impl Palette {
    const DEFAULT_PRIMARY: &'static str = "FF000000";
    // Seven digits, not eight; scans to white.
    const DEFAULT_ON_PRIMARY: &'static str = "FFFFFFF";

    pub fn new(
        light_primary: impl Into<String>,
        light_on_primary: impl Into<String>,
        dark_primary: impl Into<String>,
        dark_on_primary: impl Into<String>,
    ) -> Self {
        Self {
            light_primary: light_primary.into(),
            light_on_primary: light_on_primary.into(),
            dark_primary: dark_primary.into(),
            dark_on_primary: dark_on_primary.into(),
        }
    }

    pub fn light_primary(&self) -> &str {
        &self.light_primary
    }

    pub fn light_on_primary(&self) -> &str {
        &self.light_on_primary
    }

    pub fn dark_primary(&self) -> &str {
        &self.dark_primary
    }

    pub fn dark_on_primary(&self) -> &str {
        &self.dark_on_primary
    }

    pub fn resolve(&self) -> ResolvedPalette {
        ResolvedPalette {
            light_primary: hex_to_rgb(&self.light_primary),
            light_on_primary: hex_to_rgb(&self.light_on_primary),
            dark_primary: hex_to_rgb(&self.dark_primary),
            dark_on_primary: hex_to_rgb(&self.dark_on_primary),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_PRIMARY,
            Self::DEFAULT_ON_PRIMARY,
            Self::DEFAULT_PRIMARY,
            Self::DEFAULT_ON_PRIMARY,
        )
    }
}

/// Wire envelope: `{"record": {...}}`
#[derive(Debug, Clone, Deserialize)]
pub struct FetchResponse {
    pub record: Palette,
}

/// Palette with every field converted to RGB, ready to render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedPalette {
    pub light_primary: Rgb,
    pub light_on_primary: Rgb,
    pub dark_primary: Rgb,
    pub dark_on_primary: Rgb,
}

//! Lenient hex color parsing
//!
//! Palette strings arrive as ARGB-ish hex (`"FF1E88E5"`), but the service is
//! not strict about width. Parsing scans like a classic hex scanner: skip
//! leading whitespace, accept an optional `0x`/`#` prefix, read digits until
//! the first non-hex character. Only the low 24 bits are used.

use ratatui::style::Color;

/// Normalized RGB color, each channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// Build from a packed `0xRRGGBB` value. Bits above 23 are ignored.
    pub fn from_u32(value: u32) -> Self {
        Self {
            r: f64::from((value >> 16) & 0xFF) / 255.0,
            g: f64::from((value >> 8) & 0xFF) / 255.0,
            b: f64::from(value & 0xFF) / 255.0,
        }
    }

    /// 8-bit channels, rounded.
    pub fn to_u8s(self) -> [u8; 3] {
        [channel(self.r), channel(self.g), channel(self.b)]
    }

    /// Packed `0xRRGGBB`.
    pub fn to_u32(self) -> u32 {
        let [r, g, b] = self.to_u8s();
        (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
    }

    /// Uppercase `RRGGBB`, no prefix.
    pub fn to_hex(self) -> String {
        hex::encode_upper(self.to_u8s())
    }

    pub fn to_color(self) -> Color {
        let [r, g, b] = self.to_u8s();
        Color::Rgb(r, g, b)
    }
}

impl Default for Rgb {
    fn default() -> Self {
        Self::BLACK
    }
}

fn channel(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Parse a hex color string. Never fails: input without any hex digits
/// yields black, and values too wide for 64 bits saturate.
pub fn hex_to_rgb(input: &str) -> Rgb {
    match scan_hex(input) {
        Some(value) => Rgb::from_u32((value & 0x00FF_FFFF) as u32),
        None => Rgb::BLACK,
    }
}

/// Scan a leading hex integer. Returns `None` when no digits were found.
fn scan_hex(input: &str) -> Option<u64> {
    let s = input.trim_start();
    // `#` is accepted as a prefix; a strict hex scanner would stop there
    // and yield black for "#336699".
    let s = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .or_else(|| s.strip_prefix('#'))
        .unwrap_or(s);

    let mut value: u64 = 0;
    let mut seen = false;
    for c in s.chars() {
        let Some(d) = c.to_digit(16) else {
            break;
        };
        seen = true;
        value = value
            .checked_mul(16)
            .and_then(|v| v.checked_add(u64::from(d)))
            .unwrap_or(u64::MAX);
    }

    seen.then_some(value)
}

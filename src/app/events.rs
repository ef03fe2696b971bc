use crate::palette::{FetchError, Palette};

#[derive(Debug)]
pub enum Event {
    Input(InputEvent),
    Palette(PaletteEvent),
}

#[derive(Debug, Clone)]
pub enum InputEvent {
    Key(crossterm::event::KeyEvent),
    Resize,
}

#[derive(Debug)]
pub enum PaletteEvent {
    /// Startup delay elapsed; time to fetch `url`.
    StartupDue { url: String },
    /// A fetch finished. Sent exactly once per fetch.
    Fetched {
        url: String,
        result: Result<Palette, FetchError>,
    },
}

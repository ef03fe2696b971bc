use crate::config::Source;
use crate::palette::{FetchError, Palette};

/// One of the on-screen buttons, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Fetches from `sources[i]`.
    Source(usize),
    LightPrimary,
    DarkPrimary,
}

impl Button {
    pub fn label(self, sources: &[Source]) -> &str {
        match self {
            Button::Source(i) => sources.get(i).map(|s| s.label.as_str()).unwrap_or("?"),
            Button::LightPrimary => "Light Mode Primary",
            Button::DarkPrimary => "Dark Mode Primary",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub created_at: std::time::Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Info,
    Error,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self::with_kind(message, ToastKind::Success)
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::with_kind(message, ToastKind::Info)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::with_kind(message, ToastKind::Error)
    }

    fn with_kind(message: impl Into<String>, kind: ToastKind) -> Self {
        Self {
            message: message.into(),
            kind,
            created_at: std::time::Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > std::time::Duration::from_secs(3)
    }
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub should_quit: bool,
    pub sources: Vec<Source>,
    pub selected: usize,
    /// Currently displayed palette. Only ever replaced whole.
    palette: Palette,
    /// URL of the fetch that produced `palette`; `None` while on the default.
    palette_url: Option<String>,
    /// Fetches started but not yet completed.
    pub in_flight: usize,
    pub toast: Option<Toast>,
}

impl AppState {
    pub fn new(sources: Vec<Source>) -> Self {
        Self {
            should_quit: false,
            sources,
            selected: 0,
            palette: Palette::default(),
            palette_url: None,
            in_flight: 0,
            toast: None,
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn palette_url(&self) -> Option<&str> {
        self.palette_url.as_deref()
    }

    pub fn buttons(&self) -> Vec<Button> {
        (0..self.sources.len())
            .map(Button::Source)
            .chain([Button::LightPrimary, Button::DarkPrimary])
            .collect()
    }

    pub fn selected_button(&self) -> Option<Button> {
        self.buttons().get(self.selected).copied()
    }

    pub fn select_next(&mut self) {
        let n = self.buttons().len();
        self.selected = (self.selected + 1) % n;
    }

    pub fn select_prev(&mut self) {
        let n = self.buttons().len();
        self.selected = (self.selected + n - 1) % n;
    }

    pub fn fetch_started(&mut self) {
        self.in_flight += 1;
    }

    /// Record a finished fetch. Success swaps in the new palette whole;
    /// failure leaves the current one in effect.
    pub fn apply_fetch(&mut self, url: String, result: Result<Palette, FetchError>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        match result {
            Ok(palette) => {
                let name = self.source_label(&url).unwrap_or("remote palette").to_string();
                self.palette = palette;
                self.palette_url = Some(url);
                self.toast = Some(Toast::success(format!("Applied {name}")));
            }
            Err(e) => {
                self.toast = Some(Toast::error(e.to_string()));
            }
        }
    }

    pub fn source_label(&self, url: &str) -> Option<&str> {
        self.sources
            .iter()
            .find(|s| s.url == url)
            .map(|s| s.label.as_str())
    }
}

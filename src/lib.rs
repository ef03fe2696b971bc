//! Fetch a remote color palette and preview it.
//!
//! [`palette`] is the embeddable core: a fetcher that turns one HTTP GET into
//! a [`palette::Palette`] or a [`palette::FetchError`], plus lenient hex
//! parsing. The remaining modules are the terminal front end built on it.

pub mod app;
pub mod config;
pub mod input;
pub mod palette;
pub mod tui;

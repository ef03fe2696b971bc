//! Root layout widget
//!
//! ┌ tint ─────────────────────────────┐
//! │        [ Color Scheme 1 ]         │
//! │        [ Color Scheme 2 ]         │
//! │        [ Light Mode Primary ]     │
//! │        [ Dark Mode Primary ]      │
//! ├───────────────────────────────────┤
//! │ Palette / fetch status / toast    │
//! └───────────────────────────────────┘
//!  keybinds

use crate::app::state::AppState;
use crate::tui::theme::get_theme;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders},
};

use super::{buttons, help, status};

pub fn render(frame: &mut Frame, state: &AppState) {
    let theme = get_theme();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),    // Buttons
            Constraint::Length(4), // Status
            Constraint::Length(1), // Keybinds
        ])
        .split(frame.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.chrome.border))
        .title(" tint ")
        .title_style(
            Style::default()
                .fg(theme.chrome.accent)
                .add_modifier(Modifier::BOLD),
        );
    let inner = block.inner(rows[0]);
    frame.render_widget(block, rows[0]);

    buttons::render(frame, state, inner);
    status::render(frame, state, rows[1]);
    help::render(frame, rows[2]);
}

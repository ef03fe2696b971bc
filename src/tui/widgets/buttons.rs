//! Button column. Fetch buttons use fixed colors; the two swatch buttons
//! take their colors from the current palette.

use crate::app::state::{AppState, Button};
use crate::tui::theme::{BorderStyle, Theme, get_theme};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

const BUTTON_WIDTH: u16 = 28;
const BUTTON_HEIGHT: u16 = 3;

pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();
    let buttons = state.buttons();

    let column = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(BUTTON_WIDTH)])
        .flex(Flex::Center)
        .split(area)[0];

    // Each slot carries one blank row below its button.
    let slots = Layout::default()
        .direction(Direction::Vertical)
        .constraints(buttons.iter().map(|_| Constraint::Length(BUTTON_HEIGHT + 1)))
        .flex(Flex::Center)
        .split(column);

    for (i, (button, slot)) in buttons.iter().zip(slots.iter()).enumerate() {
        let area = Rect {
            height: slot.height.min(BUTTON_HEIGHT),
            ..*slot
        };
        render_button(frame, state, &theme, *button, i == state.selected, area);
    }
}

fn render_button(
    frame: &mut Frame,
    state: &AppState,
    theme: &Theme,
    button: Button,
    focused: bool,
    area: Rect,
) {
    let (fg, bg) = button_colors(state, theme, button);

    let (border_set, border_fg) = if focused {
        (BorderStyle::to_focused_set(), theme.chrome.accent)
    } else {
        (theme.border_set(), theme.chrome.border)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(border_set)
        .border_style(Style::default().fg(border_fg).bg(bg))
        .style(Style::default().bg(bg));

    let mut label_style = Style::default().fg(fg).bg(bg);
    if focused {
        label_style = label_style.add_modifier(Modifier::BOLD);
    }

    let label = Paragraph::new(button.label(&state.sources))
        .style(label_style)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(label, area);
}

/// `(foreground, background)` for a button.
fn button_colors(state: &AppState, theme: &Theme, button: Button) -> (Color, Color) {
    match button {
        Button::Source(_) => (theme.chrome.button_fg, theme.chrome.button_bg),
        Button::LightPrimary => {
            let p = state.palette().resolve();
            (p.light_on_primary.to_color(), p.light_primary.to_color())
        }
        Button::DarkPrimary => {
            let p = state.palette().resolve();
            (p.dark_on_primary.to_color(), p.dark_primary.to_color())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Palette;

    #[test]
    fn test_swatch_colors_follow_palette() {
        let theme = get_theme();
        let mut state = AppState::new(Vec::new());
        assert_eq!(
            button_colors(&state, &theme, Button::LightPrimary),
            (Color::Rgb(255, 255, 255), Color::Rgb(0, 0, 0))
        );

        state.apply_fetch(
            "http://x".into(),
            Ok(Palette::new("FF6200EE", "FFFFFFFF", "FFBB86FC", "FF000000")),
        );
        assert_eq!(
            button_colors(&state, &theme, Button::LightPrimary),
            (Color::Rgb(255, 255, 255), Color::Rgb(0x62, 0x00, 0xEE))
        );
        assert_eq!(
            button_colors(&state, &theme, Button::DarkPrimary),
            (Color::Rgb(0, 0, 0), Color::Rgb(0xBB, 0x86, 0xFC))
        );
    }

    #[test]
    fn test_fetch_buttons_ignore_palette() {
        let theme = get_theme();
        let mut state = AppState::new(Vec::new());
        state.apply_fetch(
            "http://x".into(),
            Ok(Palette::new("FF0000", "00FF00", "0000FF", "FFFFFF")),
        );
        assert_eq!(
            button_colors(&state, &theme, Button::Source(0)),
            (theme.chrome.button_fg, theme.chrome.button_bg)
        );
    }
}

//! Keybind footer

use crate::tui::theme::{Theme, get_theme};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

pub fn render(frame: &mut Frame, area: Rect) {
    let theme = get_theme();

    let binds = [
        ("j/k", "move"),
        ("Enter", "press"),
        ("1-9", "fetch scheme"),
        ("r", "refetch"),
        ("q", "quit"),
    ];

    let mut spans = vec![Span::raw(" ")];
    for (i, (key, desc)) in binds.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(
                format!(" {} ", theme.icons.separator),
                Style::default().fg(theme.chrome.border),
            ));
        }
        spans.extend(keybind(key, desc, &theme));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn keybind(key: &str, desc: &str, theme: &Theme) -> [Span<'static>; 2] {
    [
        Span::styled(
            key.to_string(),
            Style::default()
                .fg(theme.chrome.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {desc}"),
            Style::default().fg(theme.chrome.fg_secondary),
        ),
    ]
}

//! Palette status: current swatches, where they came from, fetch activity

use crate::app::state::{AppState, ToastKind};
use crate::palette::Rgb;
use crate::tui::theme::{Theme, get_theme};
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = get_theme();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.chrome.border))
        .title(" Palette ")
        .title_style(Style::default().fg(theme.chrome.accent));

    let paragraph = Paragraph::new(vec![palette_line(state, &theme), activity_line(state, &theme)])
        .block(block);
    frame.render_widget(paragraph, area);
}

fn palette_line(state: &AppState, theme: &Theme) -> Line<'static> {
    let resolved = state.palette().resolve();
    let origin = match state.palette_url() {
        Some(url) => state.source_label(url).unwrap_or(url).to_string(),
        None => "default".to_string(),
    };

    let mut spans = vec![Span::styled(
        format!("{origin}  "),
        Style::default().fg(theme.chrome.fg_primary),
    )];
    spans.extend(swatch("light", resolved.light_primary, resolved.light_on_primary, theme));
    spans.push(Span::raw("  "));
    spans.extend(swatch("dark", resolved.dark_primary, resolved.dark_on_primary, theme));
    Line::from(spans)
}

fn swatch(name: &str, primary: Rgb, on_primary: Rgb, theme: &Theme) -> Vec<Span<'static>> {
    let dim = Style::default().fg(theme.chrome.fg_secondary);
    vec![
        Span::styled(format!("{name} "), dim),
        Span::styled(theme.icons.swatch, Style::default().fg(primary.to_color())),
        Span::styled(format!("#{} ", primary.to_hex()), dim),
        Span::styled(theme.icons.swatch, Style::default().fg(on_primary.to_color())),
        Span::styled(format!("#{}", on_primary.to_hex()), dim),
    ]
}

fn activity_line(state: &AppState, theme: &Theme) -> Line<'static> {
    let mut spans = Vec::new();

    if state.in_flight > 0 {
        spans.push(Span::styled(
            format!("{} fetching ({} in flight)", theme.icons.loading, state.in_flight),
            Style::default().fg(theme.chrome.fg_secondary),
        ));
    }

    if let Some(toast) = &state.toast
        && !toast.is_expired()
    {
        let (icon, color) = match toast.kind {
            ToastKind::Success => (theme.icons.success, theme.chrome.success),
            ToastKind::Info => (theme.icons.info, theme.chrome.accent),
            ToastKind::Error => (theme.icons.error, theme.chrome.error),
        };
        if !spans.is_empty() {
            spans.push(Span::styled(
                format!(" {} ", theme.icons.separator),
                Style::default().fg(theme.chrome.border),
            ));
        }
        spans.push(Span::styled(
            format!("{icon} {}", toast.message),
            Style::default().fg(color),
        ));
    }

    Line::from(spans)
}

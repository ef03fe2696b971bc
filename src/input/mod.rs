use crate::app::actions::Action;
use crate::app::events::{Event, InputEvent};
use crate::app::state::AppState;
use crossterm::event::{self, Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

pub fn spawn_input_task(tx: mpsc::Sender<Event>) {
    tokio::task::spawn_blocking(move || {
        loop {
            if event::poll(std::time::Duration::from_millis(250)).unwrap_or(false) {
                let ev = match event::read() {
                    Ok(CtEvent::Key(k)) if k.kind == KeyEventKind::Press => InputEvent::Key(k),
                    Ok(CtEvent::Resize(_, _)) => InputEvent::Resize,
                    Ok(_) => continue,
                    Err(e) => {
                        tracing::warn!(error = %e, "terminal read failed");
                        continue;
                    }
                };
                if tx.blocking_send(Event::Input(ev)).is_err() {
                    break;
                }
            } else if tx.is_closed() {
                break;
            }
        }
    });
}

pub fn map_input_to_action(state: &AppState, ev: InputEvent) -> Option<Action> {
    match ev {
        InputEvent::Resize => Some(Action::Resize),
        InputEvent::Key(k) => map_key(state, k),
    }
}

fn map_key(state: &AppState, k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('c') if k.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),

        KeyCode::Up | KeyCode::Char('k') | KeyCode::BackTab => Some(Action::SelectPrev),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Tab => Some(Action::SelectNext),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Activate),
        KeyCode::Char('r') => Some(Action::Refetch),

        // 1-9 jump straight to a source
        KeyCode::Char(c @ '1'..='9') => {
            let i = c.to_digit(10)? as usize - 1;
            (i < state.sources.len()).then_some(Action::FetchSource(i))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn key(code: KeyCode) -> InputEvent {
        InputEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn state() -> AppState {
        AppState::new(Config::default().sources)
    }

    #[test]
    fn test_quit_keys() {
        let s = state();
        assert_eq!(map_input_to_action(&s, key(KeyCode::Char('q'))), Some(Action::Quit));
        assert_eq!(map_input_to_action(&s, key(KeyCode::Esc)), Some(Action::Quit));
        let ctrl_c = InputEvent::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(map_input_to_action(&s, ctrl_c), Some(Action::Quit));
        assert_eq!(map_input_to_action(&s, key(KeyCode::Char('c'))), None);
    }

    #[test]
    fn test_navigation() {
        let s = state();
        assert_eq!(map_input_to_action(&s, key(KeyCode::Char('j'))), Some(Action::SelectNext));
        assert_eq!(map_input_to_action(&s, key(KeyCode::Up)), Some(Action::SelectPrev));
        assert_eq!(map_input_to_action(&s, key(KeyCode::Enter)), Some(Action::Activate));
        assert_eq!(map_input_to_action(&s, key(KeyCode::Char('r'))), Some(Action::Refetch));
        assert_eq!(map_input_to_action(&s, InputEvent::Resize), Some(Action::Resize));
    }

    #[test]
    fn test_digit_fetches_existing_source_only() {
        let s = state();
        assert_eq!(
            map_input_to_action(&s, key(KeyCode::Char('1'))),
            Some(Action::FetchSource(0))
        );
        assert_eq!(
            map_input_to_action(&s, key(KeyCode::Char('2'))),
            Some(Action::FetchSource(1))
        );
        assert_eq!(map_input_to_action(&s, key(KeyCode::Char('3'))), None);
        assert_eq!(map_input_to_action(&s, key(KeyCode::Char('0'))), None);
    }
}

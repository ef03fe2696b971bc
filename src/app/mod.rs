pub mod actions;
pub mod events;
pub mod state;

use crate::config::Config;
use crate::input;
use crate::palette::PaletteFetcher;
use crate::tui::{self, TuiTerminal};
use actions::Action;
use events::{Event, PaletteEvent};
use state::{AppState, Button, Toast};
use tokio::sync::mpsc;

pub struct App {
    cfg: Config,
    state: AppState,
    fetcher: PaletteFetcher,
}

impl App {
    pub fn new(cfg: Config) -> anyhow::Result<Self> {
        let fetcher = PaletteFetcher::new(&cfg.http)?;
        let state = AppState::new(cfg.sources.clone());
        Ok(Self {
            cfg,
            state,
            fetcher,
        })
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub async fn run(&mut self, terminal: &mut TuiTerminal) -> anyhow::Result<()> {
        let (tx, mut rx) = mpsc::channel::<Event>(64);

        input::spawn_input_task(tx.clone());
        self.schedule_startup_fetch(&tx);

        tui::draw(terminal, &mut self.state)?;

        while let Some(ev) = rx.recv().await {
            self.handle_event(ev, &tx);

            if self.state.should_quit {
                break;
            }

            tui::draw(terminal, &mut self.state)?;
        }

        Ok(())
    }

    pub fn handle_event(&mut self, ev: Event, tx: &mpsc::Sender<Event>) {
        match ev {
            Event::Input(input_ev) => {
                if let Some(action) = input::map_input_to_action(&self.state, input_ev) {
                    self.handle_action(action, tx);
                }
            }
            Event::Palette(PaletteEvent::StartupDue { url }) => self.spawn_fetch(url, tx),
            Event::Palette(PaletteEvent::Fetched { url, result }) => {
                self.state.apply_fetch(url, result);
            }
        }
    }

    pub fn handle_action(&mut self, action: Action, tx: &mpsc::Sender<Event>) {
        match action {
            Action::Quit => self.state.should_quit = true,
            Action::SelectNext => self.state.select_next(),
            Action::SelectPrev => self.state.select_prev(),
            Action::Activate => match self.state.selected_button() {
                Some(Button::Source(i)) => self.handle_action(Action::FetchSource(i), tx),
                Some(button @ (Button::LightPrimary | Button::DarkPrimary)) => {
                    let resolved = self.state.palette().resolve();
                    let (bg, fg) = if button == Button::LightPrimary {
                        (resolved.light_primary, resolved.light_on_primary)
                    } else {
                        (resolved.dark_primary, resolved.dark_on_primary)
                    };
                    self.state.toast = Some(Toast::info(format!(
                        "{}: #{} on #{}",
                        button.label(&self.state.sources),
                        fg.to_hex(),
                        bg.to_hex()
                    )));
                }
                None => {}
            },
            Action::FetchSource(i) => {
                if let Some(source) = self.state.sources.get(i) {
                    let url = source.url.clone();
                    self.spawn_fetch(url, tx);
                }
            }
            Action::Refetch => match self.state.palette_url().map(str::to_string) {
                Some(url) => self.spawn_fetch(url, tx),
                None => self.state.toast = Some(Toast::info("No palette fetched yet")),
            },
            Action::Resize => {}
        }
    }

    /// Start a fetch whose completion comes back through `tx`.
    pub fn spawn_fetch(&mut self, url: String, tx: &mpsc::Sender<Event>) {
        tracing::debug!(%url, "starting palette fetch");
        self.state.fetch_started();

        let fetcher = self.fetcher.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let result = fetcher.fetch(&url).await;
            let _ = tx
                .send(Event::Palette(PaletteEvent::Fetched { url, result }))
                .await;
        });
    }

    /// Fire the configured startup fetch once its delay elapses.
    pub fn schedule_startup_fetch(&self, tx: &mpsc::Sender<Event>) {
        let Some(url) = self.cfg.startup.url.clone() else {
            return;
        };
        let delay = self.cfg.startup.delay();
        let tx = tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx
                .send(Event::Palette(PaletteEvent::StartupDue { url }))
                .await;
        });
    }
}

pub mod actions;
pub mod state;

use crate::card::Card;
use crate::config::Config;
use crate::input;
use crate::tui::{self, TuiTerminal};
use actions::Action;
use rand::SeedableRng;
use rand::rngs::StdRng;
use state::{AppState, Toast};
use std::time::Duration;

pub struct App {
    cfg: Config,
    state: AppState,
    rng: StdRng,
}

impl App {
    pub fn new(cfg: Config) -> Self {
        let rng = match cfg.palette.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let state = AppState::new(cfg.cards.clone());
        let mut app = Self { cfg, state, rng };
        app.rebuild_card();
        app
    }

    pub fn run(&mut self, terminal: &mut TuiTerminal) -> anyhow::Result<()> {
        tracing::info!(cards = self.state.entries.len(), "gallery started");
        tui::draw(terminal, &self.cfg, &mut self.state)?;

        while !self.state.should_quit {
            // Poll with a timeout so expired toasts get cleared without input.
            let ev = input::next_event(Duration::from_millis(500))?;
            if let Some(ev) = ev
                && let Some(action) = input::map_input_to_action(&self.state, ev)
            {
                self.handle_action(action);
            }
            if self.state.should_quit {
                break;
            }
            tui::draw(terminal, &self.cfg, &mut self.state)?;
        }

        Ok(())
    }

    fn handle_action(&mut self, action: Action) {
        let before = self.state.selected;
        match action {
            Action::Quit => self.state.should_quit = true,
            Action::NextCard => self.state.select_next(),
            Action::PrevCard => self.state.select_prev(),
            Action::FirstCard => self.state.selected = 0,
            Action::LastCard => {
                self.state.selected = self.state.entries.len().saturating_sub(1);
            }
            Action::SelectCard(index) => {
                if index < self.state.entries.len() {
                    self.state.selected = index;
                }
            }
            Action::ToggleLike => {
                let name = self.state.card.as_ref().map(|c| c.name.clone());
                if let (Some(liked), Some(name)) = (self.state.toggle_like(), name) {
                    tracing::debug!(%name, liked, "like toggled");
                    if liked {
                        self.state.toast = Some(Toast::success(format!("Liked {name}")));
                    }
                }
            }
            Action::ToggleHelp => self.state.show_help = !self.state.show_help,
            Action::Resize => {}
        }

        if self.state.selected != before {
            self.rebuild_card();
        }
    }

    /// Derive the selected card from scratch: new ramp, new mosaic.
    fn rebuild_card(&mut self) {
        let Some(entry) = self.state.selected_entry() else {
            self.state.card = None;
            return;
        };
        match Card::build(entry, &self.cfg.palette, &mut self.rng) {
            Ok(card) => self.state.card = Some(card),
            Err(e) => {
                tracing::warn!(id = %entry.id, "card build failed: {e}");
                self.state.toast = Some(Toast::error(e.to_string()));
                self.state.card = None;
            }
        }
    }
}

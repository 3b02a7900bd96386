//! A game session: live state, undo history and command dispatch.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::command::{Command, HELP};
use crate::config::Config;
use crate::domain::{rng_from_seed, DrawResult, GameState, MoveResult, PileRef, UndoHistory};
use crate::error::AppError;
use crate::errors::domain::DomainError;
use crate::persistence;

/// What executing a command produced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionOutcome {
    /// One-line status for the player.
    pub message: String,
    pub score_delta: i32,
    /// Whether the board changed.
    pub changed: bool,
    pub won: bool,
    pub quit: bool,
}

impl SessionOutcome {
    fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    fn moved(message: impl Into<String>, result: MoveResult) -> Self {
        Self {
            message: message.into(),
            score_delta: result.score_delta,
            changed: true,
            ..Self::default()
        }
    }
}

#[derive(Debug)]
pub struct GameSession {
    state: GameState,
    history: UndoHistory,
    config: Config,
}

impl GameSession {
    /// Deal a new game, seeded from the configuration.
    pub fn new(config: Config) -> Self {
        let state = GameState::new_game(rng_from_seed(config.seed));
        info!(seed = ?config.seed, "new game dealt");
        Self::from_state(state, config)
    }

    pub fn from_state(state: GameState, config: Config) -> Self {
        Self {
            state,
            history: UndoHistory::default(),
            config,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Run one command. Rule violations come back as `AppError::Domain` with
    /// the state unchanged.
    pub fn execute(&mut self, command: Command) -> Result<SessionOutcome, AppError> {
        let outcome = match command {
            Command::Draw => self.draw(),
            Command::ReshuffleStock => {
                self.tracked(|s| s.reshuffle_stock(), "stock reshuffled")?
            }
            Command::MoveToFoundation(source) => {
                let what = match source {
                    PileRef::Waste => "waste card moved to its foundation".to_string(),
                    PileRef::Tableau(i) => format!("column {} moved to its foundation", i.saturating_add(1)),
                };
                self.tracked(|s| s.move_to_foundation(source), what)?
            }
            Command::MoveWasteToTableau(target) => self.tracked(
                |s| s.move_waste_to_tableau(target),
                format!("waste card placed on column {}", target.saturating_add(1)),
            )?,
            Command::TransferTableau { from, to } => self.tracked(
                |s| s.transfer_tableau(from, to),
                format!(
                    "moved cards from column {} to column {}",
                    from.saturating_add(1),
                    to.saturating_add(1)
                ),
            )?,
            Command::RedealAll => {
                self.tracked(|s| Ok(s.redeal_all()), "all cards dealt again")?
            }
            Command::AutoComplete => return self.auto_complete_with(|_| Ok(())),
            Command::Undo => self.undo(),
            Command::Save(path) => self.save(path)?,
            Command::Load(path) => self.load(path)?,
            Command::Help => SessionOutcome::message(HELP),
            Command::Quit => SessionOutcome {
                message: "thanks for playing".to_string(),
                quit: true,
                ..SessionOutcome::default()
            },
        };
        Ok(self.settle(outcome))
    }

    /// Record whether the game is now won.
    fn settle(&self, mut outcome: SessionOutcome) -> SessionOutcome {
        outcome.won = self.state.is_won();
        if outcome.won && outcome.changed {
            info!(score = self.state.current_score(), "game won");
        }
        outcome
    }

    /// Play foundation moves until none is left, calling `on_step` after
    /// each. The whole run is one undo step.
    pub fn auto_complete_with<F>(&mut self, mut on_step: F) -> Result<SessionOutcome, AppError>
    where
        F: FnMut(&GameState) -> Result<(), AppError>,
    {
        let snapshot = self.history.capture(&self.state);
        let mut total = MoveResult::default();
        let mut interrupted = None;
        while let Some(step) = self.state.auto_step() {
            total.score_delta += step.score_delta;
            total.cards_moved += step.cards_moved;
            debug!(cards = total.cards_moved, "auto-complete step");
            if let Err(e) = on_step(&self.state) {
                interrupted = Some(e);
                break;
            }
        }
        if total.cards_moved == 0 {
            return Err(DomainError::invalid_action("no card can go to a foundation").into());
        }
        self.history.commit(snapshot);
        if let Some(e) = interrupted {
            return Err(e);
        }
        Ok(self.settle(SessionOutcome::moved(
            format!("{} cards played to the foundations", total.cards_moved),
            total,
        )))
    }

    fn tracked<F>(&mut self, action: F, message: impl Into<String>) -> Result<SessionOutcome, AppError>
    where
        F: FnOnce(&mut GameState) -> Result<MoveResult, DomainError>,
    {
        let snapshot = self.history.capture(&self.state);
        let result = action(&mut self.state)?;
        self.history.commit(snapshot);
        let mut message = message.into();
        if let Some(card) = result.revealed {
            message.push_str(&format!(", turned up {card}"));
        }
        debug!(
            turn = self.state.turn(),
            score = self.state.current_score(),
            delta = result.score_delta,
            "{message}"
        );
        Ok(SessionOutcome::moved(message, result))
    }

    fn draw(&mut self) -> SessionOutcome {
        let snapshot = self.history.capture(&self.state);
        match self.state.draw() {
            DrawResult::Drawn(card) => {
                self.history.commit(snapshot);
                debug!(turn = self.state.turn(), %card, "drew card");
                SessionOutcome {
                    message: format!("drew {card}"),
                    changed: true,
                    ..SessionOutcome::default()
                }
            }
            DrawResult::StockEmpty => {
                SessionOutcome::message("the stock is empty, reshuffle with r")
            }
        }
    }

    fn undo(&mut self) -> SessionOutcome {
        match self.history.undo() {
            Some(snapshot) => {
                debug!(snapshot = snapshot.id(), "undo");
                self.state.restore(snapshot);
                SessionOutcome {
                    message: "move taken back".to_string(),
                    changed: true,
                    ..SessionOutcome::default()
                }
            }
            None => SessionOutcome::message("nothing to undo"),
        }
    }

    fn resolve(&self, path: Option<PathBuf>) -> PathBuf {
        path.unwrap_or_else(|| self.config.save_path.clone())
    }

    fn save(&mut self, path: Option<PathBuf>) -> Result<SessionOutcome, AppError> {
        let path = self.resolve(path);
        persistence::save(self.state.board(), &path)?;
        Ok(SessionOutcome::message(format!("saved to {}", path.display())))
    }

    fn load(&mut self, path: Option<PathBuf>) -> Result<SessionOutcome, AppError> {
        let path = self.resolve(path);
        self.load_from(&path)?;
        Ok(SessionOutcome {
            message: format!("loaded {}", path.display()),
            changed: true,
            ..SessionOutcome::default()
        })
    }

    /// Replace the game with the one saved at `path`. On any error the
    /// current game is left as it was.
    pub fn load_from(&mut self, path: &Path) -> Result<(), AppError> {
        let board = persistence::load(path)?;
        self.state.adopt_loaded(board);
        self.history.clear();
        Ok(())
    }
}

//! Domain layer: pure game logic types and helpers.

pub mod autoplay;
pub mod cards_logic;
pub mod cards_parsing;
pub mod cards_types;
pub mod dealing;
pub mod piles;
pub mod rules;
pub mod scoring;
pub mod snapshot;
pub mod state;

#[cfg(test)]
pub(crate) mod test_prelude;
#[cfg(test)]
mod tests_piles;
#[cfg(test)]
mod tests_props_piles;
#[cfg(test)]
mod tests_state_actions;

// Re-exports for ergonomics
pub use cards_parsing::{format_card_list, parse_card_list, try_parse_cards};
pub use cards_types::{Card, Color, Rank, Suit};
pub use dealing::{full_deck, rng_from_seed, GameRng};
pub use piles::{CardTarget, Foundation, Pile, Stock, Tableau};
pub use scoring::ScoreEvent;
pub use snapshot::{Snapshot, UndoHistory};
pub use state::{Board, DrawResult, GameState, MoveResult, PileRef};

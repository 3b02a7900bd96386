//! Error handling for the solitaire game.

pub mod domain;

pub use domain::{CorruptSaveKind, DomainError};

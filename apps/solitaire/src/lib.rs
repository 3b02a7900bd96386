//! Klondike solitaire for the terminal: rule engine, undo, save files and a
//! line-based front end.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod persistence;
pub mod render;
pub mod telemetry;

pub use config::Config;
pub use error::AppError;
pub use errors::domain::{CorruptSaveKind, DomainError};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    solitaire_test_support::logging::init();
}

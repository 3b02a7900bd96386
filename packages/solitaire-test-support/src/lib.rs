//! Solitaire test support utilities
//!
//! Shared helpers for the solitaire unit and integration tests: unified
//! logging initialization and unique scratch file names.

pub mod logging;
pub mod unique_helpers;

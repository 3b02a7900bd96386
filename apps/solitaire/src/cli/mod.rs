//! Terminal front end: command syntax, session dispatch and the play loop.

pub mod command;
pub mod repl;
pub mod session;

pub use command::{Command, ParseCommandError};
pub use session::{GameSession, SessionOutcome};

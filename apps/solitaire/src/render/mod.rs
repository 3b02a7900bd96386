//! Text rendering: a fixed character grid and the board painter.

pub mod board_view;
pub mod screen;

pub use board_view::{paint, BoardView, MIN_HEIGHT, MIN_WIDTH};
pub use screen::{Screen, ScreenError};

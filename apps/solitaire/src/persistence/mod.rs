//! Save games: the textual record and reading/writing it on disk.

pub mod save_codec;
pub mod save_file;

pub use save_codec::{deserialize, serialize, SaveRecord};
pub use save_file::{load, save};

//! Reading and writing save records as JSON files.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use super::save_codec::{deserialize, serialize, SaveRecord};
use crate::domain::Board;
use crate::error::AppError;

/// Write `board` to `path` as pretty-printed JSON.
pub fn save(board: &Board, path: &Path) -> Result<(), AppError> {
    let json = to_json(board)?;
    fs::write(path, json)
        .map_err(|e| AppError::io(format!("cannot write {}", path.display()), e))?;
    info!(path = %path.display(), score = board.score(), "game saved");
    Ok(())
}

/// Read and validate the board stored at `path`. The returned stock is in
/// deck order.
pub fn load(path: &Path) -> Result<Board, AppError> {
    let text = fs::read_to_string(path)
        .map_err(|e| AppError::io(format!("cannot read {}", path.display()), e))?;
    match from_json(&text) {
        Ok(board) => {
            info!(path = %path.display(), score = board.score(), "game loaded");
            Ok(board)
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "rejected save file");
            Err(e)
        }
    }
}

pub fn to_json(board: &Board) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(&serialize(board))?)
}

pub fn from_json(text: &str) -> Result<Board, AppError> {
    let record: SaveRecord = serde_json::from_str(text)?;
    Ok(deserialize(&record)?)
}

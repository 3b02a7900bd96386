//! Paints a board onto a `Screen`.

use super::screen::{Screen, ScreenError};
use crate::domain::{Board, Card};

/// Smallest screen the board fits on.
pub const MIN_WIDTH: usize = 60;
pub const MIN_HEIGHT: usize = 30;

const CELL_STEP: usize = 8;
const TOP_ROW: usize = 2;
const NUMBER_ROW: usize = 5;
const COLUMN_ROW: usize = 6;
const FOUNDATION_X: usize = 28;

/// Everything shown on one frame.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    pub board: &'a Board,
    pub turn: u64,
    pub status: &'a str,
}

/// Five-character cell for a card: `[###]` face-down, `[♥10]` or `[♠A ]`
/// face-up.
pub fn card_cell(card: &Card) -> String {
    if card.is_face_up() {
        let face = format!("{}{}", card.suit().glyph(), card.rank().glyph());
        format!("[{face:<3}]")
    } else {
        "[###]".to_string()
    }
}

const EMPTY_CELL: &str = "[   ]";

/// Clear `screen` and draw the frame.
pub fn paint(screen: &mut Screen, view: &BoardView<'_>) -> Result<(), ScreenError> {
    let board = view.board;
    screen.clear();
    screen.write_at("SOLITAIRE", 0, 0)?;
    screen.write_at(
        &format!("Score: {:>5}   Turn: {:>4}", board.score(), view.turn),
        FOUNDATION_X,
        0,
    )?;

    let stock = if board.stock().is_empty() {
        EMPTY_CELL.to_string()
    } else {
        "[###]".to_string()
    };
    screen.write_at(&stock, 0, TOP_ROW)?;
    screen.write_at(&format!("{:>3}", board.stock().len()), 1, TOP_ROW + 1)?;

    let waste = board
        .waste()
        .top()
        .map_or_else(|| EMPTY_CELL.to_string(), card_cell);
    screen.write_at(&waste, CELL_STEP, TOP_ROW)?;
    screen.write_at(&format!("{:>3}", board.waste().len()), CELL_STEP + 1, TOP_ROW + 1)?;

    for (i, foundation) in board.foundations().iter().enumerate() {
        let cell = foundation
            .top()
            .map_or_else(|| format!("[ {} ]", foundation.suit().glyph()), card_cell);
        screen.write_at(&cell, FOUNDATION_X + i * CELL_STEP, TOP_ROW)?;
    }

    let last_card_row = screen.height().saturating_sub(3);
    for (i, tableau) in board.tableaus().iter().enumerate() {
        let x = i * CELL_STEP;
        screen.write_at(&format!("  {}", i + 1), x, NUMBER_ROW)?;
        if tableau.is_empty() {
            screen.write_at(EMPTY_CELL, x, COLUMN_ROW)?;
            continue;
        }
        for (depth, card) in tableau.cards().iter().enumerate() {
            let y = COLUMN_ROW + depth;
            if y > last_card_row {
                break;
            }
            screen.write_at(&card_cell(card), x, y)?;
        }
    }

    if !view.status.is_empty() {
        screen.write_at(view.status, 0, screen.height().saturating_sub(2))?;
    }
    Ok(())
}

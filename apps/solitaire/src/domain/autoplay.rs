//! Single-step foundation moves used to finish a game automatically.

use super::cards_types::Card;
use super::piles::CardTarget;
use super::rules::TABLEAU_COUNT;
use super::state::{GameState, MoveResult, PileRef};

impl GameState {
    /// The first source whose top card its foundation accepts: waste first,
    /// then columns left to right.
    pub fn next_foundation_move(&self) -> Option<PileRef> {
        let board = self.board();
        let fits = |card: Option<&Card>| {
            card.is_some_and(|c| c.is_face_up() && board.foundation(c.suit()).can_accept(c))
        };
        if fits(board.waste().top()) {
            return Some(PileRef::Waste);
        }
        (0..TABLEAU_COUNT)
            .find(|&i| fits(board.tableaus()[i].top()))
            .map(PileRef::Tableau)
    }

    /// Apply one foundation move if any is available.
    pub fn auto_step(&mut self) -> Option<MoveResult> {
        let source = self.next_foundation_move()?;
        self.move_to_foundation(source).ok()
    }

    /// True once nothing is hidden: stock and waste empty and every column
    /// face-up. Such a game always finishes by repeated `auto_step`.
    pub fn can_auto_complete(&self) -> bool {
        let board = self.board();
        board.stock().is_empty()
            && board.waste().is_empty()
            && board
                .tableaus()
                .iter()
                .all(|t| t.cards().iter().all(|c| c.is_face_up()))
    }
}

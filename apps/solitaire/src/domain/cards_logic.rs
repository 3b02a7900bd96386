//! Card stacking rules: which card may sit on which.

use super::cards_types::{Card, Rank};

/// Tableau stacking: `upper` may be placed on `lower` when it is exactly one
/// rank lower and of the opposite color.
pub fn stacks_on_tableau(lower: &Card, upper: &Card) -> bool {
    lower.color() != upper.color() && lower.rank().prev() == Some(upper.rank())
}

/// Foundation stacking: `next` continues a foundation topped by `top`
/// (`None` for an empty foundation).
pub fn continues_foundation(top: Option<&Card>, next: &Card) -> bool {
    match top {
        None => next.rank() == Rank::Ace,
        Some(top) => top.suit() == next.suit() && top.rank().next() == Some(next.rank()),
    }
}

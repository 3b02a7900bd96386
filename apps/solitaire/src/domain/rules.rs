/// Number of tableau columns.
pub const TABLEAU_COUNT: usize = 7;
/// One foundation per suit.
pub const FOUNDATION_COUNT: usize = 4;
pub const DECK_SIZE: usize = 52;
/// Cards per suit; a foundation holding this many is complete.
pub const SUIT_SIZE: usize = 13;
/// Undo snapshots retained before the oldest is evicted.
pub const HISTORY_CAPACITY: usize = 10;

/// Cards dealt into tableau column `column` (0-based) at the start of a game.
pub const fn initial_column_len(column: usize) -> usize {
    column + 1
}

/// Cards left in the stock after the initial deal.
pub const fn stock_after_deal() -> usize {
    let mut dealt = 0;
    let mut c = 0;
    while c < TABLEAU_COUNT {
        dealt += initial_column_len(c);
        c += 1;
    }
    DECK_SIZE - dealt
}

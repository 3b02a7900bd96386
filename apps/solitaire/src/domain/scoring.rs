//! Score deltas for successful actions.

/// Events that change the running score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreEvent {
    /// A card reached a foundation.
    ToFoundation,
    /// A waste card was played onto a tableau.
    WasteToTableau,
    /// The waste was turned back into the stock.
    StockReshuffled,
    /// The whole board was collected and dealt again.
    Redealt,
}

impl ScoreEvent {
    pub const fn delta(self) -> i32 {
        match self {
            ScoreEvent::ToFoundation => 10,
            ScoreEvent::WasteToTableau => 2,
            ScoreEvent::StockReshuffled => -20,
            ScoreEvent::Redealt => -100,
        }
    }
}

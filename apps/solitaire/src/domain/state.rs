use std::collections::HashSet;

use super::cards_types::{Card, Suit};
use super::dealing::{deal, full_deck, GameRng};
use super::piles::{pair_mut, CardTarget, Foundation, Pile, Stock, Tableau};
use super::rules::{DECK_SIZE, TABLEAU_COUNT};
use super::scoring::ScoreEvent;
use crate::errors::domain::{CorruptSaveKind, DomainError};

/// Every pile on the table plus the running score. Cloning a `Board` is a
/// deep copy; nothing inside is shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    stock: Stock,
    waste: Pile,
    foundations: [Foundation; 4],
    tableaus: [Tableau; TABLEAU_COUNT],
    score: i32,
}

impl Board {
    /// Assemble a board from its piles, checking that together they hold
    /// every card of the deck exactly once.
    pub fn from_parts(
        stock: Stock,
        waste: Pile,
        foundations: [Foundation; 4],
        tableaus: [Tableau; TABLEAU_COUNT],
        score: i32,
    ) -> Result<Self, DomainError> {
        let board = Self {
            stock,
            waste,
            foundations,
            tableaus,
            score,
        };
        for (suit, foundation) in Suit::ALL.iter().zip(&board.foundations) {
            if foundation.suit() != *suit {
                return Err(DomainError::corrupt_save(
                    CorruptSaveKind::BadPileKey,
                    format!(
                        "foundation for {} in the slot of {}",
                        foundation.suit().glyph(),
                        suit.glyph()
                    ),
                ));
            }
        }
        let mut seen = HashSet::with_capacity(DECK_SIZE);
        for card in board.all_cards() {
            if !seen.insert(*card) {
                return Err(DomainError::corrupt_save(
                    CorruptSaveKind::DuplicateCard,
                    format!("{} appears more than once", card.token()),
                ));
            }
        }
        if seen.len() != DECK_SIZE {
            return Err(DomainError::corrupt_save(
                CorruptSaveKind::DuplicateCard,
                format!("board holds {} distinct cards, expected {DECK_SIZE}", seen.len()),
            ));
        }
        Ok(board)
    }

    fn dealt<R: rand::Rng + ?Sized>(cards: Vec<Card>, score: i32, rng: &mut R) -> Self {
        let (tableaus, stock) = deal(cards, rng);
        Self {
            stock,
            waste: Pile::new(),
            foundations: Suit::ALL.map(Foundation::new),
            tableaus,
            score,
        }
    }

    pub fn stock(&self) -> &Stock {
        &self.stock
    }

    pub fn waste(&self) -> &Pile {
        &self.waste
    }

    /// Foundations in suit order (see `Suit::ALL`).
    pub fn foundations(&self) -> &[Foundation; 4] {
        &self.foundations
    }

    pub fn foundation(&self, suit: Suit) -> &Foundation {
        &self.foundations[foundation_slot(suit)]
    }

    pub fn tableaus(&self) -> &[Tableau; TABLEAU_COUNT] {
        &self.tableaus
    }

    pub fn tableau(&self, index: usize) -> Option<&Tableau> {
        self.tableaus.get(index)
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    /// Cards of every pile: stock, waste, foundations, then tableaus.
    pub fn all_cards(&self) -> impl Iterator<Item = &Card> {
        self.stock
            .pile()
            .cards()
            .iter()
            .chain(self.waste.cards())
            .chain(self.foundations.iter().flat_map(|f| f.pile().cards()))
            .chain(self.tableaus.iter().flat_map(|t| t.cards()))
    }

    /// Like `==`, but the stock is compared as a set of cards.
    pub fn same_layout(&self, other: &Board) -> bool {
        let stock_set =
            |b: &Board| -> HashSet<Card> { b.stock.pile().cards().iter().copied().collect() };
        self.waste == other.waste
            && self.foundations == other.foundations
            && self.tableaus == other.tableaus
            && self.score == other.score
            && self.stock.len() == other.stock.len()
            && stock_set(self) == stock_set(other)
    }

    pub fn is_won(&self) -> bool {
        self.foundations.iter().all(Foundation::is_complete)
    }

    /// Drain every pile into one face-down heap.
    fn collect_all(&mut self) -> Vec<Card> {
        let mut cards = self.stock.take_all();
        cards.extend(self.waste.take_all());
        for f in &mut self.foundations {
            cards.extend(f.take_all());
        }
        for t in &mut self.tableaus {
            cards.extend(t.take_all());
        }
        for c in &mut cards {
            c.turn_down();
        }
        cards
    }
}

pub(crate) fn foundation_slot(suit: Suit) -> usize {
    (suit.index() - 1) as usize
}

/// Where a card for the foundation is taken from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PileRef {
    Waste,
    /// Tableau column, 0-based.
    Tableau(usize),
}

/// Outcome of drawing from the stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawResult {
    Drawn(Card),
    /// Nothing to draw; not an error.
    StockEmpty,
}

/// What a successful action did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveResult {
    pub score_delta: i32,
    pub cards_moved: usize,
    /// Card turned face-up on the source column as a consequence.
    pub revealed: Option<Card>,
}

/// A game in progress: the board, a turn counter and the shuffle source.
///
/// Every action either succeeds or returns an error with the state untouched.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    turn: u64,
    rng: GameRng,
}

impl GameState {
    /// Shuffle a fresh deck and deal it.
    pub fn new_game(mut rng: GameRng) -> Self {
        let board = Board::dealt(full_deck(), 0, &mut rng);
        Self {
            board,
            turn: 0,
            rng,
        }
    }

    /// Continue from an existing board.
    pub fn from_board(board: Board, rng: GameRng) -> Self {
        Self {
            board,
            turn: 0,
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> u64 {
        self.turn
    }

    pub fn current_score(&self) -> i32 {
        self.board.score
    }

    pub fn is_won(&self) -> bool {
        self.board.is_won()
    }

    /// Adopt a board read from a save; its stock is shuffled with this
    /// game's RNG.
    pub fn adopt_loaded(&mut self, mut board: Board) {
        board.stock.shuffle(&mut self.rng);
        self.replace_board(board);
    }

    /// Swap in a whole board (load, undo). Counts as a turn.
    pub fn replace_board(&mut self, board: Board) {
        self.board = board;
        self.turn += 1;
    }

    fn apply(&mut self, event: ScoreEvent, cards_moved: usize, revealed: Option<Card>) -> MoveResult {
        let score_delta = event.delta();
        self.board.score += score_delta;
        self.turn += 1;
        MoveResult {
            score_delta,
            cards_moved,
            revealed,
        }
    }

    /// Turn the top stock card onto the waste.
    pub fn draw(&mut self) -> DrawResult {
        match self.board.stock.draw() {
            Some(card) => {
                self.board.waste.push(card);
                self.turn += 1;
                DrawResult::Drawn(card)
            }
            None => DrawResult::StockEmpty,
        }
    }

    /// Turn the waste back over into the stock and shuffle it.
    pub fn reshuffle_stock(&mut self) -> Result<MoveResult, DomainError> {
        if !self.board.stock.is_empty() {
            return Err(DomainError::invalid_action(format!(
                "{} cards remain in the stock",
                self.board.stock.len()
            )));
        }
        let mut moved = 0;
        while let Some(card) = self.board.waste.pop() {
            self.board.stock.push_face_down(card);
            moved += 1;
        }
        self.board.stock.shuffle(&mut self.rng);
        Ok(self.apply(ScoreEvent::StockReshuffled, moved, None))
    }

    /// Move the top card of the waste or a column onto its suit's foundation.
    pub fn move_to_foundation(&mut self, source: PileRef) -> Result<MoveResult, DomainError> {
        let card = match source {
            PileRef::Waste => *self
                .board
                .waste
                .top()
                .ok_or_else(|| DomainError::invalid_action("the waste is empty"))?,
            PileRef::Tableau(i) => {
                let column = self.column(i)?;
                let top = *column
                    .top()
                    .ok_or_else(|| DomainError::invalid_action(format!("column {} is empty", i + 1)))?;
                if !top.is_face_up() {
                    return Err(DomainError::illegal_move(format!(
                        "the top card of column {} is face-down",
                        i + 1
                    )));
                }
                top
            }
        };

        let foundation = &mut self.board.foundations[foundation_slot(card.suit())];
        foundation.place(card)?;

        let revealed = match source {
            PileRef::Waste => {
                self.board.waste.pop();
                None
            }
            PileRef::Tableau(i) => {
                let column = &mut self.board.tableaus[i];
                column.draw_top();
                reveal(column)
            }
        };
        Ok(self.apply(ScoreEvent::ToFoundation, 1, revealed))
    }

    /// Play the top waste card onto column `target`.
    pub fn move_waste_to_tableau(&mut self, target: usize) -> Result<MoveResult, DomainError> {
        self.column(target)?;
        let card = *self
            .board
            .waste
            .top()
            .ok_or_else(|| DomainError::invalid_action("the waste is empty"))?;
        self.board.tableaus[target]
            .place(card)
            .map_err(|e| at_column(target, e))?;
        self.board.waste.pop();
        Ok(self.apply(ScoreEvent::WasteToTableau, 1, None))
    }

    /// Move the longest fitting face-up run from column `from` to column `to`.
    pub fn transfer_tableau(&mut self, from: usize, to: usize) -> Result<MoveResult, DomainError> {
        if from == to {
            return Err(DomainError::invalid_action(
                "source and target column are the same",
            ));
        }
        self.column(to)?;
        if self.column(from)?.is_empty() {
            return Err(DomainError::invalid_action(format!(
                "column {} is empty",
                from + 1
            )));
        }
        let Some((source, target)) = pair_mut(&mut self.board.tableaus, from, to) else {
            return Err(DomainError::invalid_action("bad column pair"));
        };
        let Some(start) = source.liftable_from(target) else {
            return Err(DomainError::illegal_move(format!(
                "no run in column {} fits on column {}",
                from + 1,
                to + 1
            )));
        };
        let uncovers_hidden = start > 0 && !source.cards()[start - 1].is_face_up();
        let moved = source.len() - start;
        source.transfer_to(target);
        let revealed = if uncovers_hidden {
            source.top().copied()
        } else {
            None
        };
        self.turn += 1;
        Ok(MoveResult {
            score_delta: 0,
            cards_moved: moved,
            revealed,
        })
    }

    /// Collect every card, shuffle and deal a new layout.
    pub fn redeal_all(&mut self) -> MoveResult {
        let cards = self.board.collect_all();
        let score = self.board.score;
        self.board = Board::dealt(cards, score, &mut self.rng);
        self.apply(ScoreEvent::Redealt, DECK_SIZE, None)
    }

    fn column(&self, index: usize) -> Result<&Tableau, DomainError> {
        self.board.tableaus.get(index).ok_or_else(|| {
            DomainError::invalid_action(format!(
                "column {} does not exist, choose 1 to {TABLEAU_COUNT}",
                index.saturating_add(1)
            ))
        })
    }
}

/// Reveal the top of `column`, returning the card if it was face-down.
fn reveal(column: &mut Tableau) -> Option<Card> {
    let was_hidden = column.top().is_some_and(|c| !c.is_face_up());
    column.reveal_top_if_any();
    if was_hidden {
        column.top().copied()
    } else {
        None
    }
}

fn at_column(column: usize, err: DomainError) -> DomainError {
    match err {
        DomainError::IllegalMove(detail) => {
            DomainError::illegal_move(format!("column {}: {detail}", column + 1))
        }
        other => other,
    }
}

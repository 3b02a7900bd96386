//! Piles: the plain card sequence and the three kinds built on it.
//!
//! `Pile` is an ordered sequence whose last element is the top. `Stock`,
//! `Foundation` and `Tableau` wrap one and differ only in what they accept.

use rand::seq::SliceRandom;
use rand::Rng;

use super::cards_logic::{continues_foundation, stacks_on_tableau};
use super::cards_types::{Card, Rank, Suit};
use super::rules::SUIT_SIZE;
use crate::errors::domain::{CorruptSaveKind, DomainError};

/// Ordered cards, bottom first. Equality compares face state as well.
#[derive(Debug, Clone, Default)]
pub struct Pile {
    cards: Vec<Card>,
}

impl PartialEq for Pile {
    fn eq(&self, other: &Self) -> bool {
        self.cards.len() == other.cards.len()
            && self
                .cards
                .iter()
                .zip(&other.cards)
                .all(|(a, b)| a.same_face(b))
    }
}

impl Eq for Pile {}

impl Pile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn top(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub(crate) fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub(crate) fn pop(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Flip the top card face-up; no-op on an empty pile.
    pub(crate) fn reveal_top(&mut self) {
        if let Some(top) = self.cards.last_mut() {
            top.turn_up();
        }
    }

    /// Remove and return every card, bottom first.
    pub(crate) fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }

    fn split_off(&mut self, at: usize) -> Vec<Card> {
        self.cards.split_off(at)
    }

    fn extend(&mut self, cards: Vec<Card>) {
        self.cards.extend(cards);
    }
}

/// A pile that cards can be played onto under its own acceptance rule.
pub trait CardTarget {
    fn can_accept(&self, card: &Card) -> bool;

    fn pile_mut(&mut self) -> &mut Pile;

    /// Human-readable name used in error messages.
    fn describe(&self) -> String;

    /// Place a single card, face-up, if the rule allows it.
    fn place(&mut self, card: Card) -> Result<(), DomainError> {
        if !self.can_accept(&card) {
            return Err(DomainError::illegal_move(format!(
                "{} cannot be placed on {}",
                Card::face_up(card.suit(), card.rank()),
                self.describe()
            )));
        }
        let mut card = card;
        card.turn_up();
        self.pile_mut().push(card);
        Ok(())
    }
}

/// Face-down draw pile.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stock {
    pile: Pile,
}

impl Stock {
    /// Build a stock; every card is turned face-down.
    pub fn new(cards: Vec<Card>) -> Self {
        let cards = cards
            .into_iter()
            .map(|mut c| {
                c.turn_down();
                c
            })
            .collect();
        Self {
            pile: Pile::from_cards(cards),
        }
    }

    pub fn pile(&self) -> &Pile {
        &self.pile
    }

    pub fn len(&self) -> usize {
        self.pile.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pile.is_empty()
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.pile.cards.shuffle(rng);
    }

    /// Pop the top card and turn it face-up.
    pub fn draw(&mut self) -> Option<Card> {
        let mut card = self.pile.pop()?;
        card.turn_up();
        Some(card)
    }

    pub(crate) fn push_face_down(&mut self, mut card: Card) {
        card.turn_down();
        self.pile.push(card);
    }

    pub(crate) fn take_all(&mut self) -> Vec<Card> {
        self.pile.take_all()
    }
}

/// Per-suit pile climbing from Ace to King.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Foundation {
    suit: Suit,
    pile: Pile,
}

impl Foundation {
    pub fn new(suit: Suit) -> Self {
        Self {
            suit,
            pile: Pile::new(),
        }
    }

    /// Rebuild a foundation, checking that `cards` are Ace, Two, ... of `suit`.
    pub fn from_cards(suit: Suit, cards: Vec<Card>) -> Result<Self, DomainError> {
        let mut foundation = Self::new(suit);
        for card in cards {
            if !foundation.can_accept(&card) {
                return Err(DomainError::corrupt_save(
                    CorruptSaveKind::BrokenFoundation,
                    format!(
                        "{} cannot follow {} cards on the {} foundation",
                        Card::face_up(card.suit(), card.rank()),
                        foundation.pile.len(),
                        suit.glyph()
                    ),
                ));
            }
            let mut card = card;
            card.turn_up();
            foundation.pile.push(card);
        }
        Ok(foundation)
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn pile(&self) -> &Pile {
        &self.pile
    }

    pub fn top(&self) -> Option<&Card> {
        self.pile.top()
    }

    pub fn is_complete(&self) -> bool {
        self.pile.len() == SUIT_SIZE
    }

    pub(crate) fn take_all(&mut self) -> Vec<Card> {
        self.pile.take_all()
    }
}

impl CardTarget for Foundation {
    fn can_accept(&self, card: &Card) -> bool {
        card.suit() == self.suit
            && self.pile.len() < SUIT_SIZE
            && continues_foundation(self.pile.top(), card)
    }

    fn pile_mut(&mut self) -> &mut Pile {
        &mut self.pile
    }

    fn describe(&self) -> String {
        match self.pile.top() {
            Some(top) => format!("the {} foundation (top {top})", self.suit.glyph()),
            None => format!("the empty {} foundation", self.suit.glyph()),
        }
    }
}

/// One of the seven working columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tableau {
    pile: Pile,
}

impl Tableau {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a column, checking the face-down-below-face-up layout and
    /// that the face-up run descends in alternating colors.
    pub fn from_cards(cards: Vec<Card>) -> Result<Self, DomainError> {
        for pair in cards.windows(2) {
            let (lower, upper) = (&pair[0], &pair[1]);
            if lower.is_face_up() && !upper.is_face_up() {
                return Err(DomainError::corrupt_save(
                    CorruptSaveKind::BrokenTableau,
                    format!("face-down {upper} lies above face-up {lower}"),
                ));
            }
            if upper.is_face_up() && lower.is_face_up() && !stacks_on_tableau(lower, upper) {
                return Err(DomainError::corrupt_save(
                    CorruptSaveKind::BrokenTableau,
                    format!("{upper} cannot lie on {lower}"),
                ));
            }
        }
        Ok(Self {
            pile: Pile::from_cards(cards),
        })
    }

    pub fn pile(&self) -> &Pile {
        &self.pile
    }

    pub fn cards(&self) -> &[Card] {
        self.pile.cards()
    }

    pub fn top(&self) -> Option<&Card> {
        self.pile.top()
    }

    pub fn len(&self) -> usize {
        self.pile.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pile.is_empty()
    }

    /// Number of face-down cards at the bottom of the column.
    pub fn hidden_len(&self) -> usize {
        self.pile
            .cards()
            .iter()
            .take_while(|c| !c.is_face_up())
            .count()
    }

    /// Flip the top card face-up if there is one.
    pub fn reveal_top_if_any(&mut self) {
        self.pile.reveal_top();
    }

    /// Pop the top card without revealing the one below.
    pub fn draw_top(&mut self) -> Option<Card> {
        self.pile.pop()
    }

    /// Index of the lowest face-up card that `target` would accept.
    pub fn liftable_from(&self, target: &Tableau) -> Option<usize> {
        self.pile
            .cards()
            .iter()
            .position(|c| c.is_face_up() && target.can_accept(c))
    }

    /// Move the longest liftable run onto `target` and reveal the new top.
    /// Returns `false`, leaving both columns untouched, if nothing fits.
    pub fn transfer_to(&mut self, target: &mut Tableau) -> bool {
        let Some(start) = self.liftable_from(target) else {
            return false;
        };
        let run = self.pile.split_off(start);
        target.pile.extend(run);
        self.reveal_top_if_any();
        true
    }

    /// Append a dealt card as-is, without the acceptance check.
    pub(crate) fn deal(&mut self, card: Card) {
        self.pile.push(card);
    }

    pub(crate) fn take_all(&mut self) -> Vec<Card> {
        self.pile.take_all()
    }
}

impl CardTarget for Tableau {
    fn can_accept(&self, card: &Card) -> bool {
        match self.pile.top() {
            None => card.rank() == Rank::King,
            Some(top) => top.is_face_up() && stacks_on_tableau(top, card),
        }
    }

    fn pile_mut(&mut self) -> &mut Pile {
        &mut self.pile
    }

    fn describe(&self) -> String {
        match self.pile.top() {
            Some(top) if top.is_face_up() => format!("a column topped by {top}"),
            Some(_) => "a column with a face-down top".to_string(),
            None => "an empty column (only a King fits)".to_string(),
        }
    }
}

/// Two distinct mutable elements of one slice.
pub(crate) fn pair_mut<T>(items: &mut [T], a: usize, b: usize) -> Option<(&mut T, &mut T)> {
    if a == b || a >= items.len() || b >= items.len() {
        return None;
    }
    if a < b {
        let (left, right) = items.split_at_mut(b);
        Some((&mut left[a], &mut right[0]))
    } else {
        let (left, right) = items.split_at_mut(a);
        Some((&mut right[0], &mut left[b]))
    }
}

//! Core card-related types: Card, Rank, Suit, Color

use std::cmp::Ordering;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::hash::{Hash, Hasher};

/// Card color; a pure function of the suit.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Color {
    Red,
    Black,
}

/// The four suits, declared in their fixed ordering (not alphabetical).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Diamonds,
    Hearts,
    Spades,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Diamonds, Suit::Hearts, Suit::Spades, Suit::Clubs];

    pub const fn color(self) -> Color {
        match self {
            Suit::Diamonds | Suit::Hearts => Color::Red,
            Suit::Spades | Suit::Clubs => Color::Black,
        }
    }

    pub const fn glyph(self) -> char {
        match self {
            Suit::Diamonds => '\u{2666}',
            Suit::Hearts => '\u{2665}',
            Suit::Spades => '\u{2660}',
            Suit::Clubs => '\u{2663}',
        }
    }

    /// Ordering index, 1..=4.
    pub const fn index(self) -> u8 {
        match self {
            Suit::Diamonds => 1,
            Suit::Hearts => 2,
            Suit::Spades => 3,
            Suit::Clubs => 4,
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Rank {
    Ace,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
}

impl Rank {
    pub const ALL: [Rank; 13] = [
        Rank::Ace,
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
    ];

    /// Ordering index, Ace=1 .. King=13.
    pub const fn index(self) -> u8 {
        self as u8 + 1
    }

    /// Rank with the given ordering index (1..=13).
    pub fn from_index(index: u8) -> Option<Rank> {
        match index {
            1..=13 => Some(Rank::ALL[(index - 1) as usize]),
            _ => None,
        }
    }

    /// Next rank up, `None` after the King.
    pub fn next(self) -> Option<Rank> {
        Rank::from_index(self.index() + 1)
    }

    /// Next rank down, `None` below the Ace.
    pub fn prev(self) -> Option<Rank> {
        Rank::from_index(self.index() - 1)
    }

    /// Display glyph. Jack and Queen use the German "B" (Bube) and "D" (Dame).
    pub const fn glyph(self) -> &'static str {
        match self {
            Rank::Ace => "A",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "B",
            Rank::Queen => "D",
            Rank::King => "K",
        }
    }

    /// Counting weight: pips at face value, court cards ten, Ace eleven.
    pub const fn points(self) -> u8 {
        match self {
            Rank::Ace => 11,
            Rank::Jack | Rank::Queen | Rank::King => 10,
            _ => self.index(),
        }
    }
}

/// A playing card. Identity is (suit, rank); `face_up` is mutable state
/// owned by whichever pile holds the card.
#[derive(Debug, Copy, Clone)]
pub struct Card {
    suit: Suit,
    rank: Rank,
    face_up: bool,
}

impl Card {
    /// A face-down card.
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_up: false,
        }
    }

    pub const fn face_up(suit: Suit, rank: Rank) -> Self {
        Self {
            suit,
            rank,
            face_up: true,
        }
    }

    pub const fn suit(&self) -> Suit {
        self.suit
    }

    pub const fn rank(&self) -> Rank {
        self.rank
    }

    pub const fn color(&self) -> Color {
        self.suit.color()
    }

    pub const fn is_face_up(&self) -> bool {
        self.face_up
    }

    pub fn flip(&mut self) {
        self.face_up = !self.face_up;
    }

    pub fn turn_up(&mut self) {
        self.face_up = true;
    }

    pub fn turn_down(&mut self) {
        self.face_up = false;
    }

    /// Same card and same face state.
    pub fn same_face(&self, other: &Card) -> bool {
        self == other && self.face_up == other.face_up
    }
}

// Equality and hashing ignore `face_up`: a face-down Ace of Hearts is the
// same card as a face-up one when checking the deck for duplicates.
impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.suit == other.suit && self.rank == other.rank
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.suit.hash(state);
        self.rank.hash(state);
    }
}

// Note: Ord on Card is only for deterministic ordering (suit order, then rank).
// Gameplay comparisons go through the pile rules.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.suit.cmp(&other.suit) {
            Ordering::Equal => self.rank.cmp(&other.rank),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        if !self.face_up {
            f.write_str("-")?;
        }
        write!(f, "{}{}", self.suit.glyph(), self.rank.glyph())
    }
}

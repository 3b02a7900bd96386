//! Save-token codes for cards (e.g., "h:a", "-kr:10").
//!
//! Token grammar: `["-"] suitcode ":" rankcode`, where a leading `-` marks a
//! face-down card. Codes are read case-insensitively and written lower-case.

use std::str::FromStr;

use super::cards_types::{Card, Rank, Suit};
use crate::errors::domain::{CorruptSaveKind, DomainError};

impl Suit {
    /// Save code: suit initials of the German names.
    pub const fn code(self) -> &'static str {
        match self {
            Suit::Hearts => "h",
            Suit::Diamonds => "ka",
            Suit::Spades => "p",
            Suit::Clubs => "kr",
        }
    }

    pub fn from_code(code: &str) -> Result<Self, DomainError> {
        match code.to_ascii_lowercase().as_str() {
            "h" => Ok(Suit::Hearts),
            "ka" => Ok(Suit::Diamonds),
            "p" => Ok(Suit::Spades),
            "kr" => Ok(Suit::Clubs),
            _ => Err(DomainError::corrupt_save(
                CorruptSaveKind::UnknownSuit,
                format!("unknown suit '{code}', expected one of kr,p,h,ka"),
            )),
        }
    }
}

impl Rank {
    /// Save code: the lower-cased display glyph.
    pub const fn code(self) -> &'static str {
        match self {
            Rank::Ace => "a",
            Rank::Two => "2",
            Rank::Three => "3",
            Rank::Four => "4",
            Rank::Five => "5",
            Rank::Six => "6",
            Rank::Seven => "7",
            Rank::Eight => "8",
            Rank::Nine => "9",
            Rank::Ten => "10",
            Rank::Jack => "b",
            Rank::Queen => "d",
            Rank::King => "k",
        }
    }

    pub fn from_code(code: &str) -> Result<Self, DomainError> {
        let lower = code.to_ascii_lowercase();
        Rank::ALL
            .iter()
            .copied()
            .find(|r| r.code() == lower)
            .ok_or_else(|| {
                DomainError::corrupt_save(
                    CorruptSaveKind::UnknownRank,
                    format!("unknown rank '{code}', expected one of a,2,3,4,5,6,7,8,9,10,b,d,k"),
                )
            })
    }
}

impl Card {
    /// Save token for this card, e.g. `"-h:10"` for a face-down ten of hearts.
    pub fn token(&self) -> String {
        let marker = if self.is_face_up() { "" } else { "-" };
        format!("{marker}{}:{}", self.suit().code(), self.rank().code())
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let (face_up, body) = match token.strip_prefix('-') {
            Some(rest) => (false, rest),
            None => (true, token),
        };
        let mut parts = body.split(':');
        let (Some(suit_code), Some(rank_code), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(DomainError::corrupt_save(
                CorruptSaveKind::MalformedToken,
                format!("card token '{s}' is not of the form [-]suit:rank"),
            ));
        };
        let suit = Suit::from_code(suit_code)?;
        let rank = Rank::from_code(rank_code)?;
        Ok(if face_up {
            Card::face_up(suit, rank)
        } else {
            Card::new(suit, rank)
        })
    }
}

/// Non-panicking helper to parse card tokens into Card instances.
pub fn try_parse_cards<I, S>(tokens: I) -> Result<Vec<Card>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tokens
        .into_iter()
        .map(|s| s.as_ref().parse::<Card>())
        .collect()
}

/// Parse a comma-joined token list; the empty string is the empty list.
pub fn parse_card_list(list: &str) -> Result<Vec<Card>, DomainError> {
    if list.trim().is_empty() {
        return Ok(Vec::new());
    }
    try_parse_cards(list.split(','))
}

/// Comma-join the save tokens of `cards`.
pub fn format_card_list<'a, I>(cards: I) -> String
where
    I: IntoIterator<Item = &'a Card>,
{
    cards
        .into_iter()
        .map(Card::token)
        .collect::<Vec<_>>()
        .join(",")
}

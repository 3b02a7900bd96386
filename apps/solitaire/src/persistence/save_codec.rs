//! Conversion between a `Board` and its save record.
//!
//! The record holds every pile except the stock, which is rebuilt on load as
//! the deck complement of everything placed. Keys keep their German names:
//! `ablage` (waste), `ablagen` (foundations by suit code), `anlagen`
//! (tableaus by index) and `punkte` (score).

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::domain::cards_parsing::{format_card_list, parse_card_list};
use crate::domain::rules::{FOUNDATION_COUNT, TABLEAU_COUNT};
use crate::domain::{full_deck, Board, Card, Foundation, Pile, Rank, Stock, Suit, Tableau};
use crate::errors::domain::{CorruptSaveKind, DomainError};

/// The persisted form of a game. Fields are declared in key order so the
/// JSON output is sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRecord {
    /// Waste, bottom first.
    pub ablage: String,
    /// Suit code to comma-joined rank codes, Ace first.
    pub ablagen: BTreeMap<String, String>,
    /// Column index `"0"`..`"6"` to comma-joined card tokens, bottom first.
    pub anlagen: BTreeMap<String, String>,
    pub punkte: i32,
}

pub fn serialize(board: &Board) -> SaveRecord {
    let ablagen = board
        .foundations()
        .iter()
        .map(|f| {
            let ranks: Vec<&str> = f.pile().cards().iter().map(|c| c.rank().code()).collect();
            (f.suit().code().to_string(), ranks.join(","))
        })
        .collect();
    let anlagen = board
        .tableaus()
        .iter()
        .enumerate()
        .map(|(i, t)| (i.to_string(), format_card_list(t.cards())))
        .collect();
    SaveRecord {
        ablage: format_card_list(board.waste().cards()),
        ablagen,
        anlagen,
        punkte: board.score(),
    }
}

/// Rebuild a board, validating everything before returning it. The stock
/// comes back face-down in deck order; callers shuffle it.
pub fn deserialize(record: &SaveRecord) -> Result<Board, DomainError> {
    let foundations = read_foundations(&record.ablagen)?;
    let tableaus = read_tableaus(&record.anlagen)?;
    let waste = Pile::from_cards(
        parse_card_list(&record.ablage)?
            .into_iter()
            .map(|mut c| {
                c.turn_up();
                c
            })
            .collect(),
    );

    let mut placed = HashSet::new();
    let all_placed = waste
        .cards()
        .iter()
        .chain(foundations.iter().flat_map(|f| f.pile().cards()))
        .chain(tableaus.iter().flat_map(|t| t.cards()));
    for card in all_placed {
        if !placed.insert(*card) {
            return Err(DomainError::corrupt_save(
                CorruptSaveKind::DuplicateCard,
                format!(
                    "{} is placed twice",
                    Card::face_up(card.suit(), card.rank()).token()
                ),
            ));
        }
    }
    let stock = Stock::new(
        full_deck()
            .into_iter()
            .filter(|c| !placed.contains(c))
            .collect(),
    );

    Board::from_parts(stock, waste, foundations, tableaus, record.punkte)
}

fn read_foundations(
    ablagen: &BTreeMap<String, String>,
) -> Result<[Foundation; FOUNDATION_COUNT], DomainError> {
    let mut slots: [Option<Foundation>; FOUNDATION_COUNT] = Default::default();
    for (key, ranks) in ablagen {
        let suit = Suit::from_code(key.trim()).map_err(|_| {
            DomainError::corrupt_save(
                CorruptSaveKind::BadPileKey,
                format!("'{key}' is not a foundation, expected one of kr,p,h,ka"),
            )
        })?;
        let slot = &mut slots[(suit.index() - 1) as usize];
        if slot.is_some() {
            return Err(DomainError::corrupt_save(
                CorruptSaveKind::BadPileKey,
                format!("foundation '{key}' is given twice"),
            ));
        }
        let cards = read_rank_list(ranks)?
            .into_iter()
            .map(|r| Card::face_up(suit, r))
            .collect();
        *slot = Some(Foundation::from_cards(suit, cards)?);
    }

    let mut foundations = Suit::ALL.map(Foundation::new);
    for (i, slot) in slots.into_iter().enumerate() {
        foundations[i] = slot.ok_or_else(|| {
            DomainError::corrupt_save(
                CorruptSaveKind::MissingPile,
                format!("foundation '{}' is missing", Suit::ALL[i].code()),
            )
        })?;
    }
    Ok(foundations)
}

fn read_rank_list(list: &str) -> Result<Vec<Rank>, DomainError> {
    if list.trim().is_empty() {
        return Ok(Vec::new());
    }
    list.split(',').map(|r| Rank::from_code(r.trim())).collect()
}

fn read_tableaus(
    anlagen: &BTreeMap<String, String>,
) -> Result<[Tableau; TABLEAU_COUNT], DomainError> {
    let mut slots: [Option<Tableau>; TABLEAU_COUNT] = Default::default();
    for (key, list) in anlagen {
        let index = key
            .trim()
            .parse::<usize>()
            .ok()
            .filter(|&i| i < TABLEAU_COUNT)
            .ok_or_else(|| {
                DomainError::corrupt_save(
                    CorruptSaveKind::BadPileKey,
                    format!("tableau index '{key}' must lie in 0..={}", TABLEAU_COUNT - 1),
                )
            })?;
        if slots[index].is_some() {
            return Err(DomainError::corrupt_save(
                CorruptSaveKind::BadPileKey,
                format!("tableau {index} is given twice"),
            ));
        }
        slots[index] = Some(Tableau::from_cards(parse_card_list(list)?)?);
    }

    let mut tableaus: [Tableau; TABLEAU_COUNT] = Default::default();
    for (i, slot) in slots.into_iter().enumerate() {
        tableaus[i] = slot.ok_or_else(|| {
            DomainError::corrupt_save(
                CorruptSaveKind::MissingPile,
                format!("tableau {i} is missing"),
            )
        })?;
    }
    Ok(tableaus)
}

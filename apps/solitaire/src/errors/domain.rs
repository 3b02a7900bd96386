//! Domain-level error type used by the rule engine and the save codec.
//!
//! This error type is I/O-agnostic. The session and binary return
//! `Result<T, crate::error::AppError>` and convert from `DomainError`
//! through the provided `From<DomainError> for AppError` implementation.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// What exactly is wrong with a save record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum CorruptSaveKind {
    /// Card token does not follow `["-"] suit ":" rank`.
    MalformedToken,
    UnknownSuit,
    UnknownRank,
    /// The same (suit, rank) appears in more than one place.
    DuplicateCard,
    /// Tableau key outside `0..=6` or foundation key that is not a suit code.
    BadPileKey,
    /// A tableau or foundation entry is absent.
    MissingPile,
    /// Foundation contents are not Ace, Two, ... of its suit.
    BrokenFoundation,
    /// Tableau contents violate the descending alternating-color rule.
    BrokenTableau,
    /// The record itself cannot be decoded (not JSON, wrong field types).
    MalformedRecord,
}

/// Central domain error type
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A card placement or transfer violates pile rules.
    IllegalMove(String),
    /// Action preconditions are not met.
    InvalidAction(String),
    /// Save data is malformed or internally inconsistent.
    CorruptSave(CorruptSaveKind, String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::IllegalMove(d) => write!(f, "illegal move: {d}"),
            DomainError::InvalidAction(d) => write!(f, "invalid action: {d}"),
            DomainError::CorruptSave(kind, d) => write!(f, "corrupt save {kind:?}: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn illegal_move(detail: impl Into<String>) -> Self {
        Self::IllegalMove(detail.into())
    }
    pub fn invalid_action(detail: impl Into<String>) -> Self {
        Self::InvalidAction(detail.into())
    }
    pub fn corrupt_save(kind: CorruptSaveKind, detail: impl Into<String>) -> Self {
        Self::CorruptSave(kind, detail.into())
    }

    /// Kind of save corruption, if this is a save error.
    pub fn corrupt_kind(&self) -> Option<CorruptSaveKind> {
        match self {
            DomainError::CorruptSave(kind, _) => Some(*kind),
            _ => None,
        }
    }
}

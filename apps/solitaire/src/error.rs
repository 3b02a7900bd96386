use std::io;

use thiserror::Error;

use crate::errors::domain::{CorruptSaveKind, DomainError};
use crate::render::screen::ScreenError;

/// Application-level error: everything the session and binary can fail with.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Domain(#[from] DomainError),
    #[error("I/O error: {detail}")]
    Io {
        detail: String,
        #[source]
        source: io::Error,
    },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("Render error: {0}")]
    Render(#[from] ScreenError),
}

impl AppError {
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn io(detail: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            detail: detail.into(),
            source,
        }
    }

    /// The domain error inside, if any.
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            AppError::Domain(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for AppError {
    fn from(e: io::Error) -> Self {
        AppError::io(e.to_string(), e)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(e: serde_json::Error) -> Self {
        AppError::Domain(DomainError::corrupt_save(
            CorruptSaveKind::MalformedRecord,
            e.to_string(),
        ))
    }
}

use thiserror::Error;

use crate::models::CardKind;

/// Errors surfaced to callers of the deck builder
#[derive(Debug, Error)]
pub enum DeckError {
    /// Leader identifier is empty or not shaped like `OP14-079`
    #[error("Invalid leader identifier '{0}' (expected format like OP14-079)")]
    InvalidIdentifier(String),
    /// Card source failed or returned an unusable payload
    #[error("Card source unavailable: {0}")]
    SourceUnavailable(String),
    /// Resolved card is not a leader
    #[error("{id} is not a Leader (card kind: {kind})")]
    NotALeader { id: String, kind: CardKind },
    /// Leader has no colors to filter the catalog with
    #[error("No colors found for leader {0}")]
    MissingAttributes(String),
    /// Catalog container is neither a list nor a known wrapper object
    #[error("Unexpected {context} format: {found}")]
    UnexpectedShape {
        context: &'static str,
        found: &'static str,
    },
}

/// Errors raised by a [`crate::catalog::CardSource`]
#[derive(Debug, Error)]
pub enum SourceError {
    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Failed to parse JSON
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    /// No entry for the requested card
    #[error("Card not found: {0}")]
    NotFound(String),
    /// Source gave up after retrying
    #[error("{what} failed after {attempts} attempts")]
    Exhausted { what: String, attempts: u32 },
}

impl From<SourceError> for DeckError {
    fn from(err: SourceError) -> Self {
        DeckError::SourceUnavailable(err.to_string())
    }
}

/// Result type alias for deck building operations
pub type BuildResult<T> = Result<T, DeckError>;

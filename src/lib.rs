//! One Piece TCG deck builder
//!
//! Reconciles catalog printings, scores cards for a deck style and greedily
//! assembles a 50-card deck around a leader.

pub mod allocator;
pub mod builder;
pub mod catalog;
pub mod config;
pub mod dedup;
pub mod eligibility;
pub mod error;
pub mod formatters;
pub mod leader;
pub mod models;
pub mod normalize;
pub mod scoring;

// Re-export commonly used items
pub use builder::{build_deck, build_deck_with};
pub use catalog::{list_leaders, CardSource, SnapshotSource};
pub use config::{default_catalog_path, DeckRules, SynergyRule};
pub use error::{BuildResult, DeckError, SourceError};
pub use formatters::{format_deck_listing, format_leaders, format_summary, DeckSummary};
pub use leader::{resolve_leader, validate_identifier};
pub use models::{CardKind, CardRecord, DeckEntry, DeckResult, LeaderRecord, ScoredCard, Style};
pub use normalize::normalize_card;

use lazy_static::lazy_static;
use regex::Regex;

use crate::catalog::{unwrap_card, CardSource};
use crate::dedup::deduplicate;
use crate::error::{BuildResult, DeckError};
use crate::models::{CardRecord, LeaderRecord};
use crate::normalize::normalize_card;

lazy_static! {
    /// Two letters, two digits, dash, three digits (e.g., OP14-079)
    static ref LEADER_ID: Regex = Regex::new(r"^[A-Z]{2}\d{2}-\d{3}$").unwrap();
}

/// Validate a leader identifier and return its canonical (trimmed, upper-cased) form
pub fn validate_identifier(raw: &str) -> BuildResult<String> {
    let id = raw.trim().to_uppercase();
    if id.is_empty() || !LEADER_ID.is_match(&id) {
        return Err(DeckError::InvalidIdentifier(raw.to_string()));
    }
    Ok(id)
}

/// Resolve a leader through the card source.
///
/// The identifier is checked before the source is touched. The fetched card
/// must be a Leader with at least one color. The returned record carries the
/// canonical identifier, whatever casing the source used.
pub fn resolve_leader(source: &dyn CardSource, raw_id: &str) -> BuildResult<LeaderRecord> {
    let id = validate_identifier(raw_id)?;
    log::info!("Resolving leader {}", id);

    let raw = source.fetch_card(&id)?;
    let first = unwrap_card(&raw).map_err(|e| DeckError::SourceUnavailable(e.to_string()))?;
    let card = match raw.as_array() {
        // Several printings: keep the one the deduplicator would keep
        Some(items) => {
            let printings: Vec<CardRecord> = items
                .iter()
                .filter(|v| v.is_object())
                .map(normalize_card)
                .collect();
            deduplicate(&printings)
                .into_iter()
                .next()
                .unwrap_or_else(|| normalize_card(first))
        }
        None => normalize_card(first),
    };
    let card = CardRecord {
        card_id: Some(id),
        ..card
    };

    let leader = LeaderRecord::try_from_card(card)?;
    log::info!(
        "Leader: {} ({}) colors={} life={}",
        leader.card().display_name(),
        leader.id(),
        leader.card().attributes_label(),
        leader
            .card()
            .life
            .map(|l| l.to_string())
            .unwrap_or_else(|| "?".to_string())
    );
    Ok(leader)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::SnapshotSource;
    use crate::error::SourceError;
    use crate::models::CardKind;
    use serde_json::{json, Value};
    use std::cell::Cell;

    /// Source that counts calls and always fails
    struct DownSource {
        calls: Cell<u32>,
    }

    impl CardSource for DownSource {
        fn fetch_all_cards(&self) -> Result<Value, SourceError> {
            self.calls.set(self.calls.get() + 1);
            Err(SourceError::Exhausted {
                what: "allSetCards".to_string(),
                attempts: 3,
            })
        }

        fn fetch_card(&self, card_id: &str) -> Result<Value, SourceError> {
            self.calls.set(self.calls.get() + 1);
            Err(SourceError::Exhausted {
                what: format!("card {card_id}"),
                attempts: 3,
            })
        }
    }

    fn crocodile_source() -> SnapshotSource {
        SnapshotSource::from_value(json!([
            {
                "card_set_id": "OP14-079",
                "card_name": "Crocodile (Alternate Art)",
                "card_type": "Leader",
                "card_color": "Black"
            },
            {
                "card_set_id": "OP14-079",
                "card_name": "Crocodile",
                "card_type": "Leader",
                "card_color": "Black",
                "life": 5
            },
            {
                "card_set_id": "OP14-080",
                "card_name": "Mr.1",
                "card_type": "Character",
                "card_color": "Black"
            },
            {
                "card_set_id": "OP01-060",
                "card_name": "Donquixote Doflamingo",
                "card_type": "Leader"
            }
        ]))
    }

    #[test]
    fn test_validate_identifier_accepts_canonical_forms() {
        assert_eq!(validate_identifier("OP14-079").unwrap(), "OP14-079");
        assert_eq!(validate_identifier("  op14-079 ").unwrap(), "OP14-079");
        assert_eq!(validate_identifier("st01-001").unwrap(), "ST01-001");
    }

    #[test]
    fn test_validate_identifier_rejects_malformed() {
        for raw in ["", "   ", "14-079", "OP14079", "OP1-079", "OP14-79", "OPX4-079", "OP14-0790"] {
            assert!(
                matches!(validate_identifier(raw), Err(DeckError::InvalidIdentifier(_))),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_invalid_identifier_never_reaches_source() {
        let source = DownSource {
            calls: Cell::new(0),
        };
        let err = resolve_leader(&source, "14-079").unwrap_err();
        assert!(matches!(err, DeckError::InvalidIdentifier(_)));
        assert_eq!(source.calls.get(), 0);
    }

    #[test]
    fn test_source_failure_is_unavailable() {
        let source = DownSource {
            calls: Cell::new(0),
        };
        let err = resolve_leader(&source, "OP14-079").unwrap_err();
        assert!(matches!(err, DeckError::SourceUnavailable(_)));
        assert_eq!(source.calls.get(), 1);
    }

    #[test]
    fn test_resolves_lowercase_identifier() {
        let leader = resolve_leader(&crocodile_source(), "op14-079").unwrap();
        assert_eq!(leader.id(), "OP14-079");
        assert_eq!(leader.card().display_name(), "Crocodile");
        assert_eq!(leader.card().kind, CardKind::Leader);
        assert!(leader.attributes().contains("Black"));
        assert_eq!(leader.card().life, Some(5));
    }

    #[test]
    fn test_leader_carries_canonical_id() {
        let source = SnapshotSource::from_value(json!([
            { "card_set_id": "op14-079", "card_name": "Crocodile", "card_type": "Leader", "card_color": "Black" }
        ]));
        let leader = resolve_leader(&source, "OP14-079").unwrap();
        assert_eq!(leader.id(), "OP14-079");
    }

    #[test]
    fn test_character_is_not_a_leader() {
        let err = resolve_leader(&crocodile_source(), "OP14-080").unwrap_err();
        match err {
            DeckError::NotALeader { id, kind } => {
                assert_eq!(id, "OP14-080");
                assert_eq!(kind, CardKind::Character);
            }
            other => panic!("Expected NotALeader, got: {other:?}"),
        }
    }

    #[test]
    fn test_colorless_leader_is_rejected() {
        let err = resolve_leader(&crocodile_source(), "OP01-060").unwrap_err();
        assert!(matches!(err, DeckError::MissingAttributes(id) if id == "OP01-060"));
    }

    #[test]
    fn test_unknown_leader_is_unavailable() {
        let err = resolve_leader(&crocodile_source(), "OP99-999").unwrap_err();
        assert!(matches!(err, DeckError::SourceUnavailable(_)));
    }

    #[test]
    fn test_unexpected_card_payload_is_unavailable() {
        struct ScalarSource;
        impl CardSource for ScalarSource {
            fn fetch_all_cards(&self) -> Result<Value, SourceError> {
                Ok(json!([]))
            }
            fn fetch_card(&self, _card_id: &str) -> Result<Value, SourceError> {
                Ok(json!("OP14-079"))
            }
        }
        let err = resolve_leader(&ScalarSource, "OP14-079").unwrap_err();
        assert!(matches!(err, DeckError::SourceUnavailable(_)));
    }
}

//! Card sources and catalog container handling

use serde_json::Value;
use std::collections::HashSet;
use std::path::Path;

use crate::error::{BuildResult, DeckError, SourceError};
use crate::models::{CardKind, CardRecord};
use crate::normalize::normalize_card;

/// Where raw card JSON comes from.
///
/// `fetch_all_cards` returns the full catalog (a list or a wrapper object
/// around one). `fetch_card` returns the printings for a single id, either a
/// bare object, a wrapper or a list.
pub trait CardSource {
    fn fetch_all_cards(&self) -> Result<Value, SourceError>;
    fn fetch_card(&self, card_id: &str) -> Result<Value, SourceError>;
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "list",
        Value::Object(_) => "object",
    }
}

/// Extract the card list from a catalog payload
pub fn unwrap_list(raw: &Value) -> BuildResult<&[Value]> {
    if let Value::Object(obj) = raw {
        for key in ["data", "cards", "results"] {
            if let Some(Value::Array(items)) = obj.get(key) {
                return Ok(items.as_slice());
            }
        }
    }
    match raw {
        Value::Array(items) => Ok(items.as_slice()),
        other => Err(DeckError::UnexpectedShape {
            context: "card list",
            found: type_name(other),
        }),
    }
}

/// Extract a single card object from a card payload
pub fn unwrap_card(raw: &Value) -> BuildResult<&Value> {
    match raw {
        Value::Object(obj) => {
            for key in ["data", "card", "result"] {
                if let Some(inner) = obj.get(key).filter(|v| v.is_object()) {
                    return Ok(inner);
                }
            }
            Ok(raw)
        }
        // Alternate arts come back as a list of printings
        Value::Array(items) if items.first().is_some_and(Value::is_object) => Ok(&items[0]),
        other => Err(DeckError::UnexpectedShape {
            context: "card",
            found: type_name(other),
        }),
    }
}

/// Normalize every object entry of a catalog payload
pub fn normalize_catalog(raw: &Value) -> BuildResult<Vec<CardRecord>> {
    let items = unwrap_list(raw)?;
    let cards: Vec<CardRecord> = items
        .iter()
        .filter(|v| v.is_object())
        .map(normalize_card)
        .collect();

    let skipped = items.len() - cards.len();
    if skipped > 0 {
        log::debug!("Skipped {} non-object catalog entries", skipped);
    }
    Ok(cards)
}

/// Leaders in the catalog, one per id, sorted by set then name
pub fn list_leaders(source: &dyn CardSource) -> BuildResult<Vec<CardRecord>> {
    let raw = source.fetch_all_cards()?;
    let mut seen = HashSet::new();
    let mut leaders: Vec<CardRecord> = normalize_catalog(&raw)?
        .into_iter()
        .filter(|c| c.kind == CardKind::Leader)
        .filter(|c| !c.id().is_empty() && !c.display_name().is_empty())
        .filter(|c| seen.insert(c.id().to_string()))
        .collect();

    leaders.sort_by(|a, b| {
        a.set_id
            .as_deref()
            .unwrap_or("")
            .cmp(b.set_id.as_deref().unwrap_or(""))
            .then_with(|| a.display_name().cmp(b.display_name()))
    });

    log::info!("Found {} leaders", leaders.len());
    Ok(leaders)
}

/// Card source backed by a catalog JSON export already on disk
#[derive(Debug, Clone)]
pub struct SnapshotSource {
    catalog: Value,
}

impl SnapshotSource {
    /// Load a snapshot file
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, SourceError> {
        let path = path.as_ref();
        log::info!("Loading catalog snapshot from: {}", path.display());

        let content = std::fs::read_to_string(path)?;
        let catalog: Value = serde_json::from_str(&content)?;

        if let Ok(items) = unwrap_list(&catalog) {
            log::info!("Loaded {} catalog entries", items.len());
        }
        Ok(Self { catalog })
    }

    /// Wrap a catalog payload that is already in memory
    pub fn from_value(catalog: Value) -> Self {
        Self { catalog }
    }
}

impl CardSource for SnapshotSource {
    fn fetch_all_cards(&self) -> Result<Value, SourceError> {
        Ok(self.catalog.clone())
    }

    /// All printings for `card_id`, as a list
    fn fetch_card(&self, card_id: &str) -> Result<Value, SourceError> {
        let printings: Vec<Value> = unwrap_list(&self.catalog)
            .map(|items| {
                items
                    .iter()
                    .filter(|raw| {
                        normalize_card(raw)
                            .card_id
                            .is_some_and(|id| id.eq_ignore_ascii_case(card_id))
                    })
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        if printings.is_empty() {
            return Err(SourceError::NotFound(card_id.to_string()));
        }
        log::debug!("Found {} printings for {}", printings.len(), card_id);
        Ok(Value::Array(printings))
    }
}

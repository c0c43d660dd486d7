//! Maps raw catalog entries onto [`CardRecord`]
//!
//! Source payloads name the same field differently depending on the endpoint
//! (`card_cost` vs `cost`, `card_color` vs `colors`, ...). Each field reads the
//! first alias that is present, where null and blank strings count as absent.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::{Map, Value};
use std::collections::BTreeSet;

use crate::models::{CardKind, CardRecord};

lazy_static! {
    /// Set ids like "OP-01" are stored dash-free ("OP01")
    static ref DASHED_SET_ID: Regex = Regex::new(r"^[A-Za-z]+-\d+$").unwrap();
}

const CARD_ID_KEYS: &[&str] = &["card_set_id", "cardId", "id", "card_id", "card_image_id"];
const NAME_KEYS: &[&str] = &["card_name", "name"];
const KIND_KEYS: &[&str] = &["card_type", "type"];
const SET_ID_KEYS: &[&str] = &["set_id", "set", "setId"];
const COST_KEYS: &[&str] = &["card_cost", "cost"];
const POWER_KEYS: &[&str] = &["card_power", "power"];
const COUNTER_KEYS: &[&str] = &["counter_amount", "counter"];
const COLOR_KEYS: &[&str] = &["card_color", "color", "colors"];
const TRAIT_KEYS: &[&str] = &["sub_types", "trait", "traits"];
const TEXT_KEYS: &[&str] = &["card_text", "effect", "text"];
const IMAGE_KEYS: &[&str] = &["card_image", "image", "images"];

/// Convert a raw catalog entry into a canonical record. Never fails: a
/// non-object value yields a record with every field absent. Card ids are
/// upper-cased so `op14-079` and `OP14-079` name the same card.
pub fn normalize_card(raw: &Value) -> CardRecord {
    let Some(obj) = raw.as_object() else {
        return CardRecord::empty(CardKind::Unknown);
    };

    CardRecord {
        card_id: first_present(obj, CARD_ID_KEYS)
            .and_then(as_string)
            .map(|id| id.to_uppercase()),
        name: first_present(obj, NAME_KEYS).and_then(as_string),
        kind: first_present(obj, KIND_KEYS)
            .and_then(as_string)
            .map(|s| CardKind::parse(&s))
            .unwrap_or(CardKind::Unknown),
        set_id: first_present(obj, SET_ID_KEYS)
            .and_then(as_string)
            .map(|s| normalize_set_id(&s)),
        set_name: first_present(obj, &["set_name"]).and_then(as_string),
        rarity: first_present(obj, &["rarity"]).and_then(as_string),
        cost: first_present(obj, COST_KEYS).and_then(as_non_negative),
        power: first_present(obj, POWER_KEYS).and_then(as_non_negative),
        counter_value: first_present(obj, COUNTER_KEYS).and_then(as_non_negative),
        life: first_present(obj, &["life"])
            .and_then(as_int)
            .and_then(|n| i32::try_from(n).ok()),
        attributes: first_present(obj, COLOR_KEYS)
            .map(as_attributes)
            .unwrap_or_default(),
        traits: first_present(obj, TRAIT_KEYS)
            .map(as_traits)
            .unwrap_or_default(),
        text: first_present(obj, TEXT_KEYS).and_then(as_string),
        image_reference: first_present(obj, IMAGE_KEYS).and_then(as_image_reference),
    }
}

fn first_present<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|k| obj.get(*k))
        .find(|v| !is_nullish(v))
}

/// Null, blank strings and the literal "NULL" some scrapes emit
pub fn is_nullish(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => {
            let s = s.trim();
            s.is_empty() || s.eq_ignore_ascii_case("null")
        }
        _ => false,
    }
}

/// Trimmed string form of a scalar. Arrays and objects are not strings.
pub fn as_string(value: &Value) -> Option<String> {
    if is_nullish(value) {
        return None;
    }
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Explicit integer conversion for numeric fields.
///
/// Booleans map to 0/1, floats truncate toward zero, strings must parse as a
/// base-10 integer. Everything else is `None`.
pub fn as_int(value: &Value) -> Option<i64> {
    if is_nullish(value) {
        return None;
    }
    match value {
        Value::Bool(b) => Some(i64::from(*b)),
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && f.abs() < i64::MAX as f64)
                .map(|f| f.trunc() as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

fn as_non_negative(value: &Value) -> Option<u32> {
    as_int(value).and_then(|n| u32::try_from(n).ok())
}

/// Colors arrive as `["Blue", "Purple"]`, `"Blue Purple"`, `"Blue/Purple"` or `"Blue, Purple"`
pub fn as_attributes(value: &Value) -> BTreeSet<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(as_string)
            .filter(|s| !s.is_empty())
            .collect(),
        Value::String(s) => s
            .replace(['/', ','], " ")
            .split_whitespace()
            .map(str::to_string)
            .collect(),
        other => as_string(other).into_iter().collect(),
    }
}

fn as_traits(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items.iter().filter_map(as_string).collect(),
        other => as_string(other).into_iter().collect(),
    }
}

fn as_image_reference(value: &Value) -> Option<String> {
    match value {
        Value::String(_) => as_string(value),
        Value::Array(items) => items.iter().find_map(|v| match v {
            Value::String(_) => as_string(v),
            _ => None,
        }),
        Value::Object(uris) => ["normal", "large", "small"]
            .iter()
            .filter_map(|k| uris.get(*k))
            .find_map(as_string),
        _ => None,
    }
}

/// "OP-01" -> "OP01"; other ids are kept as-is
pub fn normalize_set_id(set_id: &str) -> String {
    let s = set_id.trim();
    if DASHED_SET_ID.is_match(s) {
        s.replace('-', "")
    } else {
        s.to_string()
    }
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;

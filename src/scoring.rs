//! Heuristic card scoring per deck style
//!
//! The weights target black cost-reduction / K.O. decks: cheap removal text,
//! counters to survive, and trait bodies for leaders that sacrifice them.

use crate::config::SYNERGY_TRAIT;
use crate::models::{CardKind, CardRecord, ScoredCard, Style};

const COUNTER_CAP: u32 = 2000;
const POWER_CAP: u32 = 8000;

/// Case-insensitive substring match against the space-joined traits
pub fn has_synergy_trait(card: &CardRecord, trait_name: &str) -> bool {
    card.traits
        .join(" ")
        .to_lowercase()
        .contains(&trait_name.to_lowercase())
}

fn kind_weight(kind: CardKind) -> f64 {
    match kind {
        CardKind::Character => 1.0,
        CardKind::Event => 0.7,
        CardKind::Stage => 0.4,
        CardKind::Leader | CardKind::Unknown => 0.0,
    }
}

fn curve_fit(cost: u32, style: Style) -> f64 {
    let cost = f64::from(cost);
    match style {
        Style::Control => (1.0 - (cost - 5.0).abs() / 7.0) * 0.9,
        Style::Midrange => (1.0 - (cost - 4.0).abs() / 6.0) * 0.9,
        Style::Aggro => (6.0 - cost).max(0.0) * 0.20,
    }
}

fn counter_utility(counter: u32, style: Style) -> f64 {
    let scaled = f64::from(counter.min(COUNTER_CAP)) / f64::from(COUNTER_CAP);
    match style {
        Style::Control | Style::Midrange => scaled * 0.85,
        Style::Aggro => scaled * 0.35,
    }
}

fn text_bonus(text: &str) -> f64 {
    let text = text.to_lowercase();
    let mentions_cost = text.contains("cost");
    let mut bonus = 0.0;

    // Cost reduction
    if mentions_cost && text.contains('-') {
        bonus += 1.0;
    }
    // Removal, better when it keys off cost
    if text.contains("k.o") || text.contains("ko") {
        bonus += 0.9;
        if mentions_cost {
            bonus += 0.7;
        }
    }
    if text.contains("trash") {
        bonus += 0.15;
    }
    bonus
}

/// Desirability of `card` for `style`. Absent stats contribute nothing.
pub fn score(card: &CardRecord, style: Style) -> f64 {
    let mut s = kind_weight(card.kind);

    if let Some(cost) = card.cost {
        s += curve_fit(cost, style);
    }

    if let Some(counter) = card.counter_value {
        s += counter_utility(counter, style);
    }

    if has_synergy_trait(card, SYNERGY_TRAIT) {
        s += if card.kind == CardKind::Character { 1.1 } else { 0.2 };
    }

    if let Some(text) = card.text.as_deref() {
        s += text_bonus(text);
    }

    if let (Some(power), Style::Midrange | Style::Aggro) = (card.power, style) {
        s += f64::from(power.min(POWER_CAP)) / f64::from(POWER_CAP) * 0.35;
    }

    s
}

/// Score every card of an eligible pool, keeping pool order
pub fn score_pool(cards: Vec<CardRecord>, style: Style) -> Vec<ScoredCard> {
    cards
        .into_iter()
        .map(|card| ScoredCard {
            score: score(&card, style),
            synergy: has_synergy_trait(&card, SYNERGY_TRAIT),
            card,
        })
        .collect()
}

#[cfg(test)]
#[path = "scoring_tests.rs"]
mod tests;

//! Collapses alternate-art and reprint printings into one record per card id

use std::collections::HashMap;

use crate::models::CardRecord;

/// How desirable a printing is as the representative of its card id
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PrintingRank {
    AlternateArt = 0,
    Reprint = 1,
    Standard = 2,
}

impl PrintingRank {
    pub fn of(card: &CardRecord) -> Self {
        let name = card.display_name().to_lowercase();
        if name.contains("alternate art") {
            PrintingRank::AlternateArt
        } else if name.contains("reprint") {
            PrintingRank::Reprint
        } else {
            PrintingRank::Standard
        }
    }
}

fn preference(card: &CardRecord) -> (PrintingRank, bool) {
    (PrintingRank::of(card), card.image_reference.is_some())
}

/// Keep the best printing per `card_id`.
///
/// Standard printings beat reprints, which beat alternate arts; then a
/// printing with an image wins; then the earliest one in the catalog. Records
/// without an id are dropped. Output follows first-appearance order of each id.
pub fn deduplicate(cards: &[CardRecord]) -> Vec<CardRecord> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut kept: Vec<&CardRecord> = Vec::new();
    let mut dropped = 0usize;

    for card in cards {
        let id = match card.card_id.as_deref() {
            Some(id) if !id.trim().is_empty() => id,
            _ => {
                dropped += 1;
                continue;
            }
        };

        match slots.get(id) {
            Some(&slot) => {
                // Strictly better only, so ties keep the earlier printing
                if preference(card) > preference(kept[slot]) {
                    kept[slot] = card;
                }
            }
            None => {
                slots.insert(id, kept.len());
                kept.push(card);
            }
        }
    }

    if dropped > 0 {
        log::debug!("Dropped {} catalog records without a card id", dropped);
    }
    log::debug!(
        "Deduplicated {} records into {} cards",
        cards.len() - dropped,
        kept.len()
    );

    kept.into_iter().cloned().collect()
}

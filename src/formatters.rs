use std::collections::BTreeMap;

use crate::config::SynergyRule;
use crate::models::{CardKind, CardRecord, DeckResult};

/// Aggregate view of a built deck
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeckSummary {
    pub total_copies: u32,
    pub kind_counts: BTreeMap<CardKind, u32>,
    /// Copies per cost; `None` collects cards with unknown cost
    pub cost_curve: BTreeMap<Option<u32>, u32>,
    pub synergy_character_copies: u32,
}

impl DeckSummary {
    pub fn from_deck(deck: &DeckResult) -> Self {
        let mut summary = Self::default();
        for entry in deck.entries() {
            let qty = u32::from(entry.quantity);
            let card = &entry.card.card;

            summary.total_copies += qty;
            *summary.kind_counts.entry(card.kind).or_insert(0) += qty;
            *summary.cost_curve.entry(card.cost).or_insert(0) += qty;
            if entry.card.synergy && card.kind == CardKind::Character {
                summary.synergy_character_copies += qty;
            }
        }
        summary
    }
}

fn opt<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Render rows as space-separated, left-aligned columns with a dashed rule
fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(i, h)| {
            rows.iter()
                .map(|r| r[i].chars().count())
                .max()
                .unwrap_or(0)
                .max(h.len())
        })
        .collect();

    let line = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{:<width$}", c, width = *w))
            .collect::<Vec<_>>()
            .join(" ")
            .trim_end()
            .to_string()
    };

    let header: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

    let mut output = String::new();
    for cells in [&header, &rule].into_iter().chain(rows) {
        output.push_str(&line(cells.as_slice()));
        output.push('\n');
    }
    output
}

/// Leader header followed by the card table, best entries first
pub fn format_deck_listing(deck: &DeckResult) -> String {
    let leader = deck.leader().card();
    let summary = DeckSummary::from_deck(deck);
    let mut output = String::new();

    output.push_str(&format!(
        "Leader: {} ({}) colors={} life={}\n",
        leader.display_name(),
        leader.id(),
        leader.attributes_label(),
        opt(leader.life)
    ));
    output.push_str(&format!("Style: {}\n", deck.style()));
    output.push_str(&format!("Deck size: {}\n", summary.total_copies));
    if let Some(rule) = SynergyRule::for_leader(deck.leader().id()) {
        output.push_str(&format!(
            "{} chars (copies): {}\n",
            rule.label, summary.synergy_character_copies
        ));
    }
    output.push('\n');

    let headers = [
        "qty", "card_id", "name", "kind", "cost", "power", "counter", "colors", "set_id",
        "score", "synergy",
    ];
    let rows: Vec<Vec<String>> = deck
        .entries()
        .iter()
        .map(|entry| {
            let card = &entry.card.card;
            vec![
                entry.quantity.to_string(),
                card.id().to_string(),
                card.display_name().to_string(),
                card.kind.to_string(),
                opt(card.cost),
                opt(card.power),
                opt(card.counter_value),
                card.attributes_label(),
                opt(card.set_id.as_deref()),
                format!("{:.3}", entry.card.score),
                entry.card.synergy.to_string(),
            ]
        })
        .collect();

    output.push_str(&render_table(&headers, &rows));
    output
}

/// Kind counts and cost curve; unknown cost is shown as `?`
pub fn format_summary(summary: &DeckSummary) -> String {
    let kinds = summary
        .kind_counts
        .iter()
        .map(|(kind, n)| format!("{kind}: {n}"))
        .collect::<Vec<_>>()
        .join(", ");
    let curve = summary
        .cost_curve
        .iter()
        .map(|(cost, n)| match cost {
            Some(c) => format!("{c}: {n}"),
            None => format!("?: {n}"),
        })
        .collect::<Vec<_>>()
        .join(", ");

    format!("Type counts: {kinds}\nCurve: {curve}\n")
}

pub fn format_leaders(leaders: &[CardRecord]) -> String {
    let mut output = format!("Leaders found: {}\n", leaders.len());
    if leaders.is_empty() {
        return output;
    }

    let rows: Vec<Vec<String>> = leaders
        .iter()
        .map(|c| {
            vec![
                c.id().to_string(),
                c.display_name().to_string(),
                c.attributes_label(),
                opt(c.life),
                opt(c.set_id.as_deref()),
            ]
        })
        .collect();

    output.push_str(&render_table(
        &["card_id", "name", "colors", "life", "set_id"],
        &rows,
    ));
    output
}

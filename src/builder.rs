//! End-to-end deck construction for a leader

use crate::allocator::allocate;
use crate::catalog::{normalize_catalog, CardSource};
use crate::config::{DeckRules, SynergyRule};
use crate::dedup::deduplicate;
use crate::eligibility::filter_eligible;
use crate::error::BuildResult;
use crate::leader::resolve_leader;
use crate::models::{DeckEntry, DeckResult, Style};
use crate::scoring::score_pool;

/// Build a deck for `leader_id` with a style given by name.
///
/// Unknown style names fall back to control.
pub fn build_deck(source: &dyn CardSource, leader_id: &str, style: &str) -> BuildResult<DeckResult> {
    let style = Style::parse(style).unwrap_or_else(|| {
        log::warn!("Unknown style '{}', falling back to control", style);
        Style::Control
    });
    build_deck_with(source, leader_id, style, &DeckRules::default())
}

/// Build a deck with an explicit style and rules
pub fn build_deck_with(
    source: &dyn CardSource,
    leader_id: &str,
    style: Style,
    rules: &DeckRules,
) -> BuildResult<DeckResult> {
    let leader = resolve_leader(source, leader_id)?;

    let raw = source.fetch_all_cards()?;
    let catalog = normalize_catalog(&raw)?;
    let unique = deduplicate(&catalog);
    let eligible = filter_eligible(unique, &leader);

    log::info!(
        "Catalog: {} records, {} eligible cards for {} ({})",
        catalog.len(),
        eligible.len(),
        leader.id(),
        style
    );

    let pool = score_pool(eligible, style);
    // Resolved leaders carry the canonical id
    let synergy = SynergyRule::for_leader(leader.id());
    if let Some(rule) = synergy {
        log::info!(
            "Leader {} requires at least {} '{}' characters",
            rule.leader_id,
            rule.floor,
            rule.trait_name
        );
    }

    let selection = allocate(&pool, style, synergy, rules);
    let entries: Vec<DeckEntry> = selection
        .into_iter()
        .map(|(index, quantity)| DeckEntry {
            card: pool[index].clone(),
            quantity,
        })
        .collect();

    let deck = DeckResult::new(leader, style, entries);
    log::info!(
        "Built {} card deck from {} distinct cards",
        deck.total_copies(),
        deck.entries().len()
    );
    Ok(deck)
}

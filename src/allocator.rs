//! Greedy deck allocation over a scored pool
//!
//! Three phases share one [`AllocationState`]: an optional synergy floor,
//! per-kind quotas, then a backfill up to the deck size. Every pass walks the
//! pool by descending score and takes up to `max_copies` of each card.

use crate::config::{DeckRules, SynergyRule};
use crate::models::{CardKind, ScoredCard, Style};

/// Copies held per pool index plus the running total
#[derive(Debug, Clone)]
pub struct AllocationState {
    copies: Vec<u8>,
    total: u32,
    /// Pool indices, best score first; equal scores keep pool order
    order: Vec<usize>,
    rules: DeckRules,
}

impl AllocationState {
    pub fn new(pool: &[ScoredCard], rules: DeckRules) -> Self {
        let mut order: Vec<usize> = (0..pool.len()).collect();
        // sort_by is stable
        order.sort_by(|&a, &b| pool[b].score.total_cmp(&pool[a].score));
        Self {
            copies: vec![0; pool.len()],
            total: 0,
            order,
            rules,
        }
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn copies_of(&self, index: usize) -> u8 {
        self.copies.get(index).copied().unwrap_or(0)
    }

    /// Copies held of cards matching `filter`
    pub fn count_where<F>(&self, pool: &[ScoredCard], filter: F) -> u32
    where
        F: Fn(&ScoredCard) -> bool,
    {
        self.copies
            .iter()
            .zip(pool)
            .filter(|(_, card)| filter(*card))
            .map(|(&n, _)| u32::from(n))
            .sum()
    }

    /// One greedy pass: take up to `wanted` copies of cards passing `filter`,
    /// never exceeding the copy ceiling or the deck size. Returns copies taken.
    pub fn take<F>(&mut self, pool: &[ScoredCard], wanted: u32, filter: F) -> u32
    where
        F: Fn(&ScoredCard) -> bool,
    {
        let mut remaining = wanted.min(self.rules.deck_size.saturating_sub(self.total));
        let mut taken = 0;

        for &index in &self.order {
            if remaining == 0 {
                break;
            }
            if !filter(&pool[index]) {
                continue;
            }
            let room = u32::from(self.rules.max_copies.saturating_sub(self.copies[index]));
            let add = room.min(remaining);
            if add == 0 {
                continue;
            }
            // add <= max_copies, which fits in u8
            self.copies[index] += add as u8;
            remaining -= add;
            taken += add;
        }

        self.total += taken;
        taken
    }

    /// Selected pool indices with their quantities, in pool order
    pub fn into_selection(self) -> Vec<(usize, u8)> {
        self.copies
            .into_iter()
            .enumerate()
            .filter(|&(_, n)| n > 0)
            .collect()
    }
}

/// Phase 1: force a minimum of trait-tagged characters
pub fn fill_synergy_floor(state: &mut AllocationState, pool: &[ScoredCard], rule: &SynergyRule) {
    let taken = state.take(pool, rule.floor, |c| {
        c.card.kind == CardKind::Character && c.synergy
    });
    log::debug!(
        "Synergy floor ({}): took {} of {} copies",
        rule.trait_name,
        taken,
        rule.floor
    );
}

/// Phase 2: fill per-kind quotas for the style. Characters already taken
/// count toward the character quota.
pub fn fill_kind_quotas(state: &mut AllocationState, pool: &[ScoredCard], style: Style) {
    let quotas = style.quotas();
    for kind in [CardKind::Character, CardKind::Event, CardKind::Stage] {
        let held = state.count_where(pool, |c| c.card.kind == kind);
        let wanted = quotas.get(kind).saturating_sub(held);
        let taken = state.take(pool, wanted, |c| c.card.kind == kind);
        log::debug!("Quota {}: took {} of {} copies", kind, taken, wanted);
    }
}

/// Phase 3: top up to the deck size with the best remaining cards of any kind
pub fn backfill(state: &mut AllocationState, pool: &[ScoredCard]) {
    let missing = state.rules.deck_size.saturating_sub(state.total);
    if missing == 0 {
        return;
    }
    let taken = state.take(pool, missing, |_| true);
    log::debug!("Backfill: took {} of {} copies", taken, missing);
}

/// Allocate a deck from a scored eligible pool.
///
/// Returns `(pool index, quantity)` pairs. The total reaches `rules.deck_size`
/// unless the pool runs out of copies first, which is not an error.
pub fn allocate(
    pool: &[ScoredCard],
    style: Style,
    synergy: Option<&SynergyRule>,
    rules: &DeckRules,
) -> Vec<(usize, u8)> {
    let mut state = AllocationState::new(pool, *rules);

    if let Some(rule) = synergy {
        fill_synergy_floor(&mut state, pool, rule);
    }
    fill_kind_quotas(&mut state, pool, style);
    backfill(&mut state, pool);

    if state.total() < rules.deck_size {
        log::warn!(
            "Pool exhausted: allocated {} of {} cards",
            state.total(),
            rules.deck_size
        );
    }
    state.into_selection()
}

#[cfg(test)]
#[path = "allocator_tests.rs"]
mod tests;

//! Deck construction rules and the leader-specific synergy rule

use std::path::PathBuf;

use crate::models::{CardKind, Style};

/// Trait whose members are rewarded by the scorer
pub const SYNERGY_TRAIT: &str = "baroque works";

/// Size and copy limits of a constructed deck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckRules {
    pub deck_size: u32,
    pub max_copies: u8,
}

impl Default for DeckRules {
    fn default() -> Self {
        Self {
            deck_size: 50,
            max_copies: 4,
        }
    }
}

/// Target copies per card kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KindQuotas {
    pub character: u32,
    pub event: u32,
    pub stage: u32,
}

impl KindQuotas {
    pub fn get(&self, kind: CardKind) -> u32 {
        match kind {
            CardKind::Character => self.character,
            CardKind::Event => self.event,
            CardKind::Stage => self.stage,
            CardKind::Leader | CardKind::Unknown => 0,
        }
    }
}

impl Style {
    /// Kind quotas for this style. Each set sums to the default deck size.
    pub fn quotas(&self) -> KindQuotas {
        match self {
            Style::Aggro => KindQuotas {
                character: 38,
                event: 12,
                stage: 0,
            },
            Style::Midrange => KindQuotas {
                character: 36,
                event: 12,
                stage: 2,
            },
            Style::Control => KindQuotas {
                character: 34,
                event: 14,
                stage: 2,
            },
        }
    }
}

/// Minimum count of trait-tagged characters forced for one specific leader
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SynergyRule {
    pub leader_id: &'static str,
    pub trait_name: &'static str,
    /// Trait as printed in listings
    pub label: &'static str,
    pub floor: u32,
}

/// Crocodile (OP14-079) wants Baroque Works bodies to sacrifice
pub const CROCODILE_BAROQUE_WORKS: SynergyRule = SynergyRule {
    leader_id: "OP14-079",
    trait_name: SYNERGY_TRAIT,
    label: "Baroque Works",
    floor: 12,
};

impl SynergyRule {
    /// Rule applying to a canonical (upper-cased) leader id, if any
    pub fn for_leader(leader_id: &str) -> Option<&'static SynergyRule> {
        if leader_id == CROCODILE_BAROQUE_WORKS.leader_id {
            Some(&CROCODILE_BAROQUE_WORKS)
        } else {
            None
        }
    }
}

/// Returns the default catalog snapshot path: ~/.local/share/optcg_deckbuilder/all_set_cards.json
pub fn default_catalog_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("optcg_deckbuilder")
        .join("all_set_cards.json")
}

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use crate::error::DeckError;

/// Card kinds printed on One Piece TCG cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    Leader,
    Character,
    Event,
    Stage,
    Unknown,
}

impl CardKind {
    /// Returns the lowercase name of the kind (e.g., "character")
    pub fn as_str(&self) -> &'static str {
        match self {
            CardKind::Leader => "leader",
            CardKind::Character => "character",
            CardKind::Event => "event",
            CardKind::Stage => "stage",
            CardKind::Unknown => "unknown",
        }
    }

    /// Parse a raw card type, ignoring case and surrounding whitespace.
    /// Anything unrecognized maps to `Unknown`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "leader" => CardKind::Leader,
            "character" => CardKind::Character,
            "event" => CardKind::Event,
            "stage" => CardKind::Stage,
            _ => CardKind::Unknown,
        }
    }

    /// Kinds that can fill deck slots
    pub fn is_playable(&self) -> bool {
        matches!(self, CardKind::Character | CardKind::Event | CardKind::Stage)
    }
}

impl fmt::Display for CardKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Deck building style, selects the scoring profile and kind quotas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Style {
    Aggro,
    Midrange,
    Control,
}

impl Style {
    pub fn as_str(&self) -> &'static str {
        match self {
            Style::Aggro => "aggro",
            Style::Midrange => "midrange",
            Style::Control => "control",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "aggro" => Some(Style::Aggro),
            "midrange" => Some(Style::Midrange),
            "control" => Some(Style::Control),
            _ => None,
        }
    }

    pub fn all() -> &'static [Style] {
        &[Style::Aggro, Style::Midrange, Style::Control]
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical record for one printing of a card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardRecord {
    pub card_id: Option<String>,
    pub name: Option<String>,
    pub kind: CardKind,
    pub set_id: Option<String>,
    pub set_name: Option<String>,
    pub rarity: Option<String>,
    pub cost: Option<u32>,
    pub power: Option<u32>,
    pub counter_value: Option<u32>,
    pub life: Option<i32>,
    /// Colors
    pub attributes: BTreeSet<String>,
    pub traits: Vec<String>,
    pub text: Option<String>,
    pub image_reference: Option<String>,
}

impl CardRecord {
    /// Empty record of the given kind, every optional field absent
    pub fn empty(kind: CardKind) -> Self {
        Self {
            card_id: None,
            name: None,
            kind,
            set_id: None,
            set_name: None,
            rarity: None,
            cost: None,
            power: None,
            counter_value: None,
            life: None,
            attributes: BTreeSet::new(),
            traits: Vec::new(),
            text: None,
            image_reference: None,
        }
    }

    pub fn id(&self) -> &str {
        self.card_id.as_deref().unwrap_or("")
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    /// True when any color is shared with `other`
    pub fn shares_attribute(&self, other: &BTreeSet<String>) -> bool {
        !self.attributes.is_disjoint(other)
    }

    /// Colors joined with a space (e.g., "Black Yellow")
    pub fn attributes_label(&self) -> String {
        self.attributes
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// A card that anchors a deck. Only constructible from a leader with colors.
///
/// Records built by [`crate::leader::resolve_leader`] carry the canonical
/// (upper-cased) identifier.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderRecord(CardRecord);

impl LeaderRecord {
    pub fn try_from_card(card: CardRecord) -> Result<Self, DeckError> {
        if card.kind != CardKind::Leader {
            return Err(DeckError::NotALeader {
                id: card.id().to_string(),
                kind: card.kind,
            });
        }
        if card.attributes.is_empty() {
            return Err(DeckError::MissingAttributes(card.id().to_string()));
        }
        Ok(Self(card))
    }

    pub fn card(&self) -> &CardRecord {
        &self.0
    }

    pub fn id(&self) -> &str {
        self.0.id()
    }

    pub fn attributes(&self) -> &BTreeSet<String> {
        &self.0.attributes
    }
}

/// An eligible card with its score for the chosen style
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCard {
    pub card: CardRecord,
    pub score: f64,
    /// Carries the synergy trait
    pub synergy: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DeckEntry {
    pub card: ScoredCard,
    pub quantity: u8,
}

/// Allocated deck: leader, style and selected cards with quantities
#[derive(Debug, Clone)]
pub struct DeckResult {
    leader: LeaderRecord,
    style: Style,
    entries: Vec<DeckEntry>,
}

impl DeckResult {
    /// Builds a result, ordering entries by quantity (desc), score (desc), name.
    pub fn new(leader: LeaderRecord, style: Style, mut entries: Vec<DeckEntry>) -> Self {
        entries.sort_by(|a, b| {
            b.quantity
                .cmp(&a.quantity)
                .then_with(|| b.card.score.total_cmp(&a.card.score))
                .then_with(|| a.card.card.display_name().cmp(b.card.card.display_name()))
        });
        Self {
            leader,
            style,
            entries,
        }
    }

    pub fn leader(&self) -> &LeaderRecord {
        &self.leader
    }

    pub fn style(&self) -> Style {
        self.style
    }

    pub fn entries(&self) -> &[DeckEntry] {
        &self.entries
    }

    pub fn total_copies(&self) -> u32 {
        self.entries.iter().map(|e| u32::from(e.quantity)).sum()
    }

    /// Quantity held for a card id, 0 if absent
    pub fn quantity(&self, card_id: &str) -> u8 {
        self.entries
            .iter()
            .find(|e| e.card.card.id() == card_id)
            .map(|e| e.quantity)
            .unwrap_or(0)
    }

    /// card_id -> quantity mapping
    pub fn quantities(&self) -> BTreeMap<String, u8> {
        self.entries
            .iter()
            .map(|e| (e.card.card.id().to_string(), e.quantity))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

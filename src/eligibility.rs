use crate::models::{CardRecord, LeaderRecord};

/// Whether a card may fill a slot in a deck led by `leader`
pub fn is_eligible(card: &CardRecord, leader: &LeaderRecord) -> bool {
    card.kind.is_playable() && card.shares_attribute(leader.attributes())
}

/// Keep playable cards (character, event, stage) sharing a color with the leader
pub fn filter_eligible(cards: Vec<CardRecord>, leader: &LeaderRecord) -> Vec<CardRecord> {
    let total = cards.len();
    let eligible: Vec<CardRecord> = cards
        .into_iter()
        .filter(|card| is_eligible(card, leader))
        .collect();

    log::debug!(
        "{} of {} cards are eligible for leader {}",
        eligible.len(),
        total,
        leader.id()
    );
    eligible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CardKind;

    fn card(id: &str, kind: CardKind, colors: &[&str]) -> CardRecord {
        CardRecord {
            card_id: Some(id.to_string()),
            attributes: colors.iter().map(|c| c.to_string()).collect(),
            ..CardRecord::empty(kind)
        }
    }

    fn black_leader() -> LeaderRecord {
        LeaderRecord::try_from_card(card("OP14-079", CardKind::Leader, &["Black"])).unwrap()
    }

    #[test]
    fn test_playable_kinds_only() {
        let leader = black_leader();
        let cards = vec![
            card("C", CardKind::Character, &["Black"]),
            card("E", CardKind::Event, &["Black"]),
            card("S", CardKind::Stage, &["Black"]),
            card("L", CardKind::Leader, &["Black"]),
            card("U", CardKind::Unknown, &["Black"]),
        ];
        let ids: Vec<_> = filter_eligible(cards, &leader)
            .iter()
            .map(|c| c.id().to_string())
            .collect();
        assert_eq!(ids, vec!["C", "E", "S"]);
    }

    #[test]
    fn test_requires_shared_color() {
        let leader = black_leader();
        let cards = vec![
            card("mono", CardKind::Character, &["Red"]),
            card("dual", CardKind::Character, &["Red", "Black"]),
            card("none", CardKind::Character, &[]),
        ];
        let eligible = filter_eligible(cards, &leader);
        assert_eq!(eligible.len(), 1);
        assert_eq!(eligible[0].id(), "dual");
    }

    #[test]
    fn test_dual_color_leader_accepts_either_color() {
        let leader =
            LeaderRecord::try_from_card(card("OP03-099", CardKind::Leader, &["Black", "Yellow"]))
                .unwrap();
        assert!(is_eligible(&card("Y", CardKind::Event, &["Yellow"]), &leader));
        assert!(is_eligible(&card("B", CardKind::Stage, &["Black"]), &leader));
        assert!(!is_eligible(&card("G", CardKind::Event, &["Green"]), &leader));
    }
}

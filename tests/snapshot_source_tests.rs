//! Loading catalog snapshots from disk

use optcg_deckbuilder::{build_deck, list_leaders, CardSource, SnapshotSource, SourceError};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_snapshot(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

const SNAPSHOT: &str = r#"{
  "data": [
    { "card_set_id": "OP14-079", "card_name": "Crocodile", "card_type": "Leader", "card_color": "Black", "set_id": "OP-14" },
    { "card_set_id": "OP01-001", "card_name": "Roronoa Zoro", "card_type": "Leader", "card_color": "Red", "set_id": "OP-01" },
    { "card_set_id": "OP14-100", "card_name": "Mr.1", "card_type": "Character", "card_color": "Black", "card_cost": "5", "sub_types": "Baroque Works" },
    { "card_set_id": "OP14-130", "card_name": "Sables", "card_type": "Event", "card_color": "Black", "card_cost": 1 }
  ]
}"#;

#[test]
fn loads_snapshot_from_file() {
    let file = write_snapshot(SNAPSHOT);
    let source = SnapshotSource::from_path(file.path()).unwrap();

    let printings = source.fetch_card("OP14-100").unwrap();
    assert_eq!(printings.as_array().map(Vec::len), Some(1));
}

#[test]
fn lists_leaders_from_file() {
    let file = write_snapshot(SNAPSHOT);
    let source = SnapshotSource::from_path(file.path()).unwrap();

    let leaders = list_leaders(&source).unwrap();
    let ids: Vec<_> = leaders.iter().map(|c| c.id()).collect();
    assert_eq!(ids, vec!["OP01-001", "OP14-079"]);
}

#[test]
fn builds_from_file() {
    let file = write_snapshot(SNAPSHOT);
    let source = SnapshotSource::from_path(file.path()).unwrap();

    let deck = build_deck(&source, "OP14-079", "aggro").unwrap();
    assert_eq!(deck.total_copies(), 8);
    assert_eq!(deck.quantity("OP14-100"), 4);
    assert_eq!(deck.quantity("OP14-130"), 4);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = SnapshotSource::from_path(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, SourceError::Io(_)));
}

#[test]
fn invalid_json_is_parse_error() {
    let file = write_snapshot("{ not json");
    let err = SnapshotSource::from_path(file.path()).unwrap_err();
    assert!(matches!(err, SourceError::Parse(_)));
}

//! Snapshot tests - observer view and serde round trip

use tetris_lineup::core::{ActionRecord, GameSession, RandomSupplier, SessionSnapshot};
use tetris_lineup::types::{ActionKind, Difficulty, Piece, Shape};

#[test]
fn test_snapshot_reflects_session_state() {
    let mut session: GameSession<RandomSupplier> =
        GameSession::new(RandomSupplier::new(12345), Difficulty::Master);
    session.reserve().unwrap();
    session.play().unwrap();

    let snapshot = session.snapshot();
    assert_eq!(snapshot.upcoming.len(), 5);
    assert_eq!(snapshot.reserve.len(), 1);
    assert_eq!(snapshot.history_len, 2);
    assert_eq!(snapshot.turn, 2);
    assert_eq!(snapshot.difficulty, Difficulty::Master);
    assert_eq!(snapshot.piece_count(), 6);
}

#[test]
fn test_snapshot_serde_round_trip() {
    let mut session: GameSession<RandomSupplier> =
        GameSession::new(RandomSupplier::new(42), Difficulty::Adventurer);
    session.reserve().unwrap();

    let snapshot = session.snapshot();
    let json = serde_json::to_string(&snapshot).unwrap();
    let parsed: SessionSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, snapshot);
}

#[test]
fn test_action_record_serializes_with_label_fields() {
    let record = ActionRecord {
        kind: ActionKind::Swapped,
        queue_front: Some(Piece::new(Shape::T, 7)),
        stack_top: None,
        timestamp: 3,
    };

    let json = serde_json::to_string(&record).unwrap();
    let parsed: ActionRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, record);
    assert_eq!(parsed.kind.as_str(), "swapped");
}

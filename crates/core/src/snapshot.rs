//! Observer view of a session, for presenters and tests

use serde::{Deserialize, Serialize};
use tetris_lineup_types::{Difficulty, Piece};

/// Point-in-time copy of the session state.
///
/// Snapshots are plain values: comparing two of them is how callers check
/// that a rejected command really had no side effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Queue contents, front to back
    pub upcoming: Vec<Piece>,
    /// Stack contents, top to bottom
    pub reserve: Vec<Piece>,
    pub history_len: usize,
    pub turn: u32,
    pub difficulty: Difficulty,
}

impl SessionSnapshot {
    /// Total pieces currently held across both containers
    pub fn piece_count(&self) -> usize {
        self.upcoming.len() + self.reserve.len()
    }
}

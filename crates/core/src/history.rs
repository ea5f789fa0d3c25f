//! History log - bounded LIFO of action records, oldest-evicting when full
//!
//! This is a ring-buffer-backed stack, not a plain bounded stack: recording
//! into a full log evicts the oldest entry and always succeeds, while
//! `pop_last` removes the newest. Records hold copies of the piece
//! snapshots, so later container mutation never rewrites history.

use arrayvec::ArrayVec;
use serde::{Deserialize, Serialize};
use tetris_lineup_types::{ActionKind, Piece, HISTORY_CAPACITY};

use crate::error::{LineupError, Result};

/// One recorded action: label plus the queue-front/stack-top snapshots
/// taken when the action was logged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub kind: ActionKind,
    pub queue_front: Option<Piece>,
    pub stack_top: Option<Piece>,
    /// Monotonic turn number at which the action was recorded
    pub timestamp: u32,
}

/// Bounded action history (default capacity 10)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HistoryLog<const N: usize = HISTORY_CAPACITY> {
    entries: ArrayVec<ActionRecord, N>,
}

impl<const N: usize> HistoryLog<N> {
    /// Create an empty log
    pub fn new() -> Self {
        Self {
            entries: ArrayVec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.is_full()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn capacity(&self) -> usize {
        N
    }

    /// Record an action at the logical top.
    ///
    /// Never errors: when the log is full the oldest entry is evicted
    /// first, so the count saturates at capacity.
    pub fn record(
        &mut self,
        kind: ActionKind,
        queue_front: Option<Piece>,
        stack_top: Option<Piece>,
        timestamp: u32,
    ) {
        if self.entries.is_full() {
            self.entries.remove(0);
        }
        self.entries.push(ActionRecord {
            kind,
            queue_front,
            stack_top,
            timestamp,
        });
    }

    /// Remove and return the most recently recorded action.
    ///
    /// Fails with [`LineupError::Empty`] when the log is empty.
    pub fn pop_last(&mut self) -> Result<ActionRecord> {
        self.entries
            .pop()
            .ok_or(LineupError::Empty("history log"))
    }

    /// Most recent record without removing it
    pub fn latest(&self) -> Option<&ActionRecord> {
        self.entries.last()
    }

    /// Records newest first, the order a history view prints them
    pub fn iter_recent_first(&self) -> impl Iterator<Item = &ActionRecord> {
        self.entries.iter().rev()
    }
}

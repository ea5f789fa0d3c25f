//! Game session - orchestrates the upcoming queue, reserve stack, and
//! history log
//!
//! Each command is atomic from the caller's perspective: it either fully
//! completes and records one history entry, or it has no effect and returns
//! a typed error. Undo is report-only: it pops and returns the newest
//! history record without restoring container contents.

use arrayvec::ArrayVec;
use tracing::debug;

use tetris_lineup_types::{
    ActionKind, Command, Difficulty, Piece, HISTORY_CAPACITY, QUEUE_CAPACITY, RESERVE_CAPACITY,
};

use crate::error::{LineupError, Result};
use crate::history::{ActionRecord, HistoryLog};
use crate::reserve::ReserveStack;
use crate::snapshot::SessionSnapshot;
use crate::supply::PieceSupplier;
use crate::upcoming::UpcomingQueue;

/// Success payload of an applied command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Front piece played, replacement enqueued at the back
    Played { played: Piece, refill: Piece },
    /// Front piece moved to the reserve stack, replacement enqueued
    Reserved { reserved: Piece, refill: Piece },
    /// Top of the reserve stack consumed; the queue is untouched
    UsedReserved { used: Piece },
    /// Queue front and stack top exchanged containers
    Swapped {
        /// Old queue front, now the stack top
        to_reserve: Piece,
        /// Old stack top, now at the back of the queue
        to_upcoming: Piece,
    },
    /// Full content exchange between queue and stack
    Inverted {
        /// Pieces moved from the queue into the stack
        to_reserve: usize,
        /// Pieces moved from the stack into the queue
        to_upcoming: usize,
    },
    /// Newest history record, reported as the state before that action
    Undone(ActionRecord),
}

/// Single-actor session owning the three containers and the piece supplier.
///
/// `QN`/`RN`/`HN` are the queue, reserve, and history capacities; the
/// defaults match the standard game. The enabled command set comes from
/// the [`Difficulty`] tier.
#[derive(Debug, Clone)]
pub struct GameSession<
    S,
    const QN: usize = QUEUE_CAPACITY,
    const RN: usize = RESERVE_CAPACITY,
    const HN: usize = HISTORY_CAPACITY,
> {
    upcoming: UpcomingQueue<QN>,
    reserve: ReserveStack<RN>,
    history: HistoryLog<HN>,
    supplier: S,
    difficulty: Difficulty,
    /// Monotonic turn counter, used as the history record timestamp
    turn: u32,
}

impl<S: PieceSupplier, const QN: usize, const RN: usize, const HN: usize>
    GameSession<S, QN, RN, HN>
{
    /// Create a session with a queue filled to capacity from the supplier,
    /// an empty reserve stack, and an empty history log
    pub fn new(mut supplier: S, difficulty: Difficulty) -> Self {
        let upcoming = UpcomingQueue::filled_from(&mut supplier);
        Self {
            upcoming,
            reserve: ReserveStack::new(),
            history: HistoryLog::new(),
            supplier,
            difficulty,
            turn: 0,
        }
    }

    pub fn upcoming(&self) -> &UpcomingQueue<QN> {
        &self.upcoming
    }

    pub fn reserve_stack(&self) -> &ReserveStack<RN> {
        &self.reserve
    }

    pub fn history(&self) -> &HistoryLog<HN> {
        &self.history
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Observer view of the session state
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            upcoming: self.upcoming.iter().collect(),
            reserve: self.reserve.iter().collect(),
            history_len: self.history.len(),
            turn: self.turn,
            difficulty: self.difficulty,
        }
    }

    /// Apply one command, gated by the difficulty tier.
    ///
    /// Disabled commands fail with [`LineupError::Disabled`] and have no
    /// side effect.
    pub fn apply(&mut self, command: Command) -> Result<Outcome> {
        if !self.difficulty.allows(command) {
            debug!(command = command.as_str(), "command disabled at this tier");
            return Err(LineupError::Disabled(command));
        }
        let result = match command {
            Command::Play => self.play(),
            Command::Reserve => self.reserve(),
            Command::UseReserved => self.use_reserved(),
            Command::Swap => self.swap(),
            Command::Invert => self.invert(),
            Command::Undo => self.undo(),
        };
        if let Err(err) = &result {
            debug!(command = command.as_str(), %err, "command rejected");
        }
        result
    }

    /// Play the piece at the queue front and refill the queue with one
    /// supplier-generated piece
    pub fn play(&mut self) -> Result<Outcome> {
        let played = self.upcoming.dequeue()?;
        let refill = self.supplier.next_piece();
        // Cannot fail: the dequeue above freed a slot
        self.upcoming.enqueue(refill)?;
        self.log_current(ActionKind::Played);
        debug!(%played, %refill, "played piece from the upcoming queue");
        Ok(Outcome::Played { played, refill })
    }

    /// Move the queue front onto the reserve stack and refill the queue
    pub fn reserve(&mut self) -> Result<Outcome> {
        if self.upcoming.is_empty() || self.reserve.is_full() {
            return Err(LineupError::Precondition(
                "reserve requires a non-empty queue and a non-full reserve stack",
            ));
        }
        let reserved = self.upcoming.dequeue()?;
        self.reserve.push(reserved)?;
        let refill = self.supplier.next_piece();
        self.upcoming.enqueue(refill)?;
        self.log_current(ActionKind::Reserved);
        debug!(%reserved, %refill, "reserved piece from the upcoming queue");
        Ok(Outcome::Reserved { reserved, refill })
    }

    /// Consume the top of the reserve stack; the queue is untouched
    pub fn use_reserved(&mut self) -> Result<Outcome> {
        let used = self.reserve.pop()?;
        self.log_current(ActionKind::UsedReserved);
        debug!(%used, "used piece from the reserve stack");
        Ok(Outcome::UsedReserved { used })
    }

    /// Exchange the queue front with the stack top.
    ///
    /// The stack piece lands at the back of the queue (one dequeue is
    /// matched by one enqueue, one pop by one push, so both counts are
    /// unchanged). The history snapshots are the two pieces as they were
    /// before the swap.
    pub fn swap(&mut self) -> Result<Outcome> {
        if self.upcoming.is_empty() || self.reserve.is_empty() {
            return Err(LineupError::Precondition(
                "swap requires a non-empty queue and a non-empty reserve stack",
            ));
        }
        let from_queue = self.upcoming.dequeue()?;
        let from_reserve = self.reserve.pop()?;
        self.upcoming.enqueue(from_reserve)?;
        self.reserve.push(from_queue)?;
        self.log(ActionKind::Swapped, Some(from_queue), Some(from_reserve));
        debug!(%from_queue, %from_reserve, "swapped queue front with stack top");
        Ok(Outcome::Swapped {
            to_reserve: from_queue,
            to_upcoming: from_reserve,
        })
    }

    /// Full content exchange between queue and stack.
    ///
    /// The queue is drained into a temporary LIFO and the stack into a
    /// temporary FIFO, then both temporaries drain back into the opposite
    /// container. Afterwards the stack reads top-to-bottom as the old
    /// queue front-to-back, and the queue dequeues in the old stack pop
    /// order; a second invert restores the original state.
    ///
    /// The exchange is all-or-nothing, so both contents must fit the
    /// opposite container's capacity.
    pub fn invert(&mut self) -> Result<Outcome> {
        if self.upcoming.is_empty() && self.reserve.is_empty() {
            return Err(LineupError::Precondition(
                "invert requires at least one non-empty container",
            ));
        }
        if self.upcoming.len() > RN || self.reserve.len() > QN {
            return Err(LineupError::Precondition(
                "invert requires each container's contents to fit the other's capacity",
            ));
        }
        let to_reserve = self.upcoming.len();
        let to_upcoming = self.reserve.len();

        let mut queue_pieces: ArrayVec<Piece, QN> = ArrayVec::new();
        while !self.upcoming.is_empty() {
            queue_pieces.push(self.upcoming.dequeue()?);
        }
        let mut stack_pieces: ArrayVec<Piece, RN> = ArrayVec::new();
        while !self.reserve.is_empty() {
            stack_pieces.push(self.reserve.pop()?);
        }
        while let Some(piece) = queue_pieces.pop() {
            self.reserve.push(piece)?;
        }
        for piece in stack_pieces {
            self.upcoming.enqueue(piece)?;
        }

        self.log_current(ActionKind::Inverted);
        debug!(to_reserve, to_upcoming, "inverted queue with stack");
        Ok(Outcome::Inverted {
            to_reserve,
            to_upcoming,
        })
    }

    /// Pop the newest history record and report it.
    ///
    /// Report-only: the action's container mutation is not reversed.
    pub fn undo(&mut self) -> Result<Outcome> {
        let record = self.history.pop_last()?;
        debug!(action = %record.kind, "reported last action; state not restored");
        Ok(Outcome::Undone(record))
    }

    fn log(&mut self, kind: ActionKind, queue_front: Option<Piece>, stack_top: Option<Piece>) {
        self.turn += 1;
        self.history.record(kind, queue_front, stack_top, self.turn);
    }

    /// Record with snapshots of the containers as they stand now
    fn log_current(&mut self, kind: ActionKind) {
        let queue_front = self.upcoming.peek_front();
        let stack_top = self.reserve.peek_top();
        self.log(kind, queue_front, stack_top);
    }
}

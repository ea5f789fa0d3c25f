//! Core lineup logic - pure, deterministic, and testable
//!
//! This crate contains the bounded containers and the session that drives
//! them. It has no dependencies on UI or I/O, making it:
//!
//! - **Deterministic**: the same supplier seed produces identical sessions
//! - **Testable**: every command is a synchronous call with a typed result
//! - **Bounded**: all storage is fixed-capacity; nothing grows at runtime
//!
//! # Module Structure
//!
//! - [`upcoming`]: circular-buffer FIFO of pieces waiting to be played
//! - [`reserve`]: bounded LIFO of pieces set aside for later
//! - [`history`]: bounded, oldest-evicting log of past actions
//! - [`session`]: the command surface (play, reserve, use-reserved, swap,
//!   invert, undo) composing the three containers
//! - [`supply`]: piece supplier trait and the seeded LCG implementation
//! - [`snapshot`]: observer view consumed by presenters and tests
//!
//! # Example
//!
//! ```
//! use tetris_lineup_core::types::{Command, Difficulty};
//! use tetris_lineup_core::{GameSession, Outcome, RandomSupplier};
//!
//! let mut session: GameSession<RandomSupplier> =
//!     GameSession::new(RandomSupplier::new(12345), Difficulty::Master);
//!
//! // The queue starts full; playing consumes the front and refills it.
//! let outcome = session.apply(Command::Play).unwrap();
//! assert!(matches!(outcome, Outcome::Played { .. }));
//! assert!(session.upcoming().is_full());
//! ```

pub mod error;
pub mod history;
pub mod reserve;
pub mod session;
pub mod snapshot;
pub mod supply;
pub mod upcoming;

pub use tetris_lineup_types as types;

// Re-export commonly used types for convenience
pub use error::{LineupError, Result};
pub use history::{ActionRecord, HistoryLog};
pub use reserve::ReserveStack;
pub use session::{GameSession, Outcome};
pub use snapshot::SessionSnapshot;
pub use supply::{PieceSupplier, RandomSupplier, SimpleRng};
pub use upcoming::UpcomingQueue;

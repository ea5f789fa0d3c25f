//! Error types for lineup operations

use tetris_lineup_types::Command;
use thiserror::Error;

/// Result type alias for lineup operations
pub type Result<T> = std::result::Result<T, LineupError>;

/// Errors reported by containers and session commands.
///
/// Every error is recoverable: the failing operation leaves the containers
/// and the history log untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LineupError {
    /// Operation requires a non-empty container
    #[error("{0} is empty")]
    Empty(&'static str),

    /// Operation requires free capacity and none exists
    #[error("{0} is full")]
    Capacity(&'static str),

    /// Composite action precondition across two containers is violated
    #[error("precondition failed: {0}")]
    Precondition(&'static str),

    /// Command is not enabled at the session's difficulty tier
    #[error("command `{}` is not enabled at this difficulty", .0.as_str())]
    Disabled(Command),
}

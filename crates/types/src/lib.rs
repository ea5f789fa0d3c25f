//! Core types shared across the lineup manager
//!
//! Pure data types with no I/O: piece values, command/difficulty enums,
//! and the container capacity constants.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upcoming queue capacity (pieces waiting to be played).
pub const QUEUE_CAPACITY: usize = 5;

/// Reserve stack capacity (pieces set aside for later).
pub const RESERVE_CAPACITY: usize = 3;

/// History log capacity (most recent actions kept, oldest evicted).
pub const HISTORY_CAPACITY: usize = 10;

/// Piece shapes produced by the supplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    I,
    O,
    T,
    L,
}

impl Shape {
    /// All shapes, in supplier draw order
    pub const ALL: [Shape; 4] = [Shape::I, Shape::O, Shape::T, Shape::L];

    /// Parse shape from a single character (case-insensitive)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'I' => Some(Shape::I),
            'O' => Some(Shape::O),
            'T' => Some(Shape::T),
            'L' => Some(Shape::L),
            _ => None,
        }
    }

    /// Convert to the display character
    pub fn as_char(&self) -> char {
        match self {
            Shape::I => 'I',
            Shape::O => 'O',
            Shape::T => 'T',
            Shape::L => 'L',
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// An immutable game piece: shape tag plus a unique id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub shape: Shape,
    pub id: u32,
}

impl Piece {
    pub fn new(shape: Shape, id: u32) -> Self {
        Self { shape, id }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.shape, self.id)
    }
}

/// Session commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    Play,
    Reserve,
    UseReserved,
    Swap,
    Invert,
    Undo,
}

impl Command {
    /// Parse command from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "play" => Some(Command::Play),
            "reserve" => Some(Command::Reserve),
            "usereserved" => Some(Command::UseReserved),
            "swap" => Some(Command::Swap),
            "invert" => Some(Command::Invert),
            "undo" => Some(Command::Undo),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Play => "play",
            Command::Reserve => "reserve",
            Command::UseReserved => "useReserved",
            Command::Swap => "swap",
            Command::Invert => "invert",
            Command::Undo => "undo",
        }
    }
}

/// Labels recorded in the history log, one per mutating command
/// (`Undo` is report-only and never recorded)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Played,
    Reserved,
    UsedReserved,
    Swapped,
    Inverted,
}

impl ActionKind {
    /// Human-readable label
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionKind::Played => "played",
            ActionKind::Reserved => "reserved",
            ActionKind::UsedReserved => "used reserved",
            ActionKind::Swapped => "swapped",
            ActionKind::Inverted => "inverted",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Difficulty tiers, each enabling a subset of the commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Queue only: play from the front
    Novice,
    /// Adds the reserve stack: reserve and use-reserved
    Adventurer,
    /// Full command set: swap, invert, and undo
    Master,
}

impl Difficulty {
    /// Whether a command is enabled at this tier
    pub fn allows(&self, command: Command) -> bool {
        match self {
            Difficulty::Novice => matches!(command, Command::Play),
            Difficulty::Adventurer => matches!(
                command,
                Command::Play | Command::Reserve | Command::UseReserved
            ),
            Difficulty::Master => true,
        }
    }

    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "novice" => Some(Difficulty::Novice),
            "adventurer" => Some(Difficulty::Adventurer),
            "master" => Some(Difficulty::Master),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Novice => "novice",
            Difficulty::Adventurer => "adventurer",
            Difficulty::Master => "master",
        }
    }
}

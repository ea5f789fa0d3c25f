//! Supply module - random piece generation
//!
//! The session treats the supplier as an opaque, infallible source of fresh
//! pieces. `RandomSupplier` draws shapes from a simple LCG and hands out
//! monotonically increasing ids, so every generated piece is unique.

use tetris_lineup_types::{Piece, Shape};

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Source of fresh pieces consumed by the session.
///
/// Infinite and infallible: every call yields a new piece.
pub trait PieceSupplier {
    fn next_piece(&mut self) -> Piece;
}

/// Closures can stand in as suppliers, which keeps scripted piece
/// sequences in tests to a one-liner.
impl<F: FnMut() -> Piece> PieceSupplier for F {
    fn next_piece(&mut self) -> Piece {
        self()
    }
}

/// Seeded supplier: uniform shape draw, fresh ids starting at 1
#[derive(Debug, Clone)]
pub struct RandomSupplier {
    rng: SimpleRng,
    next_id: u32,
}

impl RandomSupplier {
    /// Create a new supplier with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
            next_id: 1,
        }
    }
}

impl PieceSupplier for RandomSupplier {
    fn next_piece(&mut self) -> Piece {
        let shape = Shape::ALL[self.rng.next_range(Shape::ALL.len() as u32) as usize];
        let id = self.next_id;
        self.next_id += 1;
        Piece::new(shape, id)
    }
}

impl Default for RandomSupplier {
    fn default() -> Self {
        Self::new(1)
    }
}

//! Reserve stack - bounded LIFO of pieces set aside for later use

use arrayvec::ArrayVec;
use tetris_lineup_types::{Piece, RESERVE_CAPACITY};

use crate::error::{LineupError, Result};

/// Bounded LIFO of reserved pieces (default capacity 3)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReserveStack<const N: usize = RESERVE_CAPACITY> {
    pieces: ArrayVec<Piece, N>,
}

impl<const N: usize> ReserveStack<N> {
    /// Create an empty stack
    pub fn new() -> Self {
        Self {
            pieces: ArrayVec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.pieces.is_full()
    }

    pub fn len(&self) -> usize {
        self.pieces.len()
    }

    pub fn capacity(&self) -> usize {
        N
    }

    /// Push a piece on top.
    ///
    /// Fails with [`LineupError::Capacity`] when full; the stack is left
    /// unchanged.
    pub fn push(&mut self, piece: Piece) -> Result<()> {
        self.pieces
            .try_push(piece)
            .map_err(|_| LineupError::Capacity("reserve stack"))
    }

    /// Remove and return the top piece.
    ///
    /// Fails with [`LineupError::Empty`] when empty.
    pub fn pop(&mut self) -> Result<Piece> {
        self.pieces
            .pop()
            .ok_or(LineupError::Empty("reserve stack"))
    }

    /// Top piece without removing it
    pub fn peek_top(&self) -> Option<Piece> {
        self.pieces.last().copied()
    }

    /// Pieces in pop order, top to bottom
    pub fn iter(&self) -> impl Iterator<Item = Piece> + '_ {
        self.pieces.iter().rev().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tetris_lineup_types::Shape;

    fn piece(id: u32) -> Piece {
        Piece::new(Shape::L, id)
    }

    #[test]
    fn test_new_stack_is_empty() {
        let stack: ReserveStack<3> = ReserveStack::new();
        assert!(stack.is_empty());
        assert!(!stack.is_full());
        assert_eq!(stack.len(), 0);
        assert_eq!(stack.capacity(), 3);
        assert_eq!(stack.peek_top(), None);
    }

    #[test]
    fn test_lifo_order() {
        let mut stack: ReserveStack<3> = ReserveStack::new();
        stack.push(piece(1)).unwrap();
        stack.push(piece(2)).unwrap();
        stack.push(piece(3)).unwrap();

        assert_eq!(stack.pop().unwrap(), piece(3));
        assert_eq!(stack.pop().unwrap(), piece(2));
        assert_eq!(stack.pop().unwrap(), piece(1));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_push_full_fails_without_side_effect() {
        let mut stack: ReserveStack<2> = ReserveStack::new();
        stack.push(piece(1)).unwrap();
        stack.push(piece(2)).unwrap();

        let err = stack.push(piece(3)).unwrap_err();
        assert_eq!(err, LineupError::Capacity("reserve stack"));
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.peek_top(), Some(piece(2)));
    }

    #[test]
    fn test_pop_empty_fails() {
        let mut stack: ReserveStack<3> = ReserveStack::new();
        assert_eq!(
            stack.pop().unwrap_err(),
            LineupError::Empty("reserve stack")
        );
    }

    #[test]
    fn test_iter_top_to_bottom() {
        let mut stack: ReserveStack<3> = ReserveStack::new();
        stack.push(piece(1)).unwrap();
        stack.push(piece(2)).unwrap();

        assert_eq!(stack.iter().collect::<Vec<_>>(), vec![piece(2), piece(1)]);
    }
}

//! Upcoming queue - bounded FIFO of pieces waiting to be played
//!
//! Circular buffer over a fixed arena: a front index that wraps modulo the
//! capacity plus a count. The count is the sole source of truth for
//! empty/full; front alone is ambiguous at count 0 and count N.

use tetris_lineup_types::{Piece, QUEUE_CAPACITY};

use crate::error::{LineupError, Result};
use crate::supply::PieceSupplier;

/// Bounded FIFO of upcoming pieces (default capacity 5)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingQueue<const N: usize = QUEUE_CAPACITY> {
    storage: [Option<Piece>; N],
    front: usize,
    count: usize,
}

impl<const N: usize> UpcomingQueue<N> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            storage: [None; N],
            front: 0,
            count: 0,
        }
    }

    /// Create a queue filled to capacity from the supplier
    pub fn filled_from<S: PieceSupplier>(supplier: &mut S) -> Self {
        let mut queue = Self::new();
        queue.fill_from(supplier);
        queue
    }

    /// Top the queue up to capacity from the supplier
    pub fn fill_from<S: PieceSupplier>(&mut self, supplier: &mut S) {
        while !self.is_full() {
            // Cannot fail: loop guard guarantees free capacity
            let _ = self.enqueue(supplier.next_piece());
        }
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == N
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn capacity(&self) -> usize {
        N
    }

    /// Index one past the last occupied slot, wrapping modulo capacity
    fn back(&self) -> usize {
        (self.front + self.count) % N
    }

    /// Append a piece at the back.
    ///
    /// Fails with [`LineupError::Capacity`] when full; the queue is left
    /// unchanged.
    pub fn enqueue(&mut self, piece: Piece) -> Result<()> {
        if self.is_full() {
            return Err(LineupError::Capacity("upcoming queue"));
        }
        let back = self.back();
        self.storage[back] = Some(piece);
        self.count += 1;
        Ok(())
    }

    /// Remove and return the piece at the front.
    ///
    /// Fails with [`LineupError::Empty`] when empty.
    pub fn dequeue(&mut self) -> Result<Piece> {
        let piece = self.storage[self.front]
            .take()
            .ok_or(LineupError::Empty("upcoming queue"))?;
        self.front = (self.front + 1) % N;
        self.count -= 1;
        Ok(piece)
    }

    /// Piece at the front without removing it
    pub fn peek_front(&self) -> Option<Piece> {
        self.storage[self.front]
    }

    /// Pieces in dequeue order, front to back
    pub fn iter(&self) -> impl Iterator<Item = Piece> + '_ {
        // The `count` slots starting at `front` are occupied by construction
        (0..self.count).filter_map(move |i| self.storage[(self.front + i) % N])
    }
}

impl<const N: usize> Default for UpcomingQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tetris_lineup_types::Shape;

    fn piece(id: u32) -> Piece {
        Piece::new(Shape::T, id)
    }

    #[test]
    fn test_new_queue_is_empty() {
        let queue: UpcomingQueue<5> = UpcomingQueue::new();
        assert!(queue.is_empty());
        assert!(!queue.is_full());
        assert_eq!(queue.len(), 0);
        assert_eq!(queue.capacity(), 5);
        assert_eq!(queue.peek_front(), None);
    }

    #[test]
    fn test_fifo_order() {
        let mut queue: UpcomingQueue<5> = UpcomingQueue::new();
        queue.enqueue(piece(1)).unwrap();
        queue.enqueue(piece(2)).unwrap();
        queue.enqueue(piece(3)).unwrap();

        assert_eq!(queue.dequeue().unwrap(), piece(1));
        assert_eq!(queue.dequeue().unwrap(), piece(2));
        assert_eq!(queue.dequeue().unwrap(), piece(3));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_enqueue_full_fails_without_side_effect() {
        let mut queue: UpcomingQueue<2> = UpcomingQueue::new();
        queue.enqueue(piece(1)).unwrap();
        queue.enqueue(piece(2)).unwrap();

        let err = queue.enqueue(piece(3)).unwrap_err();
        assert_eq!(err, LineupError::Capacity("upcoming queue"));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.iter().collect::<Vec<_>>(), vec![piece(1), piece(2)]);
    }

    #[test]
    fn test_dequeue_empty_fails() {
        let mut queue: UpcomingQueue<3> = UpcomingQueue::new();
        assert_eq!(
            queue.dequeue().unwrap_err(),
            LineupError::Empty("upcoming queue")
        );
    }

    #[test]
    fn test_wraparound_indices() {
        let mut queue: UpcomingQueue<3> = UpcomingQueue::new();

        // Cycle enough times that front/back wrap several times
        queue.enqueue(piece(0)).unwrap();
        for i in 1..10 {
            queue.enqueue(piece(i)).unwrap();
            assert_eq!(queue.dequeue().unwrap(), piece(i - 1));
        }
        assert_eq!(queue.dequeue().unwrap(), piece(9));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_filled_from_supplier() {
        let mut id = 0;
        let mut supplier = move || {
            id += 1;
            piece(id)
        };
        let queue: UpcomingQueue<5> = UpcomingQueue::filled_from(&mut supplier);

        assert!(queue.is_full());
        assert_eq!(queue.peek_front(), Some(piece(1)));
        assert_eq!(
            queue.iter().collect::<Vec<_>>(),
            vec![piece(1), piece(2), piece(3), piece(4), piece(5)]
        );
    }
}

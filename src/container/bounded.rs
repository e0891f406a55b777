//! Fixed-capacity ordered sequence and its native cursor

use crate::cursor::Cursor;

use super::ContainerError;

/// Ordered sequence with capacity fixed at construction.
///
/// The backing store is preallocated once; the logical size grows by
/// [`push`](BoundedSeq::push) and never exceeds the capacity. Appending
/// past capacity is a programmer error: `push` panics, while
/// [`try_push`](BoundedSeq::try_push) reports
/// [`ContainerError::CapacityExceeded`] for callers that want a
/// recoverable signal.
#[derive(Debug)]
pub struct BoundedSeq<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> BoundedSeq<T> {
    /// Create an empty sequence with the given fixed capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            items: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Fixed capacity chosen at construction.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Current logical size (always `<= capacity`).
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when no elements have been appended yet.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True once the logical size has reached the capacity.
    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Append an element.
    ///
    /// # Panics
    ///
    /// Panics if the sequence is already full.
    pub fn push(&mut self, item: T) {
        assert!(
            !self.is_full(),
            "push past fixed capacity ({} elements)",
            self.capacity
        );
        self.items.push(item);
    }

    /// Append an element, reporting an error instead of panicking when the
    /// sequence is full.
    pub fn try_push(&mut self, item: T) -> Result<(), ContainerError> {
        if self.is_full() {
            return Err(ContainerError::CapacityExceeded {
                capacity: self.capacity,
            });
        }
        self.items.push(item);
        Ok(())
    }

    /// Borrow the element at `index`, if in range.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Native cursor over this sequence, positioned at the first element.
    ///
    /// The cursor borrows the sequence; the sequence cannot be mutated
    /// while the cursor is alive.
    pub fn cursor(&self) -> BoundedCursor<'_, T> {
        BoundedCursor { seq: self, pos: 0 }
    }
}

/// Positional cursor over a [`BoundedSeq`].
///
/// Holds a borrow of the sequence and an index in `[0, len]`; index `len`
/// means exhausted. The size is read live at each
/// [`is_exhausted`](Cursor::is_exhausted) call, not snapshotted.
#[derive(Debug)]
pub struct BoundedCursor<'a, T> {
    seq: &'a BoundedSeq<T>,
    pos: usize,
}

impl<T> Cursor for BoundedCursor<'_, T> {
    type Item = T;

    fn reset(&mut self) {
        self.pos = 0;
    }

    fn advance(&mut self) {
        if self.pos < self.seq.len() {
            self.pos += 1;
        }
    }

    fn is_exhausted(&self) -> bool {
        self.pos >= self.seq.len()
    }

    fn current(&self) -> &T {
        assert!(
            !self.is_exhausted(),
            "current() called on exhausted bounded cursor"
        );
        &self.seq.items[self.pos]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_visits_each_position_once_in_order() {
        let mut seq = BoundedSeq::new(5);
        for n in 0..5 {
            seq.push(n);
        }

        let mut cursor = seq.cursor();
        cursor.reset();
        let mut visited = Vec::new();
        while !cursor.is_exhausted() {
            visited.push(*cursor.current());
            cursor.advance();
        }
        assert_eq!(visited, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn exhausted_after_len_advances() {
        let mut seq = BoundedSeq::new(3);
        seq.push('a');
        seq.push('b');

        let mut cursor = seq.cursor();
        cursor.reset();
        cursor.advance();
        cursor.advance();
        assert!(cursor.is_exhausted());
    }

    #[test]
    fn advance_past_end_is_noop() {
        let mut seq = BoundedSeq::new(2);
        seq.push(1);

        let mut cursor = seq.cursor();
        cursor.reset();
        cursor.advance();
        assert!(cursor.is_exhausted());
        cursor.advance();
        assert!(cursor.is_exhausted());
    }

    #[test]
    #[should_panic(expected = "push past fixed capacity")]
    fn push_past_capacity_panics() {
        let mut seq = BoundedSeq::new(1);
        seq.push(0);
        seq.push(1);
    }

    #[test]
    fn try_push_reports_capacity() {
        let mut seq = BoundedSeq::new(1);
        assert_eq!(seq.try_push(0), Ok(()));
        assert_eq!(
            seq.try_push(1),
            Err(ContainerError::CapacityExceeded { capacity: 1 })
        );
        assert_eq!(seq.len(), 1);
    }

    #[test]
    #[should_panic(expected = "exhausted bounded cursor")]
    fn current_on_exhausted_cursor_panics() {
        let seq: BoundedSeq<u8> = BoundedSeq::new(4);
        let cursor = seq.cursor();
        let _ = cursor.current();
    }
}

//! Growable stack container and its native cursor

use crate::cursor::Cursor;

/// Growable ordered collection with stack semantics.
///
/// [`push`](Stack::push) and [`pop`](Stack::pop) operate on the top; the
/// native cursor traverses in insertion order, bottom of the stack first.
/// No capacity bound.
#[derive(Debug)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Number of elements currently held.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the stack holds no elements.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Push an element onto the top.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove and return the top element, if any.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Borrow the top element, if any.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Borrow the element at `index` (0 = bottom), if in range.
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Native cursor over this stack, positioned at the first element.
    pub fn cursor(&self) -> StackCursor<'_, T> {
        StackCursor {
            stack: self,
            pos: 0,
        }
    }
}

/// Positional cursor over a [`Stack`], yielding insertion order.
///
/// Holds a borrow of the stack and an index in `[0, len]`; index `len`
/// means exhausted. The size is read live, not snapshotted.
#[derive(Debug)]
pub struct StackCursor<'a, T> {
    stack: &'a Stack<T>,
    pos: usize,
}

impl<T> Cursor for StackCursor<'_, T> {
    type Item = T;

    fn reset(&mut self) {
        self.pos = 0;
    }

    fn advance(&mut self) {
        if self.pos < self.stack.len() {
            self.pos += 1;
        }
    }

    fn is_exhausted(&self) -> bool {
        self.pos >= self.stack.len()
    }

    fn current(&self) -> &T {
        assert!(
            !self.is_exhausted(),
            "current() called on exhausted stack cursor"
        );
        &self.stack.items[self.pos]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_yields_insertion_order() {
        let mut stack = Stack::new();
        stack.push("bottom");
        stack.push("middle");
        stack.push("top");

        let mut cursor = stack.cursor();
        cursor.reset();
        let mut visited = Vec::new();
        while !cursor.is_exhausted() {
            visited.push(*cursor.current());
            cursor.advance();
        }
        assert_eq!(visited, vec!["bottom", "middle", "top"]);
    }

    #[test]
    fn pop_returns_last_pushed() {
        let mut stack = Stack::new();
        stack.push(1);
        stack.push(2);
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn independent_cursors_share_one_stack() {
        let mut stack = Stack::new();
        stack.push(5);
        stack.push(6);

        let mut a = stack.cursor();
        let mut b = stack.cursor();
        a.reset();
        b.reset();
        a.advance();
        assert_eq!(*a.current(), 6);
        assert_eq!(*b.current(), 5);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut stack = Stack::new();
        stack.push(9);
        stack.push(10);

        let mut cursor = stack.cursor();
        cursor.reset();
        let once = *cursor.current();
        cursor.reset();
        cursor.reset();
        assert_eq!(*cursor.current(), once);
    }
}

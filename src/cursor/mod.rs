//! Cursor contract and traversal driver
//!
//! Every traversal object in this crate - native container cursors, the
//! foreign-container adapter, and filtering decorators - implements the
//! single [`Cursor`] trait. Consumers program against the trait and never
//! learn which concrete layers sit underneath.

mod driver;

pub use driver::drive;

/// Forward-only cursor over a sequence of borrowed elements.
///
/// State is an opaque position. A cursor never owns the elements it
/// yields; [`current`](Cursor::current) hands out borrowed access, so the
/// yielded view can never diverge from the backing store.
///
/// # Contract
///
/// - [`reset`](Cursor::reset) is idempotent and may be called any number
///   of times.
/// - [`advance`](Cursor::advance) on an already-exhausted cursor is a
///   no-op. Every implementation in this crate follows that policy.
/// - [`current`](Cursor::current) requires `!is_exhausted()`. Violating
///   the precondition is a programmer error and panics with a clear
///   message rather than returning stale data.
pub trait Cursor {
    /// Element type yielded by this cursor.
    type Item: ?Sized;

    /// Reposition to the first logical element.
    ///
    /// "First" is relative to any filtering layers above the backing
    /// store: a decorated cursor lands on the first *matching* element.
    fn reset(&mut self);

    /// Move to the next logical element. No-op once exhausted.
    fn advance(&mut self);

    /// True once no further element exists.
    fn is_exhausted(&self) -> bool;

    /// Borrow the element at the current position.
    ///
    /// # Panics
    ///
    /// Panics if the cursor is exhausted.
    fn current(&self) -> &Self::Item;
}

// Boxed cursors delegate to the inner object, so heterogeneous chains can
// be assembled behind `Box<dyn Cursor<Item = T>>` at runtime.
impl<C: Cursor + ?Sized> Cursor for Box<C> {
    type Item = C::Item;

    fn reset(&mut self) {
        (**self).reset();
    }

    fn advance(&mut self) {
        (**self).advance();
    }

    fn is_exhausted(&self) -> bool {
        (**self).is_exhausted()
    }

    fn current(&self) -> &Self::Item {
        (**self).current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::Stack;

    #[test]
    fn boxed_cursor_delegates_to_inner() {
        let mut stack = Stack::new();
        stack.push(7);
        stack.push(8);

        let mut boxed: Box<dyn Cursor<Item = i32> + '_> = Box::new(stack.cursor());
        boxed.reset();
        assert!(!boxed.is_exhausted());
        assert_eq!(*boxed.current(), 7);
        boxed.advance();
        assert_eq!(*boxed.current(), 8);
        boxed.advance();
        assert!(boxed.is_exhausted());
    }
}

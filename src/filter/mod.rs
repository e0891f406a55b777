//! Filtering decorator cursor
//!
//! Wraps any [`Cursor`] and narrows its sequence to the elements matching
//! a predicate, without copying or mutating the backing container. A
//! decorator is itself a cursor, so layers stack to arbitrary depth, each
//! one only tightening the sequence further.

use std::fmt;

use tracing::trace;

use crate::cursor::Cursor;

/// Cursor decorator that skips elements failing a predicate.
///
/// Exclusively owns its inner cursor: the inner cursor is moved in at
/// construction and dropped with the decorator, so releasing the outermost
/// handle releases the whole chain.
///
/// The predicate must be pure and cheap; it may be evaluated several times
/// per element across `reset`/`advance` boundaries.
///
/// # Invariant
///
/// After any `reset` or `advance`, the decorator is either exhausted or
/// positioned on an element satisfying the predicate - never on a
/// non-matching element. Skipping costs O(k) inner steps for k rejected
/// elements, O(n) worst case when nothing matches, at which point the
/// chain reports exhausted.
pub struct FilterCursor<C, P> {
    inner: C,
    predicate: P,
}

impl<C, P> FilterCursor<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    /// Wrap `inner`, taking ownership of it, filtering by `predicate`.
    ///
    /// The new decorator starts unpositioned; call
    /// [`reset`](Cursor::reset) (or hand it to the driver) before reading.
    pub fn new(inner: C, predicate: P) -> Self {
        Self { inner, predicate }
    }

    /// Unwrap the decorator, returning the inner cursor.
    pub fn into_inner(self) -> C {
        self.inner
    }

    /// Step the inner cursor forward until it is exhausted or positioned
    /// on a matching element. Zero steps when already on a match.
    fn skip_rejected(&mut self) {
        let mut skipped = 0usize;
        while !self.inner.is_exhausted() && !(self.predicate)(self.inner.current()) {
            self.inner.advance();
            skipped += 1;
        }
        if skipped > 0 {
            trace!(skipped, "filter skipped rejected elements");
        }
    }
}

impl<C, P> Cursor for FilterCursor<C, P>
where
    C: Cursor,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn reset(&mut self) {
        self.inner.reset();
        self.skip_rejected();
    }

    fn advance(&mut self) {
        if self.inner.is_exhausted() {
            return;
        }
        // Unconditional first step: the element after the current match
        // may itself fail the predicate, so progress must not depend on
        // the skip loop running.
        self.inner.advance();
        self.skip_rejected();
    }

    fn is_exhausted(&self) -> bool {
        self.inner.is_exhausted()
    }

    fn current(&self) -> &Self::Item {
        self.inner.current()
    }
}

impl<C, P> fmt::Debug for FilterCursor<C, P>
where
    C: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterCursor")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

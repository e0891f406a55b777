//! Generic traversal driver
//!
//! Walks any [`Cursor`] to completion, applying a per-element action. The
//! driver must not assume a concrete cursor type nor know whether filter
//! layers are present - this is the acceptance test for the polymorphism
//! contract.

use tracing::trace;

use super::Cursor;

/// Drive `cursor` from its first element to exhaustion, invoking `action`
/// once per yielded element, in traversal order.
///
/// The cursor is reset first, so the same cursor can be driven repeatedly.
/// Driving an empty (or fully filtered-out) cursor invokes the action zero
/// times and returns immediately.
pub fn drive<C, F>(cursor: &mut C, mut action: F)
where
    C: Cursor + ?Sized,
    F: FnMut(&C::Item),
{
    cursor.reset();
    let mut visited = 0usize;
    while !cursor.is_exhausted() {
        action(cursor.current());
        visited += 1;
        cursor.advance();
    }
    trace!(visited, "traversal complete");
}

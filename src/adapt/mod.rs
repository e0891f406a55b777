//! Foreign-container adapter cursor
//!
//! Bridges any already-iterable collection into the shared [`Cursor`]
//! contract without copying elements. The minimal protocol required of the
//! foreign container is the Rust-native one: a shared reference that is
//! `IntoIterator` over element borrows, which every std collection
//! (`LinkedList`, `VecDeque`, `BTreeSet`, ...) satisfies.

use std::fmt;

use crate::cursor::Cursor;

/// Cursor over a borrowed foreign collection.
///
/// Holds the source borrow, the source's live iterator handle, and a
/// cached current element. Pure protocol translation: no filtering, no
/// buffering, O(1) per operation, no allocation beyond construction. The
/// borrow guarantees the foreign container outlives the adapter.
pub struct IterAdapter<'a, C, T>
where
    C: ?Sized,
    T: ?Sized + 'a,
    &'a C: IntoIterator<Item = &'a T>,
{
    source: &'a C,
    iter: <&'a C as IntoIterator>::IntoIter,
    current: Option<&'a T>,
}

impl<'a, C, T> IterAdapter<'a, C, T>
where
    C: ?Sized,
    T: ?Sized + 'a,
    &'a C: IntoIterator<Item = &'a T>,
{
    /// Wrap a foreign collection, positioned on its first element.
    pub fn new(source: &'a C) -> Self {
        let mut iter = source.into_iter();
        let current = iter.next();
        Self {
            source,
            iter,
            current,
        }
    }
}

impl<'a, C, T> Cursor for IterAdapter<'a, C, T>
where
    C: ?Sized,
    T: ?Sized + 'a,
    &'a C: IntoIterator<Item = &'a T>,
{
    type Item = T;

    fn reset(&mut self) {
        // Re-acquire the source's start handle.
        self.iter = self.source.into_iter();
        self.current = self.iter.next();
    }

    fn advance(&mut self) {
        if self.current.is_some() {
            self.current = self.iter.next();
        }
    }

    fn is_exhausted(&self) -> bool {
        self.current.is_none()
    }

    fn current(&self) -> &T {
        match self.current {
            Some(item) => item,
            None => panic!("current() called on exhausted adapter cursor"),
        }
    }
}

impl<'a, C, T> fmt::Debug for IterAdapter<'a, C, T>
where
    C: ?Sized,
    T: ?Sized + 'a,
    &'a C: IntoIterator<Item = &'a T>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IterAdapter")
            .field("exhausted", &self.current.is_none())
            .finish_non_exhaustive()
    }
}

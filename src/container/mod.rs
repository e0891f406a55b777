//! Backing containers and their native cursors
//!
//! Two ordered containers back the traversal framework:
//! - [`BoundedSeq`]: preallocated store, capacity fixed at construction
//! - [`Stack`]: growable, push/pop at the top, traversed in insertion order
//!
//! Both own their elements outright and drop them when the container is
//! dropped. Their native cursors hold a shared borrow of the container, so
//! the borrow checker rejects mutation while a cursor is live.

mod bounded;
mod stack;

pub use bounded::{BoundedCursor, BoundedSeq};
pub use stack::{Stack, StackCursor};

use thiserror::Error;

/// Errors that can occur while growing a container.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContainerError {
    /// A bounded sequence was asked to hold more elements than its fixed
    /// capacity allows.
    #[error("capacity exceeded: bounded sequence is full at {capacity} elements")]
    CapacityExceeded {
        /// Fixed capacity of the sequence.
        capacity: usize,
    },
}

//! # Composable forward-only traversal
//!
//! This library implements a polymorphic cursor abstraction over
//! heterogeneous backing containers, plus stackable filtering decorators.
//!
//! ## Core Pieces
//!
//! 1. **Cursor contract**: one trait ([`Cursor`]) every traversal object
//!    implements: reset, advance, exhaustion query, current element
//! 2. **Native cursors**: positional cursors over the bounded sequence and
//!    the growable stack container
//! 3. **Adapter**: exposes any foreign iterable collection through the
//!    shared contract without copying elements
//! 4. **Filtering decorator**: wraps any cursor and skips elements failing
//!    a predicate; decorators nest to arbitrary depth
//! 5. **Traversal driver**: consumes any cursor, concrete type unknown
//!
//! Data flows one way: container → native cursor → optional adapter →
//! zero or more filter layers → driver. No layer copies or mutates the
//! backing container.
//!
//! ## Usage Example
//!
//! ```
//! use cursorkit::{drive, FilterCursor, Stack};
//!
//! let mut stack = Stack::new();
//! for n in [3, 14, 15, 9, 26] {
//!     stack.push(n);
//! }
//!
//! let mut evens = FilterCursor::new(stack.cursor(), |n: &i32| n % 2 == 0);
//! let mut seen = Vec::new();
//! drive(&mut evens, |n| seen.push(*n));
//! assert_eq!(seen, vec![14, 26]);
//! ```

#![warn(missing_docs, missing_debug_implementations)]
#![allow(clippy::new_without_default)]

// Core modules - each implements one layer of the traversal pipeline
pub mod adapt; // Foreign-container adapter cursor
pub mod container; // Bounded sequence and stack containers
pub mod cursor; // Cursor contract and traversal driver
pub mod device; // Demonstration domain (GPU fleet)
pub mod filter; // Filtering decorator cursor

// Re-exports for convenience
pub use adapt::IterAdapter;
pub use container::{BoundedCursor, BoundedSeq, ContainerError, Stack, StackCursor};
pub use cursor::{drive, Cursor};
pub use filter::FilterCursor;

//! Linear-sequence collections addressed by stable positions.
//!
//! The core of this crate is [`PositionalList`], a doubly-linked list that
//! hands out opaque [`Position`] handles instead of integer indices. The key
//! insight: separate *where an element lives* from *how it is addressed*.
//!
//! Index-addressed sequences renumber on every insertion and removal:
//!
//! ```text
//! Vec<T>          - O(1) access, but every index shifts on remove
//! VecDeque<T>     - same story at both ends
//! ```
//!
//! A position never shifts. It addresses its element for the element's whole
//! lifetime in the list, survives unrelated mutation, and dies permanently
//! the moment its element is removed — a stale handle is an
//! [`InvalidPosition`] error, never a different element:
//!
//! ```
//! use positional::PositionalList;
//!
//! let mut list = PositionalList::new();
//! let p = list.add_last(20);
//! list.add_first(10);            // p is unaffected
//! list.add_last(30);
//!
//! assert_eq!(list.get(p), Ok(&20));
//! assert_eq!(list.remove(p), Ok(20));
//! assert!(list.get(p).is_err()); // p is dead for good
//! ```
//!
//! Internally nodes live in a slot arena and link by index, bounded by two
//! unexposed sentinels; handles carry a generation tag so that slot reuse
//! can never revive them.
//!
//! # Sorting
//!
//! [`merge_sort`] sorts a list in place (by contents) through nothing but
//! the handle API — a textbook recursive linked merge sort, stable, with
//! ties resolved in favor of the left half:
//!
//! ```
//! use positional::{PositionalList, merge_sort};
//!
//! let mut list: PositionalList<i32> = (0..20).map(|i| 70 - 2 * i).collect();
//! merge_sort(&mut list);
//! assert_eq!(list.front(), Some(&32));
//! assert_eq!(list.back(), Some(&70));
//! ```
//!
//! # Structures
//!
//! | Structure | Addressing | Use case |
//! |-----------|------------|----------|
//! | [`PositionalList`] | stable positions | O(1) splice anywhere, handle-based algorithms |
//! | [`IndexedList`] | integer index (O(n) translation) | index compatibility over a linked spine |
//! | [`CircularQueue`] | FIFO ends only | fixed-capacity ring, no reallocation |
//! | [`LinkedStack`] | LIFO top only | owned chain, mid-traversal removal |
//!
//! # Errors
//!
//! All errors are synchronous and precise, and a failing operation never
//! leaves a structure half-mutated:
//!
//! - [`InvalidPosition`] — a handle that no longer addresses a live element
//! - [`NothingToRemove`] — cursor `remove` with no pending element
//! - [`IndexOutOfBounds`] — indexed facade only
//! - [`Full`] — fixed-capacity queue only, returns the rejected value
//!
//! # Concurrency
//!
//! None of these structures synchronize internally. They are `Send` where
//! their elements are, but concurrent mutation requires external locking.

#![warn(missing_docs)]

mod arena;
mod position;

pub mod error;
pub mod indexed;
pub mod list;
pub mod queue;
pub mod sort;
pub mod stack;

pub use error::{Full, IndexOutOfBounds, InvalidPosition, NothingToRemove};
pub use indexed::IndexedList;
pub use list::{Cursor, IntoIter, Iter, PositionalList, Positions};
pub use position::Position;
pub use queue::{CircularQueue, QueueIter};
pub use sort::merge_sort;
pub use stack::{LinkedStack, StackCursor, StackIter};

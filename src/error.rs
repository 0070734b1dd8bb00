//! Error types for the sequence collections.
//!
//! All errors are synchronous and precise: a failing operation reports
//! before touching any link, so the structure is never left half-mutated.

use core::fmt;

/// Error returned when a handle no longer addresses a live element.
///
/// Raised by every handle-consuming list operation, whether the handle is
/// stale (its element was removed) or came from a different list. The two
/// cases are deliberately indistinguishable: both mean "this handle does not
/// address a live element here".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidPosition;

impl fmt::Display for InvalidPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "position does not address a live element of this list")
    }
}

impl std::error::Error for InvalidPosition {}

/// Error returned by cursor `remove` when no element is pending removal.
///
/// A cursor may remove only the most recently yielded element, at most once
/// per yield. Calling `remove` before the first yield, or twice without an
/// intervening yield, fails with this error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NothingToRemove;

impl fmt::Display for NothingToRemove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no element pending removal")
    }
}

impl std::error::Error for NothingToRemove {}

/// Error returned by the indexed facade for out-of-range indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The rejected index.
    pub index: usize,
    /// The list length at the time of the call.
    pub len: usize,
}

impl fmt::Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index {} out of bounds for list of length {}",
            self.index, self.len
        )
    }
}

impl std::error::Error for IndexOutOfBounds {}

/// Error returned when a fixed-capacity queue is full.
///
/// Contains the value that could not be inserted, allowing recovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Full<T>(
    /// The value that could not be inserted.
    pub T,
);

impl<T> Full<T> {
    /// Returns the value that could not be inserted.
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Display for Full<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "queue is full")
    }
}

impl<T: fmt::Debug> std::error::Error for Full<T> {}

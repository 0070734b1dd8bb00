//! Index-addressable facade over the positional list.
//!
//! Every index-based operation translates its index to a position by walking
//! from the front, O(n), then delegates to the positional API. Index access
//! is deliberately second-class here: if a caller holds on to a
//! [`Position`](crate::Position) instead, the same element is reachable in
//! O(1) forever. Out-of-range indices are always an error, never a silent
//! default.

use crate::error::IndexOutOfBounds;
use crate::list::{Iter, PositionalList};
use crate::position::Position;

use core::fmt;

/// A list addressed by integer index, backed by a [`PositionalList`].
///
/// # Example
///
/// ```
/// use positional::IndexedList;
///
/// let mut list = IndexedList::new();
/// list.push_back('a');
/// list.push_back('c');
/// list.insert(1, 'b').unwrap();
///
/// assert_eq!(list.get(1), Ok(&'b'));
/// assert_eq!(list.remove(0), Ok('a'));
/// assert!(list.get(5).is_err());
/// ```
#[derive(Debug, Default)]
pub struct IndexedList<T> {
    items: PositionalList<T>,
}

impl<T> IndexedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            items: PositionalList::new(),
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends an element at the back. O(1).
    pub fn push_back(&mut self, element: T) {
        self.items.add_last(element);
    }

    /// Returns a reference to the element at `index`. O(n).
    ///
    /// # Errors
    ///
    /// [`IndexOutOfBounds`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        let p = self.position_of(index)?;
        self.items.get(p).map_err(|_| self.out_of_bounds(index))
    }

    /// Returns a mutable reference to the element at `index`. O(n).
    ///
    /// # Errors
    ///
    /// [`IndexOutOfBounds`] if `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let p = self.position_of(index)?;
        let oob = self.out_of_bounds(index);
        self.items.get_mut(p).map_err(|_| oob)
    }

    /// Replaces the element at `index`, returning the prior element. O(n).
    ///
    /// # Errors
    ///
    /// [`IndexOutOfBounds`] if `index >= len`.
    pub fn set(&mut self, index: usize, element: T) -> Result<T, IndexOutOfBounds> {
        let p = self.position_of(index)?;
        let oob = self.out_of_bounds(index);
        self.items.set(p, element).map_err(|_| oob)
    }

    /// Inserts an element so it ends up at `index`, shifting the rest. O(n).
    ///
    /// `index == len` appends.
    ///
    /// # Errors
    ///
    /// [`IndexOutOfBounds`] if `index > len`.
    pub fn insert(&mut self, index: usize, element: T) -> Result<(), IndexOutOfBounds> {
        if index == self.len() {
            self.items.add_last(element);
            return Ok(());
        }
        let p = self.position_of(index)?;
        let oob = self.out_of_bounds(index);
        self.items.add_before(p, element).map_err(|_| oob)?;
        Ok(())
    }

    /// Removes and returns the element at `index`. O(n).
    ///
    /// # Errors
    ///
    /// [`IndexOutOfBounds`] if `index >= len`.
    pub fn remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let p = self.position_of(index)?;
        let oob = self.out_of_bounds(index);
        self.items.remove(p).map_err(|_| oob)
    }

    /// Returns a forward iterator over element references.
    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }

    /// Walks from the front to the position holding index `index`.
    fn position_of(&self, index: usize) -> Result<Position, IndexOutOfBounds> {
        if index >= self.len() {
            return Err(self.out_of_bounds(index));
        }
        let mut walk = self.items.first();
        for _ in 0..index {
            walk = match walk {
                Some(p) => self.items.after(p).map_err(|_| self.out_of_bounds(index))?,
                None => None,
            };
        }
        walk.ok_or_else(|| self.out_of_bounds(index))
    }

    fn out_of_bounds(&self, index: usize) -> IndexOutOfBounds {
        IndexOutOfBounds {
            index,
            len: self.len(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for IndexedList<T> {
    /// Renders the elements front-to-back as `(a, b, c)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.items, f)
    }
}

impl<T> FromIterator<T> for IndexedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

//! Position-addressable doubly-linked list.
//!
//! [`PositionalList`] exposes stable, opaque [`Position`] handles instead of
//! integer indices. A handle addresses its element for the element's entire
//! lifetime in the list: no insertion or removal elsewhere ever moves or
//! renumbers it. The chain is bounded by two unexposed sentinel nodes, so
//! every linked element has both neighbors and every splice is branch-free.
//!
//! Nodes live in a private slot arena and link by index; handles carry the
//! slot's generation tag, so a handle dies permanently when its element is
//! removed, even if the slot is later reused.

use crate::arena::{Arena, NONE, Node};
use crate::error::{InvalidPosition, NothingToRemove};
use crate::position::Position;

use core::fmt;

/// A doubly-linked list addressed by stable positions.
///
/// Every accessor that consumes a [`Position`] validates it first and fails
/// with [`InvalidPosition`] if the handle is stale or foreign; the list is
/// never left half-mutated. Navigation past either visible end yields
/// `None`, which is not an error.
///
/// # Example
///
/// ```
/// use positional::PositionalList;
///
/// let mut list = PositionalList::new();
/// list.add_first(1);
/// let two = list.add_last(2);
/// list.add_before(two, 99).unwrap();
///
/// assert_eq!(list.to_string(), "(1, 99, 2)");
/// assert_eq!(list.set(two, 4), Ok(2));
/// assert_eq!(list.remove(two), Ok(4));
/// ```
#[derive(Debug)]
pub struct PositionalList<T> {
    arena: Arena<T>,
    header: u32,
    trailer: u32,
    len: usize,
}

impl<T> PositionalList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::build(Arena::new())
    }

    /// Creates an empty list with room for `capacity` elements before the
    /// arena reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::build(Arena::with_capacity(capacity + 2))
    }

    fn build(mut arena: Arena<T>) -> Self {
        let (header, _) = arena.insert(Node {
            element: None,
            prev: NONE,
            next: NONE,
        });
        let (trailer, _) = arena.insert(Node {
            element: None,
            prev: header,
            next: NONE,
        });
        let mut list = Self {
            arena,
            header,
            trailer,
            len: 0,
        };
        list.node_mut(header).next = trailer;
        list
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the position of the first element, or `None` if empty.
    pub fn first(&self) -> Option<Position> {
        self.expose(self.node(self.header).next)
    }

    /// Returns the position of the last element, or `None` if empty.
    pub fn last(&self) -> Option<Position> {
        self.expose(self.node(self.trailer).prev)
    }

    /// Returns the position preceding `p`, or `Ok(None)` if `p` is first.
    ///
    /// # Errors
    ///
    /// [`InvalidPosition`] if `p` does not address a live element here.
    pub fn before(&self, p: Position) -> Result<Option<Position>, InvalidPosition> {
        let index = self.validate(p)?;
        Ok(self.expose(self.node(index).prev))
    }

    /// Returns the position following `p`, or `Ok(None)` if `p` is last.
    ///
    /// # Errors
    ///
    /// [`InvalidPosition`] if `p` does not address a live element here.
    pub fn after(&self, p: Position) -> Result<Option<Position>, InvalidPosition> {
        let index = self.validate(p)?;
        Ok(self.expose(self.node(index).next))
    }

    /// Inserts `element` at the front, returning its position.
    pub fn add_first(&mut self, element: T) -> Position {
        let succ = self.node(self.header).next;
        self.add_between(element, self.header, succ)
    }

    /// Inserts `element` at the back, returning its position.
    pub fn add_last(&mut self, element: T) -> Position {
        let pred = self.node(self.trailer).prev;
        self.add_between(element, pred, self.trailer)
    }

    /// Inserts `element` immediately before `p`, returning its position.
    ///
    /// # Errors
    ///
    /// [`InvalidPosition`] if `p` does not address a live element here.
    pub fn add_before(&mut self, p: Position, element: T) -> Result<Position, InvalidPosition> {
        let index = self.validate(p)?;
        let pred = self.node(index).prev;
        Ok(self.add_between(element, pred, index))
    }

    /// Inserts `element` immediately after `p`, returning its position.
    ///
    /// # Errors
    ///
    /// [`InvalidPosition`] if `p` does not address a live element here.
    pub fn add_after(&mut self, p: Position, element: T) -> Result<Position, InvalidPosition> {
        let index = self.validate(p)?;
        let succ = self.node(index).next;
        Ok(self.add_between(element, index, succ))
    }

    /// Returns a reference to the element at `p`.
    ///
    /// # Errors
    ///
    /// [`InvalidPosition`] if `p` does not address a live element here.
    pub fn get(&self, p: Position) -> Result<&T, InvalidPosition> {
        let index = self.validate(p)?;
        self.node(index).element.as_ref().ok_or(InvalidPosition)
    }

    /// Returns a mutable reference to the element at `p`.
    ///
    /// # Errors
    ///
    /// [`InvalidPosition`] if `p` does not address a live element here.
    pub fn get_mut(&mut self, p: Position) -> Result<&mut T, InvalidPosition> {
        let index = self.validate(p)?;
        self.node_mut(index).element.as_mut().ok_or(InvalidPosition)
    }

    /// Replaces the element at `p`, returning the prior element.
    ///
    /// The position keeps addressing the (replaced) element.
    ///
    /// # Errors
    ///
    /// [`InvalidPosition`] if `p` does not address a live element here.
    pub fn set(&mut self, p: Position, element: T) -> Result<T, InvalidPosition> {
        let index = self.validate(p)?;
        self.node_mut(index)
            .element
            .replace(element)
            .ok_or(InvalidPosition)
    }

    /// Removes the element at `p`, returning it.
    ///
    /// `p` and every other handle to the same element become permanently
    /// invalid: the node's slot is vacated and its generation retired, so
    /// even a later insertion reusing the slot cannot revive the handle.
    ///
    /// # Errors
    ///
    /// [`InvalidPosition`] if `p` does not address a live element here.
    pub fn remove(&mut self, p: Position) -> Result<T, InvalidPosition> {
        let index = self.validate(p)?;
        let node = self.arena.remove(index).ok_or(InvalidPosition)?;
        self.node_mut(node.prev).next = node.next;
        self.node_mut(node.next).prev = node.prev;
        self.len -= 1;
        node.element.ok_or(InvalidPosition)
    }

    /// Removes and returns the first element, or `None` if empty.
    pub fn remove_first(&mut self) -> Option<T> {
        let p = self.first()?;
        self.remove(p).ok()
    }

    /// Removes and returns the last element, or `None` if empty.
    pub fn remove_last(&mut self) -> Option<T> {
        let p = self.last()?;
        self.remove(p).ok()
    }

    /// Returns a reference to the first element, or `None` if empty.
    pub fn front(&self) -> Option<&T> {
        let p = self.first()?;
        self.get(p).ok()
    }

    /// Returns a reference to the last element, or `None` if empty.
    pub fn back(&self) -> Option<&T> {
        let p = self.last()?;
        self.get(p).ok()
    }

    /// Returns `true` if `p` currently addresses a live element of this list.
    pub fn is_valid(&self, p: Position) -> bool {
        self.validate(p).is_ok()
    }

    /// Returns a forward iterator over positions.
    pub fn positions(&self) -> Positions<'_, T> {
        Positions {
            next: self.first(),
            list: self,
        }
    }

    /// Returns a forward iterator over element references.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            positions: self.positions(),
        }
    }

    /// Returns a single-pass forward cursor that can remove the most
    /// recently yielded element.
    pub fn cursor(&mut self) -> Cursor<'_, T> {
        Cursor {
            next: self.first(),
            recent: None,
            list: self,
        }
    }

    /// Accepts a handle iff its slot is live, its generation matches, the
    /// node holds an element (sentinels never do), and its outgoing link is
    /// intact. Stale and foreign handles fail identically.
    fn validate(&self, p: Position) -> Result<u32, InvalidPosition> {
        match self.arena.get(p.index) {
            Some(node)
                if self.arena.generation(p.index) == Some(p.generation)
                    && node.element.is_some()
                    && node.next != NONE =>
            {
                Ok(p.index)
            }
            _ => Err(InvalidPosition),
        }
    }

    /// Wraps a linked index as a public handle; sentinels map to `None`.
    fn expose(&self, index: u32) -> Option<Position> {
        if index == self.header || index == self.trailer {
            return None;
        }
        let generation = self.arena.generation(index)?;
        Some(Position::new(index, generation))
    }

    /// Splices a new node between two linked neighbors.
    fn add_between(&mut self, element: T, pred: u32, succ: u32) -> Position {
        let (index, generation) = self.arena.insert(Node {
            element: Some(element),
            prev: pred,
            next: succ,
        });
        self.node_mut(pred).next = index;
        self.node_mut(succ).prev = index;
        self.len += 1;
        Position::new(index, generation)
    }

    fn node(&self, index: u32) -> &Node<T> {
        self.arena
            .get(index)
            .expect("linked index addresses an occupied slot")
    }

    fn node_mut(&mut self, index: u32) -> &mut Node<T> {
        self.arena
            .get_mut(index)
            .expect("linked index addresses an occupied slot")
    }
}

impl<T> Default for PositionalList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for PositionalList<T> {
    /// Renders the elements front-to-back as `(a, b, c)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, element) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{element}")?;
        }
        write!(f, ")")
    }
}

impl<T> FromIterator<T> for PositionalList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for PositionalList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add_last(element);
        }
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// Forward iterator over the positions of a list.
///
/// Snapshot of the traversal order at creation time; single-pass.
#[derive(Debug)]
pub struct Positions<'a, T> {
    list: &'a PositionalList<T>,
    next: Option<Position>,
}

impl<T> Iterator for Positions<'_, T> {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        let p = self.next?;
        // p was minted by this traversal, so `after` cannot fail
        self.next = self.list.after(p).ok().flatten();
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.next {
            Some(_) => (1, Some(self.list.len())),
            None => (0, Some(0)),
        }
    }
}

/// Forward iterator over element references.
///
/// A thin projection over [`Positions`]: each yielded position is resolved
/// to its payload.
#[derive(Debug)]
pub struct Iter<'a, T> {
    positions: Positions<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let p = self.positions.next()?;
        self.positions.list.get(p).ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.positions.size_hint()
    }
}

impl<'a, T> IntoIterator for &'a PositionalList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

/// Consuming iterator; drains the list front-to-back.
#[derive(Debug)]
pub struct IntoIter<T> {
    list: PositionalList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.list.remove_first()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> IntoIterator for PositionalList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { list: self }
    }
}

// =============================================================================
// Cursor
// =============================================================================

/// Single-pass forward cursor supporting removal mid-traversal.
///
/// Yields positions like [`Positions`], but holds the list mutably and
/// remembers the most recently yielded position. At most one removal is
/// pending at a time: [`remove`](Cursor::remove) consumes the pending
/// position, and calling it again before the next yield fails with
/// [`NothingToRemove`].
///
/// # Example
///
/// ```
/// use positional::PositionalList;
///
/// let mut list: PositionalList<i32> = [10, 20, 30].into_iter().collect();
///
/// let mut cursor = list.cursor();
/// cursor.next();
/// cursor.next();
/// assert_eq!(cursor.remove(), Ok(20));
///
/// assert_eq!(list.to_string(), "(10, 30)");
/// ```
#[derive(Debug)]
pub struct Cursor<'a, T> {
    list: &'a mut PositionalList<T>,
    next: Option<Position>,
    recent: Option<Position>,
}

impl<T> Cursor<'_, T> {
    /// Returns `true` if another element remains to be yielded.
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Returns the element at the most recently yielded position, if one is
    /// pending (i.e. yielded and not yet removed).
    pub fn element(&self) -> Option<&T> {
        let p = self.recent?;
        self.list.get(p).ok()
    }

    /// Removes the most recently yielded element from the underlying list.
    ///
    /// # Errors
    ///
    /// [`NothingToRemove`] if nothing has been yielded yet, or the yielded
    /// element was already removed.
    pub fn remove(&mut self) -> Result<T, NothingToRemove> {
        let p = self.recent.take().ok_or(NothingToRemove)?;
        // the cursor holds the only mutable borrow, so p is still live
        self.list.remove(p).map_err(|_| NothingToRemove)
    }
}

impl<T> Iterator for Cursor<'_, T> {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        let p = self.next?;
        self.recent = Some(p);
        self.next = self.list.after(p).ok().flatten();
        Some(p)
    }
}

//! Singly linked LIFO stack with mid-traversal removal.
//!
//! The chain is a plain owned `Box` spine: each node uniquely owns its
//! successor, so push and pop at the top are O(1). The cursor can remove the
//! element it most recently yielded; removing anywhere but the top re-walks
//! the chain, O(n), which is the cost of having no back links.

use crate::error::NothingToRemove;

use core::fmt;

#[derive(Debug)]
struct StackNode<T> {
    element: T,
    next: Option<Box<StackNode<T>>>,
}

/// A LIFO stack over a singly linked chain.
///
/// # Example
///
/// ```
/// use positional::LinkedStack;
///
/// let mut stack = LinkedStack::new();
/// stack.push(1);
/// stack.push(2);
///
/// assert_eq!(stack.top(), Some(&2));
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.pop(), Some(1));
/// assert_eq!(stack.pop(), None);
/// ```
#[derive(Debug)]
pub struct LinkedStack<T> {
    head: Option<Box<StackNode<T>>>,
    len: usize,
}

impl<T> LinkedStack<T> {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    /// Returns the number of stacked elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the stack holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Pushes an element onto the top of the stack. O(1).
    pub fn push(&mut self, element: T) {
        self.head = Some(Box::new(StackNode {
            element,
            next: self.head.take(),
        }));
        self.len += 1;
    }

    /// Removes and returns the top element, or `None` if empty. O(1).
    pub fn pop(&mut self) -> Option<T> {
        let node = self.head.take()?;
        self.head = node.next;
        self.len -= 1;
        Some(node.element)
    }

    /// Returns a reference to the top element, or `None` if empty.
    pub fn top(&self) -> Option<&T> {
        Some(&self.head.as_ref()?.element)
    }

    /// Returns a forward iterator from the top of the stack down.
    pub fn iter(&self) -> StackIter<'_, T> {
        StackIter {
            node: self.head.as_deref(),
        }
    }

    /// Returns a single-pass cursor from the top down that can remove the
    /// most recently yielded element.
    pub fn cursor(&mut self) -> StackCursor<'_, T> {
        StackCursor {
            stack: self,
            upcoming: 0,
            recent: None,
        }
    }

    fn element_at(&self, index: usize) -> Option<&T> {
        let mut node = self.head.as_deref()?;
        for _ in 0..index {
            node = node.next.as_deref()?;
        }
        Some(&node.element)
    }

    /// Unlinks the node at `index`, walking from the head.
    fn remove_at(&mut self, index: usize) -> Option<T> {
        if index == 0 {
            return self.pop();
        }
        let mut node = self.head.as_deref_mut()?;
        for _ in 0..index - 1 {
            node = node.next.as_deref_mut()?;
        }
        let mut removed = node.next.take()?;
        node.next = removed.next.take();
        self.len -= 1;
        Some(removed.element)
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedStack<T> {
    /// Renders the elements top-to-bottom as `(a, b, c)`.
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

impl<T> Drop for LinkedStack<T> {
    fn drop(&mut self) {
        // unlink iteratively so deep stacks cannot overflow the call stack
        // through recursive Box drops
        let mut node = self.head.take();
        while let Some(mut boxed) = node {
            node = boxed.next.take();
        }
    }
}

/// Forward iterator over a [`LinkedStack`], top to bottom.
#[derive(Debug)]
pub struct StackIter<'a, T> {
    node: Option<&'a StackNode<T>>,
}

impl<'a, T> Iterator for StackIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = self.node?;
        self.node = node.next.as_deref();
        Some(&node.element)
    }
}

impl<'a, T> IntoIterator for &'a LinkedStack<T> {
    type Item = &'a T;
    type IntoIter = StackIter<'a, T>;

    fn into_iter(self) -> StackIter<'a, T> {
        self.iter()
    }
}

/// Single-pass cursor over a [`LinkedStack`] supporting removal of the most
/// recently yielded element.
///
/// Each advance walks from the head to the cursor's depth, so a full
/// traversal is O(n^2) in the worst case; this is the price of a chain with
/// no back links and matters only for mid-stack surgery.
#[derive(Debug)]
pub struct StackCursor<'a, T> {
    stack: &'a mut LinkedStack<T>,
    upcoming: usize,
    recent: Option<usize>,
}

impl<T> StackCursor<'_, T> {
    /// Returns `true` if another element remains to be yielded.
    pub fn has_next(&self) -> bool {
        self.upcoming < self.stack.len
    }

    /// Yields a reference to the next element, top-down, or `None` when the
    /// traversal is exhausted.
    pub fn next(&mut self) -> Option<&T> {
        if self.upcoming >= self.stack.len {
            return None;
        }
        let index = self.upcoming;
        self.upcoming += 1;
        self.recent = Some(index);
        self.stack.element_at(index)
    }

    /// Removes the most recently yielded element from the stack.
    ///
    /// # Errors
    ///
    /// [`NothingToRemove`] if nothing has been yielded yet, or the yielded
    /// element was already removed.
    pub fn remove(&mut self) -> Result<T, NothingToRemove> {
        let index = self.recent.take().ok_or(NothingToRemove)?;
        let element = self.stack.remove_at(index).ok_or(NothingToRemove)?;
        self.upcoming = index;
        Ok(element)
    }
}

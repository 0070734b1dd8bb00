//! Fixed-capacity circular-buffer queue.
//!
//! Elements wrap around a pre-allocated ring; enqueue refuses (returning the
//! value) rather than reallocating, so the queue never moves its storage.

use crate::error::Full;

use core::fmt;

/// A FIFO queue over a fixed-capacity ring buffer.
///
/// # Example
///
/// ```
/// use positional::CircularQueue;
///
/// let mut queue = CircularQueue::with_capacity(4);
/// queue.enqueue(1).unwrap();
/// queue.enqueue(2).unwrap();
///
/// assert_eq!(queue.front(), Some(&1));
/// assert_eq!(queue.dequeue(), Some(1));
/// assert_eq!(queue.len(), 1);
/// ```
#[derive(Debug)]
pub struct CircularQueue<T> {
    data: Box<[Option<T>]>,
    front: usize,
    len: usize,
}

impl<T> CircularQueue<T> {
    /// Creates a queue holding at most `capacity` elements.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is 0.
    pub fn with_capacity(capacity: usize) -> Self {
        assert!(capacity > 0, "capacity must be > 0");
        let mut data = Vec::with_capacity(capacity);
        data.resize_with(capacity, || None);
        Self {
            data: data.into_boxed_slice(),
            front: 0,
            len: 0,
        }
    }

    /// Returns the number of queued elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the queue holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if every slot is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.data.len()
    }

    /// Returns the fixed capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Appends an element at the back of the queue.
    ///
    /// # Errors
    ///
    /// Returns `Err(Full(element))` if the queue is at capacity; the value
    /// is handed back for recovery.
    pub fn enqueue(&mut self, element: T) -> Result<(), Full<T>> {
        if self.is_full() {
            return Err(Full(element));
        }
        let avail = (self.front + self.len) % self.data.len();
        self.data[avail] = Some(element);
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the front element, or `None` if empty.
    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let element = self.data[self.front].take();
        self.front = (self.front + 1) % self.data.len();
        self.len -= 1;
        element
    }

    /// Returns a reference to the front element, or `None` if empty.
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.data[self.front].as_ref()
    }

    /// Returns a bidirectional cursor-iterator over the queued elements,
    /// front to back.
    pub fn iter(&self) -> QueueIter<'_, T> {
        QueueIter {
            queue: self,
            offset: 0,
        }
    }
}

impl<T: fmt::Display> fmt::Display for CircularQueue<T> {
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

/// Bidirectional cursor-iterator over a [`CircularQueue`].
///
/// Walks forward via [`Iterator::next`]; [`previous`](QueueIter::previous)
/// steps the same cursor back over elements already yielded.
#[derive(Debug)]
pub struct QueueIter<'a, T> {
    queue: &'a CircularQueue<T>,
    offset: usize,
}

impl<'a, T> QueueIter<'a, T> {
    /// Returns `true` if the cursor has yielded at least one element it can
    /// step back over.
    pub fn has_previous(&self) -> bool {
        self.offset > 0
    }

    /// Steps the cursor back and returns the element it moved over, or
    /// `None` if the cursor is at the front.
    pub fn previous(&mut self) -> Option<&'a T> {
        if self.offset == 0 {
            return None;
        }
        self.offset -= 1;
        let at = (self.queue.front + self.offset) % self.queue.data.len();
        self.queue.data[at].as_ref()
    }
}

impl<'a, T> Iterator for QueueIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.offset == self.queue.len {
            return None;
        }
        let at = (self.queue.front + self.offset) % self.queue.data.len();
        self.offset += 1;
        self.queue.data[at].as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.queue.len - self.offset;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for QueueIter<'_, T> {}

impl<'a, T> IntoIterator for &'a CircularQueue<T> {
    type Item = &'a T;
    type IntoIter = QueueIter<'a, T>;

    fn into_iter(self) -> QueueIter<'a, T> {
        self.iter()
    }
}

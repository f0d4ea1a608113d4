use std::fmt;

use crate::error::FifoError;
use crate::hints::{likely, unlikely};

/// Number of elements a queue created with [`UnboundedFifo::new`] can hold
/// before its first grow.
pub const DEFAULT_CAPACITY: usize = 32;

/// A growable first-in-first-out queue backed by a circular buffer.
///
/// Elements come back out in the order they went in. The backing store is a
/// fixed ring of slots addressed by two indices, `head` and `tail`; when the
/// ring fills up it is transparently replaced by one twice the size, with the
/// live elements compacted to the front. [`insert`](Self::insert) is therefore
/// amortized constant time, and [`poll`](Self::poll) and
/// [`peek`](Self::peek) are constant time outright.
///
/// Slots hold `Option<T>`: `None` marks an unoccupied slot, which is why
/// [`insert`](Self::insert) refuses absent values. One slot is always kept
/// empty so that `head == tail` unambiguously means "empty".
///
/// # Examples
///
/// ```
/// use ringfifo::UnboundedFifo;
///
/// let mut fifo = UnboundedFifo::with_capacity(4)?;
/// fifo.insert(1)?;
/// fifo.insert(2)?;
/// fifo.insert(3)?;
///
/// assert_eq!(fifo.peek()?, &1);
/// assert_eq!(fifo.poll()?, 1);
/// assert_eq!(fifo.poll()?, 2);
/// assert_eq!(fifo.len(), 1);
/// # Ok::<(), ringfifo::FifoError>(())
/// ```
///
/// Iteration with mid-sequence removal goes through a [`Cursor`], which
/// borrows the queue exclusively for its lifetime:
///
/// ```
/// use ringfifo::UnboundedFifo;
///
/// let mut fifo: UnboundedFifo<char> = "abcd".chars().collect();
///
/// let mut cursor = fifo.cursor();
/// cursor.next();
/// cursor.next(); // 'b'
/// assert_eq!(cursor.remove()?, 'b');
/// drop(cursor);
///
/// let rest: Vec<char> = fifo.into_iter().collect();
/// assert_eq!(rest, ['a', 'c', 'd']);
/// # Ok::<(), ringfifo::FifoError>(())
/// ```
pub struct UnboundedFifo<T> {
    /// Ring of `capacity + 1` slots; the slot at `tail` is always `None`.
    storage: Box<[Option<T>]>,
    /// Index of the oldest live element. Equals `tail` when empty.
    head: usize,
    /// Index one past the newest live element.
    tail: usize,
}

impl<T> UnboundedFifo<T> {
    /// Creates an empty queue that holds [`DEFAULT_CAPACITY`] elements
    /// before growing.
    #[inline]
    pub fn new() -> Self {
        Self::with_slots(DEFAULT_CAPACITY + 1)
    }

    /// Creates an empty queue that holds `capacity` elements before growing.
    ///
    /// # Errors
    ///
    /// Returns [`FifoError::InvalidCapacity`] if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Result<Self, FifoError> {
        if unlikely(capacity == 0) {
            return Err(FifoError::InvalidCapacity);
        }
        Ok(Self::with_slots(capacity + 1))
    }

    fn with_slots(slots: usize) -> Self {
        let mut storage = Vec::with_capacity(slots);
        storage.resize_with(slots, || None);
        Self {
            storage: storage.into_boxed_slice(),
            head: 0,
            tail: 0,
        }
    }

    /// Returns the number of elements currently in the queue.
    #[inline]
    pub fn len(&self) -> usize {
        if likely(self.tail >= self.head) {
            self.tail - self.head
        } else {
            self.storage.len() - self.head + self.tail
        }
    }

    /// Returns true if the queue holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head == self.tail
    }

    /// Returns the number of elements the queue can hold before the next grow.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.storage.len() - 1
    }

    /// Steps `index` forward one slot, wrapping at the end of the ring.
    #[inline]
    fn increment(&self, index: usize) -> usize {
        if unlikely(index + 1 == self.storage.len()) {
            0
        } else {
            index + 1
        }
    }

    /// Steps `index` backward one slot, wrapping at the start of the ring.
    #[inline]
    fn decrement(&self, index: usize) -> usize {
        if unlikely(index == 0) {
            self.storage.len() - 1
        } else {
            index - 1
        }
    }

    /// Adds a value to the back of the queue, growing the ring if it is full.
    ///
    /// Accepts anything convertible to `Option<T>`, so plain values work
    /// directly: `fifo.insert(5)`.
    ///
    /// # Errors
    ///
    /// Returns [`FifoError::NilElement`] when given `None`, leaving the queue
    /// unchanged. `None` marks empty slots internally and cannot double as a
    /// stored value.
    pub fn insert(&mut self, value: impl Into<Option<T>>) -> Result<(), FifoError> {
        match value.into() {
            Some(value) => {
                self.push(value);
                Ok(())
            }
            None => Err(FifoError::NilElement),
        }
    }

    /// Infallible insertion of a known-present value.
    fn push(&mut self, value: T) {
        if unlikely(self.len() + 1 >= self.storage.len()) {
            self.grow();
        }
        self.storage[self.tail] = Some(value);
        self.tail = self.increment(self.tail);
    }

    /// Replaces the ring with one roughly twice the size, moving the live
    /// elements in logical order to the front of the new store.
    fn grow(&mut self) {
        let slots = (self.storage.len() - 1) * 2 + 1;
        let mut grown = Vec::with_capacity(slots);
        grown.resize_with(slots, || None);
        let mut grown = grown.into_boxed_slice();

        let mut copied = 0;
        let mut i = self.head;
        while i != self.tail {
            grown[copied] = self.storage[i].take();
            copied += 1;
            i = self.increment(i);
        }

        self.storage = grown;
        self.head = 0;
        self.tail = copied;
    }

    /// Returns a reference to the oldest element without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`FifoError::Underflow`] if the queue is empty.
    #[inline]
    pub fn peek(&self) -> Result<&T, FifoError> {
        // An empty queue has head == tail, and the tail slot is always
        // unoccupied, so slot occupancy doubles as the emptiness check.
        self.storage[self.head].as_ref().ok_or(FifoError::Underflow)
    }

    /// Removes and returns the oldest element.
    ///
    /// # Errors
    ///
    /// Returns [`FifoError::Underflow`] if the queue is empty.
    pub fn poll(&mut self) -> Result<T, FifoError> {
        if unlikely(self.head == self.tail) {
            return Err(FifoError::Underflow);
        }
        let value = self.storage[self.head].take().ok_or(FifoError::Underflow)?;
        self.head = self.increment(self.head);
        Ok(value)
    }

    /// Creates an iterator that yields references to elements in FIFO order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            fifo: self,
            index: self.head,
            remaining: self.len(),
        }
    }

    /// Creates a cursor over the elements in FIFO order that supports
    /// removing the element it last yielded.
    ///
    /// The cursor borrows the queue mutably for its lifetime, so no other
    /// access can interleave with an iteration that removes elements.
    #[inline]
    pub fn cursor(&mut self) -> Cursor<'_, T> {
        let index = self.head;
        Cursor {
            fifo: self,
            index,
            last_returned: None,
        }
    }
}

impl<T> Default for UnboundedFifo<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for UnboundedFifo<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Clone> Clone for UnboundedFifo<T> {
    fn clone(&self) -> Self {
        let mut cloned = Self::with_slots(self.storage.len());
        for item in self.iter() {
            cloned.push(item.clone());
        }
        cloned
    }
}

impl<T: PartialEq> PartialEq for UnboundedFifo<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for UnboundedFifo<T> {}

impl<T> Extend<T> for UnboundedFifo<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for UnboundedFifo<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut fifo = Self::new();
        fifo.extend(iter);
        fifo
    }
}

impl<T> From<Vec<T>> for UnboundedFifo<T> {
    fn from(vec: Vec<T>) -> Self {
        vec.into_iter().collect()
    }
}

/// Iterator that yields references to elements in FIFO order.
pub struct Iter<'a, T> {
    fifo: &'a UnboundedFifo<T>,
    index: usize,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if unlikely(self.remaining == 0) {
            return None;
        }
        let item = self.fifo.storage[self.index].as_ref();
        self.index = self.fifo.increment(self.index);
        self.remaining -= 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<'a, T> IntoIterator for &'a UnboundedFifo<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Owning iterator that drains the queue in FIFO order.
pub struct IntoIter<T> {
    fifo: UnboundedFifo<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.fifo.poll().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.fifo.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.fifo.len()
    }
}

impl<T> IntoIterator for UnboundedFifo<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { fifo: self }
    }
}

/// Forward-only cursor over an [`UnboundedFifo`] that supports removing the
/// element it last yielded.
///
/// Created by [`UnboundedFifo::cursor`]. Holding the cursor holds an
/// exclusive borrow of the queue, so removal can shift elements and move the
/// tail without any other reader or writer observing a half-updated ring.
pub struct Cursor<'a, T> {
    fifo: &'a mut UnboundedFifo<T>,
    /// Next slot to yield; iteration is exhausted when this reaches `tail`.
    index: usize,
    /// Slot of the element yielded by the latest `next`, cleared by `remove`.
    last_returned: Option<usize>,
}

impl<T> Cursor<'_, T> {
    /// Returns true if [`next`](Self::next) would yield another element.
    #[inline]
    pub fn has_next(&self) -> bool {
        self.index != self.fifo.tail
    }

    /// Yields a reference to the next element in FIFO order, or `None` when
    /// the sequence is exhausted.
    pub fn next(&mut self) -> Option<&T> {
        if !self.has_next() {
            return None;
        }
        let current = self.index;
        self.last_returned = Some(current);
        self.index = self.fifo.increment(current);
        self.fifo.storage[current].as_ref()
    }

    /// Removes and returns the element most recently yielded by
    /// [`next`](Self::next).
    ///
    /// Removing the head element is a plain [`poll`](UnboundedFifo::poll);
    /// removing from anywhere else shifts the elements behind the gap back
    /// one slot and pulls the tail in, so it costs O(k) in the distance from
    /// the removal point to the tail. Iteration continues correctly either
    /// way.
    ///
    /// # Errors
    ///
    /// Returns [`FifoError::NoPendingRemoval`] if `next` has not yielded an
    /// element since the cursor was created or since the previous removal.
    pub fn remove(&mut self) -> Result<T, FifoError> {
        let last = self.last_returned.take().ok_or(FifoError::NoPendingRemoval)?;

        // The head element needs no shifting.
        if last == self.fifo.head {
            return self.fifo.poll();
        }

        let removed = self.fifo.storage[last]
            .take()
            .ok_or(FifoError::NoPendingRemoval)?;

        // Slide every element behind the gap back one slot, circularly. The
        // final take leaves the slot before the old tail empty.
        let mut i = self.fifo.increment(last);
        while i != self.fifo.tail {
            let prev = self.fifo.decrement(i);
            self.fifo.storage[prev] = self.fifo.storage[i].take();
            i = self.fifo.increment(i);
        }

        self.fifo.tail = self.fifo.decrement(self.fifo.tail);
        self.index = self.fifo.decrement(self.index);
        Ok(removed)
    }
}

use core::ops;

use crate::errors::CapacityError;

/// Index bookkeeping for a circular buffer of fixed capacity.
///
/// Tracks the physical index of the oldest element and the number of
/// occupied slots. The write position is derived from those two, so the
/// front, the rear and the count can never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Cursor {
    front: usize,
    len: usize,
    capacity: usize,
}

impl Cursor {
    /// Create a cursor over `capacity` slots, all of them unoccupied.
    pub(crate) fn new(capacity: usize) -> Result<Self, CapacityError> {
        if capacity == 0 {
            return Err(CapacityError::new(capacity));
        }
        Ok(Self {
            front: 0,
            len: 0,
            capacity,
        })
    }

    #[inline]
    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    /// Physical index of the oldest element.
    #[inline]
    pub(crate) fn front(&self) -> usize {
        self.front
    }

    /// Physical index the next element will be written to.
    #[inline]
    pub(crate) fn rear(&self) -> usize {
        self.wrap(self.front + self.len)
    }

    /// Claim the slot at the rear. The caller must have checked `is_full`.
    pub(crate) fn push(&mut self) -> usize {
        debug_assert!(!self.is_full(), "cursor is full");
        let index = self.rear();
        self.len += 1;
        index
    }

    /// Release the slot at the front. The caller must have checked `is_empty`.
    pub(crate) fn pop(&mut self) -> usize {
        debug_assert!(!self.is_empty(), "cursor is empty");
        let index = self.front;
        self.front = self.wrap(self.front + 1);
        self.len -= 1;
        index
    }

    pub(crate) fn clear(&mut self) {
        self.front = 0;
        self.len = 0;
    }

    /// Physical indices of the occupied slots, oldest first.
    pub(crate) fn indices(&self) -> Indices {
        Indices {
            range: 0..self.len,
            front: self.front,
            capacity: self.capacity,
        }
    }

    // `index` is always below `2 * capacity` here.
    #[inline]
    fn wrap(&self, index: usize) -> usize {
        if index >= self.capacity {
            index - self.capacity
        } else {
            index
        }
    }
}

/// Iterator over the physical indices of occupied slots.
#[derive(Debug, Clone)]
pub(crate) struct Indices {
    range: ops::Range<usize>,
    front: usize,
    capacity: usize,
}

impl Indices {
    #[inline]
    fn physical(&self, offset: usize) -> usize {
        (self.front + offset).wrapping_rem(self.capacity)
    }
}

impl Iterator for Indices {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        self.range.next().map(|offset| self.physical(offset))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.range.size_hint()
    }
}

impl DoubleEndedIterator for Indices {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.range.next_back().map(|offset| self.physical(offset))
    }
}

impl ExactSizeIterator for Indices {}

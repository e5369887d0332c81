//! Iterators over bounded queues.
//!
//! All of them walk the occupied range only, oldest element first.

use core::fmt;
use core::iter::FusedIterator;

use crate::queue::Queue;
use crate::utils::{Cursor, Indices};

/// A borrowing iterator over the elements of a queue.
///
/// Created by the `iter` method on either queue flavor.
pub struct Iter<'a, T> {
    slots: &'a [Option<T>],
    indices: Indices,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(slots: &'a [Option<T>], indices: Indices) -> Self {
        Self { slots, indices }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            slots: self.slots,
            indices: self.indices.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let slots = self.slots;
        self.indices.find_map(|index| slots[index].as_ref())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        let slots = self.slots;
        self.indices.by_ref().rev().find_map(|index| slots[index].as_ref())
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// A draining iterator over the elements of a queue.
///
/// Created by the `drain` method on either queue flavor. Elements that have
/// not been yielded when the iterator is dropped are removed as well.
pub struct Drain<'a, T> {
    slots: &'a mut [Option<T>],
    cursor: &'a mut Cursor,
}

impl<'a, T> Drain<'a, T> {
    pub(crate) fn new(slots: &'a mut [Option<T>], cursor: &'a mut Cursor) -> Self {
        Self { slots, cursor }
    }
}

impl<T> fmt::Debug for Drain<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Drain")
            .field("remaining", &self.cursor.len())
            .finish()
    }
}

impl<T> Iterator for Drain<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.is_empty() {
            return None;
        }
        let index = self.cursor.pop();
        self.slots[index].take()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.cursor.len();
        (len, Some(len))
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {}
impl<T> FusedIterator for Drain<'_, T> {}

impl<T> Drop for Drain<'_, T> {
    fn drop(&mut self) {
        self.for_each(drop);
        self.cursor.clear();
    }
}

/// An owning iterator over the elements of a queue.
///
/// Created by `into_iter` on either queue flavor; yields elements by
/// dequeueing them.
#[derive(Debug, Clone)]
pub struct IntoIter<Q> {
    queue: Q,
}

impl<Q> IntoIter<Q> {
    pub(crate) fn new(queue: Q) -> Self {
        Self { queue }
    }
}

impl<Q: Queue> Iterator for IntoIter<Q> {
    type Item = Q::Item;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.dequeue().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<Q: Queue> ExactSizeIterator for IntoIter<Q> {}
impl<Q: Queue> FusedIterator for IntoIter<Q> {}

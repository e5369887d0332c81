//! A bounded queue whose capacity is chosen at runtime.

use alloc::boxed::Box;
use core::fmt;
use core::iter::repeat_with;

use crate::errors::{CapacityError, EmptyError, FullError};
use crate::iter::{Drain, IntoIter, Iter};
use crate::queue::Queue;
use crate::utils::Ring;

/// A fixed-capacity FIFO queue over a heap-allocated circular buffer.
///
/// The buffer is allocated once, in [`BoundedQueue::new`], and never grows
/// or shrinks. Enqueueing into a full queue and dequeueing from an empty one
/// fail without touching the queue.
///
/// # Examples
///
/// ```
/// use bounded_queue::BoundedQueue;
///
/// let mut queue = BoundedQueue::new(3).unwrap();
/// queue.enqueue(10).unwrap();
/// queue.enqueue(20).unwrap();
/// queue.enqueue(30).unwrap();
/// assert!(queue.enqueue(40).is_err());
///
/// assert_eq!(queue.dequeue(), Ok(10));
/// queue.enqueue(40).unwrap();
/// assert!(queue.contains(&40));
/// assert_eq!(queue.peek(), Ok(&20));
/// ```
pub struct BoundedQueue<T> {
    ring: Ring<Box<[Option<T>]>>,
}

impl<T> BoundedQueue<T> {
    /// Create an empty queue holding at most `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns a [`CapacityError`] if `capacity` is 0.
    pub fn new(capacity: usize) -> Result<Self, CapacityError> {
        let slots: Box<[Option<T>]> = repeat_with(|| None).take(capacity).collect();
        Ok(Self {
            ring: Ring::new(slots)?,
        })
    }

    /// The maximum number of elements the queue can hold.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    /// The number of elements currently in the queue.
    #[inline]
    #[doc(alias = "size")]
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// Returns `true` if the queue holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Returns `true` if the queue holds `capacity` elements.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.ring.is_full()
    }

    /// Append an element at the back of the queue.
    ///
    /// # Errors
    ///
    /// Returns the element inside a [`FullError`] if the queue is full.
    pub fn enqueue(&mut self, item: T) -> Result<(), FullError<T>> {
        self.ring.enqueue(item)
    }

    /// Remove and return the element at the front of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the queue is empty.
    pub fn dequeue(&mut self) -> Result<T, EmptyError> {
        self.ring.dequeue()
    }

    /// Borrow the element at the front of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the queue is empty.
    pub fn peek(&self) -> Result<&T, EmptyError> {
        self.ring.peek()
    }

    /// Mutably borrow the element at the front of the queue.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyError`] if the queue is empty.
    pub fn peek_mut(&mut self) -> Result<&mut T, EmptyError> {
        self.ring.peek_mut()
    }

    /// Returns `true` if an element equal to `item` is in the queue.
    ///
    /// Runs in time proportional to [`len`](Self::len), not to the capacity.
    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.ring.contains(item)
    }

    /// Enqueue every element of `iter`, in order.
    ///
    /// # Errors
    ///
    /// Stops at the first element that does not fit and returns it inside a
    /// [`FullError`]. Elements enqueued before it stay in the queue.
    pub fn try_extend<I>(&mut self, iter: I) -> Result<(), FullError<T>>
    where
        I: IntoIterator<Item = T>,
    {
        self.ring.try_extend(iter)
    }

    /// Remove all elements.
    pub fn clear(&mut self) {
        self.ring.clear();
    }

    /// Iterate over the elements, front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        self.ring.iter()
    }

    /// Remove all elements, yielding them front to back.
    pub fn drain(&mut self) -> Drain<'_, T> {
        self.ring.drain()
    }
}

impl<T> Queue for BoundedQueue<T> {
    type Item = T;

    fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    fn len(&self) -> usize {
        self.ring.len()
    }

    fn enqueue(&mut self, item: T) -> Result<(), FullError<T>> {
        self.ring.enqueue(item)
    }

    fn dequeue(&mut self) -> Result<T, EmptyError> {
        self.ring.dequeue()
    }

    fn peek(&self) -> Result<&T, EmptyError> {
        self.ring.peek()
    }

    fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.ring.contains(item)
    }
}

impl<T: Clone> Clone for BoundedQueue<T> {
    fn clone(&self) -> Self {
        Self {
            ring: self.ring.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for BoundedQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Two queues are equal when they have the same capacity and hold equal
/// elements in the same order, wherever those sit in the buffer.
impl<T: PartialEq> PartialEq for BoundedQueue<T> {
    fn eq(&self, other: &Self) -> bool {
        self.capacity() == other.capacity() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for BoundedQueue<T> {}

impl<'a, T> IntoIterator for &'a BoundedQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for BoundedQueue<T> {
    type Item = T;
    type IntoIter = IntoIter<Self>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::errors::ErrorKind;

    use std::rc::Rc;

    #[test]
    fn smoke() {
        let mut queue = BoundedQueue::new(10).unwrap();
        queue.enqueue(10).unwrap();
        queue.enqueue(20).unwrap();
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.peek(), Ok(&10));
        assert_eq!(queue.dequeue(), Ok(10));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.peek(), Ok(&20));
    }

    #[test]
    fn zero_capacity() {
        let err = BoundedQueue::<u8>::new(0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
    }

    #[test]
    fn capacity_is_exact() {
        let queue = BoundedQueue::<u8>::new(7).unwrap();
        assert_eq!(queue.capacity(), 7);
        assert_eq!(queue.ring.slots().len(), 7);
    }

    #[test]
    fn debug() {
        let mut queue = BoundedQueue::new(3).unwrap();
        queue.try_extend([1, 2, 3]).unwrap();
        queue.dequeue().unwrap();
        queue.enqueue(4).unwrap();
        assert_eq!(format!("{:?}", queue), "[2, 3, 4]");
    }

    #[test]
    fn equality_ignores_physical_layout() {
        let mut a = BoundedQueue::new(3).unwrap();
        a.try_extend([0, 1, 2]).unwrap();
        a.dequeue().unwrap();

        let mut b = BoundedQueue::new(3).unwrap();
        b.try_extend([1, 2]).unwrap();

        assert_eq!(a, b);

        let c = BoundedQueue::<i32>::new(4).unwrap();
        assert_ne!(BoundedQueue::<i32>::new(3).unwrap(), c);
    }

    #[test]
    fn clone_is_independent() {
        let mut queue = BoundedQueue::new(2).unwrap();
        queue.enqueue(String::from("a")).unwrap();
        let mut copy = queue.clone();
        copy.enqueue(String::from("b")).unwrap();
        assert_eq!(queue.len(), 1);
        assert_eq!(copy.len(), 2);
    }

    #[test]
    fn peek_mut_edits_front() {
        let mut queue = BoundedQueue::new(2).unwrap();
        queue.try_extend([1, 2]).unwrap();
        *queue.peek_mut().unwrap() += 10;
        assert_eq!(queue.dequeue(), Ok(11));
        assert_eq!(queue.peek(), Ok(&2));
    }

    #[test]
    fn dequeue_releases_the_value() {
        let value = Rc::new(());
        let mut queue = BoundedQueue::new(2).unwrap();
        queue.enqueue(value.clone()).unwrap();
        assert_eq!(Rc::strong_count(&value), 2);
        drop(queue.dequeue().unwrap());
        assert_eq!(Rc::strong_count(&value), 1);
    }

    #[test]
    fn drain_dropped_early_still_empties() {
        let mut queue = BoundedQueue::new(4).unwrap();
        queue.try_extend([1, 2, 3, 4]).unwrap();
        let mut drain = queue.drain();
        assert_eq!(drain.next(), Some(1));
        drop(drain);
        assert!(queue.is_empty());
        queue.try_extend([5, 6, 7, 8]).unwrap();
        assert_eq!(queue.iter().copied().collect::<Vec<_>>(), vec![5, 6, 7, 8]);
    }

    #[test]
    fn into_iter_is_fifo() {
        let mut queue = BoundedQueue::new(3).unwrap();
        queue.try_extend(["a", "b", "c"]).unwrap();
        queue.dequeue().unwrap();
        queue.enqueue("d").unwrap();
        let items: Vec<_> = queue.into_iter().collect();
        assert_eq!(items, vec!["b", "c", "d"]);
    }
}

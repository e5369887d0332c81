//! A bounded queue whose capacity is fixed at compile time.

use core::array;
use core::fmt;

use crate::errors::{CapacityError, EmptyError, FullError};
use crate::iter::{Drain, IntoIter, Iter};
use crate::queue::Queue;
use crate::utils::Ring;

/// A FIFO queue over an inline circular buffer of `N` slots.
///
/// Needs no allocator. Behaves exactly like [`crate::vec::BoundedQueue`],
/// except that the capacity is the const parameter `N`.
///
/// # Examples
///
/// ```
/// use bounded_queue::array::BoundedQueue;
///
/// let mut queue = BoundedQueue::<_, 2>::new().unwrap();
/// queue.enqueue('a').unwrap();
/// queue.enqueue('b').unwrap();
/// assert_eq!(queue.enqueue('c').unwrap_err().into_inner(), 'c');
/// assert_eq!(queue.dequeue(), Ok('a'));
/// ```
pub struct BoundedQueue<T, const N: usize> {
    ring: Ring<[Option<T>; N]>,
}

impl<T, const N: usize> BoundedQueue<T, N> {
    /// Create an empty queue holding at most `N` elements.
    ///
    /// # Errors
    ///
    /// Returns a [`CapacityError`] if `N` is 0.
    pub fn new() -> Result<Self, CapacityError> {
        Ok(Self {
            ring: Ring::new(array::from_fn(|_| None))?,
        })
    }

    /// The maximum number of elements the queue can hold. Always `N`.
    #[inline]
    pub fn capacity(&self) -> usize {
        N
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

    /// Returns `true` if the queue holds `N` elements.
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

impl<T, const N: usize> Queue for BoundedQueue<T, N> {
    type Item = T;

    fn capacity(&self) -> usize {
        N
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

impl<T: Clone, const N: usize> Clone for BoundedQueue<T, N> {
    fn clone(&self) -> Self {
        Self {
            ring: self.ring.clone(),
        }
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for BoundedQueue<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: PartialEq, const N: usize> PartialEq for BoundedQueue<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl<T: Eq, const N: usize> Eq for BoundedQueue<T, N> {}

impl<'a, T, const N: usize> IntoIterator for &'a BoundedQueue<T, N> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, const N: usize> IntoIterator for BoundedQueue<T, N> {
    type Item = T;
    type IntoIter = IntoIter<Self>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

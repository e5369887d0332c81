//! The operations shared by every bounded queue flavor.

use crate::errors::{EmptyError, FullError};

/// A fixed-capacity first-in, first-out queue.
///
/// Implemented by [`crate::array::BoundedQueue`] and, with the `alloc`
/// feature, by [`crate::vec::BoundedQueue`]. Code that should work with
/// either flavor can be written against this trait:
///
/// ```
/// use bounded_queue::prelude::*;
/// use bounded_queue::{array, vec};
///
/// fn rotate<Q: Queue>(queue: &mut Q) {
///     if let Ok(item) = queue.dequeue() {
///         let _ = queue.enqueue(item);
///     }
/// }
///
/// let mut a = array::BoundedQueue::<_, 3>::new().unwrap();
/// let mut v = vec::BoundedQueue::new(3).unwrap();
/// for n in 1..=3 {
///     a.enqueue(n).unwrap();
///     v.enqueue(n).unwrap();
/// }
/// rotate(&mut a);
/// rotate(&mut v);
/// assert_eq!(a.peek(), Ok(&2));
/// assert_eq!(v.peek(), Ok(&2));
/// ```
pub trait Queue {
    /// The type of the elements held by the queue.
    type Item;

    /// The maximum number of elements the queue can hold.
    fn capacity(&self) -> usize;

    /// The number of elements currently in the queue.
    fn len(&self) -> usize;

    /// Returns `true` if the queue holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the queue holds `capacity` elements.
    fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    /// Append an element at the back of the queue.
    fn enqueue(&mut self, item: Self::Item) -> Result<(), FullError<Self::Item>>;

    /// Remove and return the element at the front of the queue.
    fn dequeue(&mut self) -> Result<Self::Item, EmptyError>;

    /// Borrow the element at the front of the queue.
    fn peek(&self) -> Result<&Self::Item, EmptyError>;

    /// Returns `true` if an element equal to `item` is in the queue.
    fn contains(&self, item: &Self::Item) -> bool
    where
        Self::Item: PartialEq;
}

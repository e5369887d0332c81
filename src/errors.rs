//! Errors returned by queue construction and queue operations.
//!
//! Every failing operation leaves the queue exactly as it was before the
//! call. Each error reports its [`ErrorKind`] so callers can match on the
//! failure class without caring which operation produced it.

use core::fmt;
#[cfg(feature = "std")]
use std::error::Error;

/// The class of a queue error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The queue was constructed with a capacity of zero.
    InvalidConfiguration,
    /// An item was enqueued while the queue held `capacity` items.
    QueueFull,
    /// An item was dequeued or peeked while the queue held no items.
    QueueEmpty,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::InvalidConfiguration => "invalid configuration",
            Self::QueueFull => "queue full",
            Self::QueueEmpty => "queue empty",
        };
        f.write_str(s)
    }
}

/// Returned when a queue is created with a capacity below 1.
///
/// ```
/// use bounded_queue::errors::ErrorKind;
/// use bounded_queue::BoundedQueue;
///
/// let err = BoundedQueue::<u8>::new(0).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
/// assert_eq!(err.capacity(), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityError {
    capacity: usize,
}

impl CapacityError {
    pub(crate) fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// The capacity that was rejected.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Always [`ErrorKind::InvalidConfiguration`].
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidConfiguration
    }
}

impl fmt::Display for CapacityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "queue capacity must be at least 1, got {}",
            self.capacity
        )
    }
}

#[cfg(feature = "std")]
impl Error for CapacityError {}

/// Returned when enqueueing into a full queue.
///
/// The item that did not fit is handed back and can be recovered with
/// [`FullError::into_inner`].
///
/// ```
/// use bounded_queue::BoundedQueue;
///
/// let mut queue = BoundedQueue::new(1).unwrap();
/// queue.enqueue("a").unwrap();
/// let err = queue.enqueue("b").unwrap_err();
/// assert_eq!(err.into_inner(), "b");
/// assert_eq!(queue.len(), 1);
/// ```
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct FullError<T> {
    item: T,
}

impl<T> FullError<T> {
    pub(crate) fn new(item: T) -> Self {
        Self { item }
    }

    /// Returns the rejected item.
    pub fn into_inner(self) -> T {
        self.item
    }

    /// Always [`ErrorKind::QueueFull`].
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::QueueFull
    }
}

// Items are not required to implement `Debug`.
impl<T> fmt::Debug for FullError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FullError").finish_non_exhaustive()
    }
}

impl<T> fmt::Display for FullError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("queue is full")
    }
}

#[cfg(feature = "std")]
impl<T> Error for FullError<T> {}

/// Returned when dequeueing from or peeking into an empty queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EmptyError;

impl EmptyError {
    /// Always [`ErrorKind::QueueEmpty`].
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::QueueEmpty
    }
}

impl fmt::Display for EmptyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("queue is empty")
    }
}

#[cfg(feature = "std")]
impl Error for EmptyError {}

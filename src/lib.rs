//! Fixed-capacity first-in, first-out queues backed by a circular buffer.
//!
//! A bounded queue allocates all of its slots up front and never resizes.
//! Elements are written at the rear and read from the front; both positions
//! wrap around the end of the buffer, so every operation except
//! [`contains`](BoundedQueue::contains) runs in constant time.
//!
//! # Flavors
//!
//! - [`vec::BoundedQueue`]: capacity chosen at runtime, heap-allocated.
//!   Requires the `alloc` feature and is re-exported at the crate root.
//! - [`array::BoundedQueue`]: capacity fixed at compile time, stored inline.
//!   Works without an allocator.
//!
//! Both implement the [`Queue`](queue::Queue) trait.
//!
//! # Operations
//!
//! | Operation  | Fails with                  | Cost   |
//! | ---        | ---                         | ---    |
//! | `new`      | `InvalidConfiguration`      | O(capacity)
//! | `enqueue`  | `QueueFull`                 | O(1)
//! | `dequeue`  | `QueueEmpty`                | O(1)
//! | `peek`     | `QueueEmpty`                | O(1)
//! | `contains` | never                       | O(len)
//! | `len`      | never                       | O(1)
//!
//! A failing operation never modifies the queue. See [`errors`].
//!
//! # Examples
//!
//! ```
//! use bounded_queue::BoundedQueue;
//!
//! let mut queue = BoundedQueue::new(2).unwrap();
//! queue.enqueue("first").unwrap();
//! queue.enqueue("second").unwrap();
//! assert!(queue.is_full());
//!
//! assert_eq!(queue.dequeue(), Ok("first"));
//! assert_eq!(queue.peek(), Ok(&"second"));
//! assert_eq!(queue.len(), 1);
//! ```
//!
//! # Concurrency
//!
//! The queues do no synchronization of their own. Mutation takes `&mut self`;
//! share a queue between threads by wrapping it in a `Mutex`.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_debug_implementations, nonstandard_style)]
#![warn(missing_docs, unreachable_pub)]

#[cfg(feature = "alloc")]
extern crate alloc;

mod utils;

/// The bounded queue prelude.
pub mod prelude {
    pub use super::queue::Queue;
}

pub mod array;
pub mod errors;
pub mod iter;
pub mod queue;
#[cfg(feature = "alloc")]
pub mod vec;

#[cfg(feature = "alloc")]
pub use vec::BoundedQueue;

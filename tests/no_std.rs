#![no_std]

use bounded_queue::array::BoundedQueue;
use bounded_queue::errors::{EmptyError, ErrorKind};
use bounded_queue::prelude::*;

// These tests ensure that the inline queue works in a no std environment.

#[test]
fn enqueue_dequeue() {
    let mut queue = BoundedQueue::<_, 2>::new().unwrap();
    queue.enqueue("hello").unwrap();
    queue.enqueue("world").unwrap();
    assert_eq!(queue.enqueue("!").unwrap_err().kind(), ErrorKind::QueueFull);
    assert_eq!(queue.dequeue(), Ok("hello"));
    assert_eq!(queue.dequeue(), Ok("world"));
    assert_eq!(queue.dequeue(), Err(EmptyError));
}

#[test]
fn wrap_around() {
    let mut queue = BoundedQueue::<_, 3>::new().unwrap();
    queue.try_extend([10, 20, 30]).unwrap();
    assert_eq!(queue.dequeue(), Ok(10));
    queue.enqueue(40).unwrap();
    assert!(queue.contains(&40));
    assert_eq!(queue.peek(), Ok(&20));
    assert!(queue.iter().copied().eq([20, 30, 40]));
}

#[test]
fn zero_capacity() {
    let err = BoundedQueue::<u8, 0>::new().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidConfiguration);
}

#[test]
fn generic_over_queue() {
    fn drain_sum<Q: Queue<Item = u32>>(queue: &mut Q) -> u32 {
        let mut sum = 0;
        while let Ok(n) = queue.dequeue() {
            sum += n;
        }
        sum
    }

    let mut queue = BoundedQueue::<u32, 4>::new().unwrap();
    queue.try_extend(1..=4).unwrap();
    assert_eq!(drain_sum(&mut queue), 10);
    assert!(queue.is_empty());
}

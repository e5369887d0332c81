#![allow(unused)]

use bounded_queue::BoundedQueue;

/// Queue sizes every benchmark is run against.
pub const SIZES: [usize; 4] = [10, 100, 1_000, 10_000];

/// A queue of `capacity` filled to the brim with `0..capacity`.
pub fn full_queue(capacity: usize) -> BoundedQueue<u64> {
    let mut queue = BoundedQueue::new(capacity).unwrap();
    queue.try_extend(0..capacity as u64).unwrap();
    queue
}

/// A full queue whose front sits in the middle of the buffer, so that
/// iteration crosses the wrap-around point.
pub fn wrapped_queue(capacity: usize) -> BoundedQueue<u64> {
    let mut queue = full_queue(capacity);
    let half = capacity / 2;
    for _ in 0..half {
        let n = queue.dequeue().unwrap();
        queue.enqueue(n + capacity as u64).unwrap();
    }
    queue
}

/// `len` values in a fixed pseudo-random order.
pub fn shuffled(len: usize) -> Vec<u64> {
    let mut values: Vec<u64> = (0..len as u64).collect();
    shuffle(&mut values);
    values
}

fn shuffle<T>(slice: &mut [T]) {
    use rand::seq::SliceRandom;
    use rand::SeedableRng;
    let mut rng = rand::rngs::StdRng::seed_from_u64(42);
    slice.shuffle(&mut rng);
}

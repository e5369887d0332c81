//! Prints the average latency of each queue operation for a range of queue
//! sizes.
//!
//! Unlike the criterion benches this is a plain timing loop: a few warmup
//! rounds, then a fixed number of measured rounds per size.

use std::error::Error;
use std::hint::black_box;
use std::time::{Duration, Instant};

use bounded_queue::BoundedQueue;

const SIZES: [usize; 4] = [10, 100, 1_000, 10_000];
const WARMUP_ROUNDS: u32 = 3;
const ROUNDS: u32 = 20;

#[derive(Debug, Default, Clone, Copy)]
struct Timings {
    enqueue: Duration,
    peek: Duration,
    contains: Duration,
    dequeue: Duration,
}

impl Timings {
    fn add(&mut self, other: Timings) {
        self.enqueue += other.enqueue;
        self.peek += other.peek;
        self.contains += other.contains;
        self.dequeue += other.dequeue;
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    println!(
        "{:>8}  {:>14}  {:>14}  {:>14}  {:>14}",
        "size", "enqueue", "peek", "contains", "dequeue"
    );

    for size in SIZES {
        for _ in 0..WARMUP_ROUNDS {
            round(size)?;
        }

        let mut total = Timings::default();
        for _ in 0..ROUNDS {
            total.add(round(size)?);
        }

        // Per-operation average across all measured rounds.
        let ops = ROUNDS * size as u32;
        println!(
            "{:>8}  {:>14?}  {:>14?}  {:>14?}  {:>14?}",
            size,
            total.enqueue / ops,
            total.peek / ops,
            total.contains / ops,
            total.dequeue / ops,
        );
    }
    Ok(())
}

/// Fill a queue of `size`, peek and probe it `size` times, then empty it.
fn round(size: usize) -> Result<Timings, Box<dyn Error>> {
    let mut queue = BoundedQueue::new(size)?;
    let mut timings = Timings::default();

    let start = Instant::now();
    for n in 0..size as u64 {
        queue.enqueue(black_box(n))?;
    }
    timings.enqueue = start.elapsed();

    let start = Instant::now();
    for _ in 0..size {
        black_box(queue.peek()?);
    }
    timings.peek = start.elapsed();

    // Probe for the newest element so every scan walks the whole queue.
    let needle = size as u64 - 1;
    let start = Instant::now();
    for _ in 0..size {
        black_box(queue.contains(black_box(&needle)));
    }
    timings.contains = start.elapsed();

    let start = Instant::now();
    for _ in 0..size {
        black_box(queue.dequeue()?);
    }
    timings.dequeue = start.elapsed();

    Ok(timings)
}

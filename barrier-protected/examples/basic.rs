//! Minimal barrier-protected example.
//!
//! Run with: `cargo run --example basic`

use barrier_protected::barrier_protected;
use std::thread;

#[barrier_protected]
static VISITS: u64 = 0;

#[barrier_protected]
static LAST_VISITOR: String = String::new();

fn main() {
    let handles: Vec<_> = (0..4)
        .map(|id| {
            thread::spawn(move || {
                // Each write takes barrier access; reads in between run concurrently.
                VISITSQueue.sync_barrier(&_VISITS, |visits| *visits += 1);
                LAST_VISITOR.set(format!("worker-{id}"));
                println!("worker-{id} sees {} visits", VISITS.get());
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    println!("{}: {} visits, last by {}", VISITSQueue.label(), VISITS.get(), LAST_VISITOR.get());
}

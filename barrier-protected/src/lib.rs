//! Readers-writer protected statics generated from a single attribute.
//!
//! Annotate a `static` with `#[barrier_protected]` and every read of it takes
//! shared access on a [`BarrierQueue`] while every write takes barrier
//! (exclusive) access. Any number of readers proceed together; a writer waits
//! for all of them and holds everyone else off until it is done.
//!
//! Blocking on top of [`async-lock`], with async and non-blocking variants on
//! the queue itself.
//!
//! # Quick Start
//!
//! ```rust
//! use barrier_protected::barrier_protected;
//!
//! #[barrier_protected]
//! static COUNTER: u64 = 0;
//!
//! COUNTER.set(COUNTER.get() + 1);
//! assert_eq!(COUNTER.get(), 1);
//! ```
//!
//! # Generated Items
//!
//! For `static NAME: T = init;`, `#[barrier_protected]` generates:
//!
//! | Item | Purpose |
//! |------|---------|
//! | `struct NAME` | Unit struct replacing the static; `get(&self) -> T` and `set(&self, T)` |
//! | `static NAMEQueue` | [`BarrierQueue`] labeled `"Barrier Queue for NAME"` (module-private) |
//! | `static _NAME` | [`BarrierCell<'static, T>`](BarrierCell) holding `init` (module-private) |
//!
//! `get` requires `T: Clone`; it clones the value out under shared access.
//!
//! # Rejected Items
//!
//! The attribute only applies to `static` items:
//!
//! ```compile_fail
//! use barrier_protected::barrier_protected;
//!
//! #[barrier_protected] // only works on variables
//! fn foo() -> bool { true }
//! ```
//!
//! ```compile_fail
//! use barrier_protected::barrier_protected;
//!
//! #[barrier_protected] // only works on stored properties
//! const FOO: i64 = 100;
//! ```
//!
//! # Using the queue directly
//!
//! ```rust
//! use barrier_protected::{BarrierCell, BarrierQueue};
//!
//! static QUEUE: BarrierQueue = BarrierQueue::new("names");
//! static NAMES: BarrierCell<'static, Vec<String>> = BarrierCell::new(&QUEUE, Vec::new());
//!
//! QUEUE.sync_barrier(&NAMES, |names| names.push("ada".into()));
//! let count = QUEUE.sync(&NAMES, |names| names.len());
//! assert_eq!(count, 1);
//! # tokio_test::block_on(async {
//! let first = QUEUE.sync_async(&NAMES, |names| names[0].clone()).await;
//! assert_eq!(first, "ada");
//! # });
//! ```

mod cell;
mod queue;

pub use barrier_protected_derive::barrier_protected;
pub use cell::BarrierCell;
pub use queue::BarrierQueue;

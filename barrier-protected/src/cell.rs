use std::cell::UnsafeCell;
use std::fmt;

use crate::queue::BarrierQueue;

/// Storage whose every access goes through the [`BarrierQueue`] it was bound
/// to at construction.
///
/// A cell has no locking of its own: reads and writes happen inside
/// [`BarrierQueue::sync`] and [`BarrierQueue::sync_barrier`] on its queue.
pub struct BarrierCell<'q, T> {
    queue: &'q BarrierQueue,
    value: UnsafeCell<T>,
}

// Shared closures hand out `&T` on several threads at once and barrier
// closures move values in from whichever thread holds the barrier.
unsafe impl<T: Send + Sync> Sync for BarrierCell<'_, T> {}

impl<'q, T> BarrierCell<'q, T> {
    /// Bind `value` to `queue`. `const` so it can initialize a `static`.
    pub const fn new(queue: &'q BarrierQueue, value: T) -> Self {
        Self {
            queue,
            value: UnsafeCell::new(value),
        }
    }

    /// The queue guarding this cell.
    pub fn queue(&self) -> &'q BarrierQueue {
        self.queue
    }

    /// Mutable access without the queue. `&mut self` already proves exclusivity.
    pub fn get_mut(&mut self) -> &mut T {
        self.value.get_mut()
    }

    pub fn into_inner(self) -> T {
        self.value.into_inner()
    }

    /// # Safety
    ///
    /// The caller must hold shared or exclusive access on `self.queue`.
    pub(crate) unsafe fn shared(&self) -> &T {
        &*self.value.get()
    }

    /// # Safety
    ///
    /// The caller must hold exclusive access on `self.queue`.
    #[allow(clippy::mut_from_ref)]
    pub(crate) unsafe fn exclusive(&self) -> &mut T {
        &mut *self.value.get()
    }
}

impl<T: fmt::Debug> fmt::Debug for BarrierCell<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut s = f.debug_struct("BarrierCell");
        s.field("queue", &self.queue.label());
        match self.queue.try_sync(self, |value| format!("{:?}", value)) {
            Some(value) => s.field("value", &format_args!("{}", value)),
            None => s.field("value", &format_args!("<locked>")),
        };
        s.finish()
    }
}

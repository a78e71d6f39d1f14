use async_lock::RwLock;
use std::fmt;
use std::ptr;
use tracing::trace;

use crate::cell::BarrierCell;

/// A concurrent queue with barrier semantics.
///
/// - [`sync`](Self::sync) runs a closure with shared access. Any number of
///   shared closures may run at the same time.
/// - [`sync_barrier`](Self::sync_barrier) runs a closure with exclusive access.
///   It waits for every earlier closure to finish and blocks every later one
///   until it completes.
///
/// Access is always granted on a [`BarrierCell`] bound to this queue. The
/// underlying lock is write-preferring, so a waiting barrier holds back
/// readers that arrive after it.
pub struct BarrierQueue {
    label: &'static str,
    lock: RwLock<()>,
}

impl BarrierQueue {
    /// Create a queue. `const` so it can initialize a `static`.
    pub const fn new(label: &'static str) -> Self {
        Self {
            label,
            lock: RwLock::new(()),
        }
    }

    /// The label given at construction.
    pub fn label(&self) -> &'static str {
        self.label
    }

    /// Run `f` with shared access to `cell`, blocking the current thread until
    /// access is granted. Access is released when `f` returns or unwinds.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is bound to a different queue.
    pub fn sync<T, R>(&self, cell: &BarrierCell<'_, T>, f: impl FnOnce(&T) -> R) -> R {
        self.check_owner(cell);
        let _guard = self.lock.read_blocking();
        trace!(queue = self.label, "shared access granted");
        // SAFETY: a read guard on the cell's own queue excludes every writer.
        f(unsafe { cell.shared() })
    }

    /// Run `f` with exclusive access to `cell`, blocking the current thread
    /// until every other holder has finished.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is bound to a different queue.
    pub fn sync_barrier<T, R>(&self, cell: &BarrierCell<'_, T>, f: impl FnOnce(&mut T) -> R) -> R {
        self.check_owner(cell);
        let _guard = self.lock.write_blocking();
        trace!(queue = self.label, "barrier access granted");
        // SAFETY: a write guard on the cell's own queue excludes every other access.
        f(unsafe { cell.exclusive() })
    }

    /// Async form of [`sync`](Self::sync).
    pub async fn sync_async<T, R>(&self, cell: &BarrierCell<'_, T>, f: impl FnOnce(&T) -> R) -> R {
        self.check_owner(cell);
        let _guard = self.lock.read().await;
        trace!(queue = self.label, "shared access granted");
        // SAFETY: see `sync`.
        f(unsafe { cell.shared() })
    }

    /// Async form of [`sync_barrier`](Self::sync_barrier).
    pub async fn sync_barrier_async<T, R>(
        &self,
        cell: &BarrierCell<'_, T>,
        f: impl FnOnce(&mut T) -> R,
    ) -> R {
        self.check_owner(cell);
        let _guard = self.lock.write().await;
        trace!(queue = self.label, "barrier access granted");
        // SAFETY: see `sync_barrier`.
        f(unsafe { cell.exclusive() })
    }

    /// Run `f` with shared access if it can be granted immediately.
    /// Returns `None` while a barrier holds or waits on the queue.
    pub fn try_sync<T, R>(&self, cell: &BarrierCell<'_, T>, f: impl FnOnce(&T) -> R) -> Option<R> {
        self.check_owner(cell);
        let _guard = self.lock.try_read()?;
        // SAFETY: see `sync`.
        Some(f(unsafe { cell.shared() }))
    }

    /// Run `f` with exclusive access if it can be granted immediately.
    /// Returns `None` while any other access is held.
    pub fn try_sync_barrier<T, R>(
        &self,
        cell: &BarrierCell<'_, T>,
        f: impl FnOnce(&mut T) -> R,
    ) -> Option<R> {
        self.check_owner(cell);
        let _guard = self.lock.try_write()?;
        // SAFETY: see `sync_barrier`.
        Some(f(unsafe { cell.exclusive() }))
    }

    #[inline(always)]
    fn check_owner<T>(&self, cell: &BarrierCell<'_, T>) {
        assert!(
            ptr::eq(cell.queue(), self),
            "cell is not guarded by `{}`",
            self.label
        );
    }
}

impl fmt::Debug for BarrierQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BarrierQueue")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

//! # Store Cell
//!
//! Shared ownership wrapper for the wrapped store.
//!
//! ## Safety Note
//!
//! This module requires unsafe code: the store is not protected by a lock
//! of its own. The execution domain *is* the lock - it never runs a write
//! task while any other task is in flight, and read tasks only ever take
//! shared access. Every caller of the accessors below is a task scheduled
//! by the domain, which is the entire soundness argument.

#![allow(unsafe_code)]

use std::cell::UnsafeCell;

/// Cell granting domain-scheduled tasks access to the store.
///
/// Held as `Arc<StoreCell<S>>` by the facade and as `Weak<StoreCell<S>>`
/// by every queued task, so a task that outlives the facade simply fails
/// to upgrade and skips itself.
pub(crate) struct StoreCell<S> {
    inner: UnsafeCell<S>,
}

impl<S> StoreCell<S> {
    pub(crate) fn new(store: S) -> Self {
        Self {
            inner: UnsafeCell::new(store),
        }
    }

    /// Returns shared access to the store.
    ///
    /// # Safety
    ///
    /// Must only be called from a concurrent-read task of the domain that
    /// guards this cell; the domain guarantees no exclusive-write task is
    /// running concurrently.
    pub(crate) unsafe fn read(&self) -> &S {
        &*self.inner.get()
    }

    /// Returns exclusive access to the store.
    ///
    /// # Safety
    ///
    /// Must only be called from an exclusive-write task of the domain that
    /// guards this cell; the domain guarantees nothing else is running.
    #[allow(clippy::mut_from_ref)]
    pub(crate) unsafe fn write(&self) -> &mut S {
        &mut *self.inner.get()
    }
}

// SAFETY: access is serialized by the execution domain, never by the cell
// itself. Tasks are the only callers, and the domain schedules them with
// reader/writer discipline.
unsafe impl<S: Send> Send for StoreCell<S> {}
// SAFETY: see above - shared references are only handed out while no
// exclusive task runs.
unsafe impl<S: Send> Sync for StoreCell<S> {}

//! Ready-made heap-allocated counted targets.
//!
//! Callers with their own counted types implement [`RefCounted`] directly;
//! everyone else wraps a value in [`Counted`] (single-threaded) or
//! [`AtomicCounted`] (shared across threads) and gets the allocation,
//! counting and self-destruction for free.

use core::ops::Deref;

use crate::count::{AtomicRefCount, RefCount, RefCounted, ThreadSafeRefCounted};
use crate::ref_ptr::RefPtr;

/// A single-threaded counted cell: a value plus its intrusive count on
/// the heap, freed when the last owner lets go.
#[derive(Debug)]
pub struct Counted<T> {
    refs: RefCount,
    value: T,
}

impl<T> Counted<T> {
    /// Allocate `value` with a zero count and hand back the first owner;
    /// binding performs the first increment.
    pub fn new(value: T) -> RefPtr<Counted<T>> {
        let raw = Box::into_raw(Box::new(Counted {
            refs: RefCount::new(0),
            value,
        }));
        // SAFETY: freshly allocated and live; the wrapper takes the count
        // to one, and the final release returns the allocation to the Box.
        unsafe { RefPtr::from_ptr(raw) }
    }

    /// Current reference count.
    pub fn ref_count(&self) -> usize {
        self.refs.get()
    }
}

impl<T> RefCounted for Counted<T> {
    #[inline]
    fn add_ref(&self) {
        self.refs.increment();
    }

    unsafe fn release_ref(&self) {
        if self.refs.decrement() == 0 {
            // SAFETY: allocated by Box in `new`; the count reached zero,
            // so this was the last unit and nothing can reach the object.
            drop(Box::from_raw(self as *const Self as *mut Self));
        }
    }
}

impl<T> Deref for Counted<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.value
    }
}

/// The atomic sibling of [`Counted`]: safe to count from any thread.
#[derive(Debug)]
pub struct AtomicCounted<T> {
    refs: AtomicRefCount,
    value: T,
}

impl<T> AtomicCounted<T> {
    /// Allocate `value` with a zero count and hand back the first owner.
    pub fn new(value: T) -> RefPtr<AtomicCounted<T>> {
        let raw = Box::into_raw(Box::new(AtomicCounted {
            refs: AtomicRefCount::new(0),
            value,
        }));
        // SAFETY: as in Counted::new.
        unsafe { RefPtr::from_ptr(raw) }
    }

    /// Current reference count. A snapshot, as for
    /// [`AtomicRefCount::get`].
    pub fn ref_count(&self) -> usize {
        self.refs.get()
    }
}

impl<T> RefCounted for AtomicCounted<T> {
    #[inline]
    fn add_ref(&self) {
        self.refs.increment();
    }

    unsafe fn release_ref(&self) {
        if self.refs.decrement() == 0 {
            // SAFETY: allocated by Box in `new`; decrement's acquire
            // fence orders every prior use before this drop.
            drop(Box::from_raw(self as *const Self as *mut Self));
        }
    }
}

// SAFETY: AtomicRefCount makes the capability pair atomic, and its
// decrement publishes destruction correctly.
unsafe impl<T> ThreadSafeRefCounted for AtomicCounted<T> {}

impl<T> Deref for AtomicCounted<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.value
    }
}

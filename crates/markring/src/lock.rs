//! Interchangeable mutual-exclusion strategies for [`SharedRingBuffer`].
//!
//! A strategy guards one value and hands out exclusive access for the
//! duration of a closure. The ring takes the lock once per public operation
//! and never holds it across calls.
//!
//! [`SharedRingBuffer`]: crate::SharedRingBuffer

use core::cell::RefCell;

/// A lock guarding a `T`.
///
/// Implementations must give `f` exclusive access to the value for the
/// whole call. Calling back into the same lock from inside `f` is a contract
/// violation: it panics with [`Unsynchronized`] and deadlocks with a
/// spinning or blocking lock.
pub trait Lock<T> {
    /// Wraps `value` in the lock.
    fn new(value: T) -> Self;

    /// Runs `f` with exclusive access to the guarded value.
    fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R;

    /// Consumes the lock and returns the guarded value.
    fn into_inner(self) -> T;
}

/// The no-op strategy for single-threaded use.
///
/// It is `!Sync`, so a ring guarded by it cannot be shared between threads;
/// the compiler refuses instead of permitting a data race.
#[derive(Debug)]
pub struct Unsynchronized<T>(RefCell<T>);

impl<T> Lock<T> for Unsynchronized<T> {
    fn new(value: T) -> Self {
        Self(RefCell::new(value))
    }

    fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut *self.0.borrow_mut())
    }

    fn into_inner(self) -> T {
        self.0.into_inner()
    }
}

/// A spinning lock backed by `spin::Mutex`. Works without `std`.
#[cfg(feature = "spin")]
#[derive(Debug)]
pub struct SpinLock<T>(spin::Mutex<T>);

#[cfg(feature = "spin")]
impl<T> Lock<T> for SpinLock<T> {
    fn new(value: T) -> Self {
        Self(spin::Mutex::new(value))
    }

    fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        f(&mut *self.0.lock())
    }

    fn into_inner(self) -> T {
        self.0.into_inner()
    }
}

/// A blocking lock backed by `std::sync::Mutex`.
///
/// Poisoning is ignored: every ring operation leaves the cursors
/// consistent before it can panic, so the guarded state stays usable.
#[cfg(feature = "std")]
#[derive(Debug)]
pub struct StdLock<T>(std::sync::Mutex<T>);

#[cfg(feature = "std")]
impl<T> Lock<T> for StdLock<T> {
    fn new(value: T) -> Self {
        Self(std::sync::Mutex::new(value))
    }

    fn with<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        let mut guard = self
            .0
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        f(&mut *guard)
    }

    fn into_inner(self) -> T {
        self.0
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

//! Indirection over the mutex/condvar/refcount primitives the rest of the
//! crate is built on.
//!
//! Under ordinary builds these are just `std::sync` re-exports with poison
//! recovered at the call site (none of this crate's critical sections can
//! panic, so a poisoned lock is not a sign of corrupted state). Under
//! `--cfg chansel_loom` test builds they become `loom`'s equivalents instead,
//! which lets the interleavings in `channel` and `select` be exhaustively
//! model-checked rather than only stress-tested.

#[cfg(all(test, chansel_loom))]
pub(crate) use loom::sync::{Arc, Condvar, Mutex, MutexGuard};

#[cfg(not(all(test, chansel_loom)))]
pub(crate) use std::sync::{Arc, Condvar, Mutex, MutexGuard};

#[cfg(all(test, chansel_loom))]
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap()
}

#[cfg(not(all(test, chansel_loom)))]
pub(crate) fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[cfg(all(test, chansel_loom))]
pub(crate) fn wait<'a, T>(condvar: &Condvar, guard: MutexGuard<'a, T>) -> MutexGuard<'a, T> {
    condvar.wait(guard).unwrap()
}

#[cfg(not(all(test, chansel_loom)))]
pub(crate) fn wait<'a, T>(condvar: &Condvar, guard: MutexGuard<'a, T>) -> MutexGuard<'a, T> {
    condvar
        .wait(guard)
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

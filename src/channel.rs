//! The channel itself: a bounded buffer plus the mutex/condvar pair that
//! makes send/receive/close safe across any number of threads.

use crate::error::{CloseError, DestroyError, RecvError, SendError, TryRecvError, TrySendError};
use crate::notifier::Notifier;
use crate::ring_buffer::RingBuffer;
use crate::sync::{self, Arc, Condvar, Mutex};

struct State<T> {
    buffer: RingBuffer<T>,
    closed: bool,
    select_waiters: Vec<Arc<Notifier>>,
}

struct Inner<T> {
    state: Mutex<State<T>>,
    /// Notified after a successful enqueue; wakes blocked receivers.
    item_available: Condvar,
    /// Notified after a successful dequeue; wakes blocked senders.
    space_available: Condvar,
}

/// A bounded, multi-producer multi-consumer channel.
///
/// `Channel<T>` is a single `Arc`-backed handle: cloning it does not create a
/// second channel, it creates another handle to the same one, so any number
/// of threads can hold a clone and call `send`/`recv` concurrently. There is
/// no separate sender/receiver split; every handle can do either, matching
/// a design where `send`, `recv`, `close`, and `select` all operate directly
/// on a channel value.
pub struct Channel<T> {
    inner: Arc<Inner<T>>,
}

impl<T> Clone for Channel<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Channel<T> {
    /// Creates a new open channel with room for `capacity` buffered values.
    ///
    /// Capacity 0 is allowed: such a channel is always full, so every send
    /// (blocking or not) fails until the channel is closed. This is not a
    /// rendezvous channel.
    pub fn new(capacity: usize) -> Self {
        Self {
            inner: Arc::new(Inner {
                state: Mutex::new(State {
                    buffer: RingBuffer::new(capacity),
                    closed: false,
                    select_waiters: Vec::new(),
                }),
                item_available: Condvar::new(),
                space_available: Condvar::new(),
            }),
        }
    }

    /// Sends `value`, blocking while the buffer is full and the channel is
    /// open. Returns the value back if the channel is or becomes closed.
    pub fn send(&self, mut value: T) -> Result<(), SendError<T>> {
        let mut state = sync::lock(&self.inner.state);
        loop {
            if state.closed {
                return Err(SendError::Closed(value));
            }
            match state.buffer.push(value) {
                Ok(()) => {
                    self.notify(state, &self.inner.item_available);
                    return Ok(());
                }
                Err(rejected) => {
                    value = rejected;
                    state = sync::wait(&self.inner.space_available, state);
                }
            }
        }
    }

    /// Receives a value, blocking while the buffer is empty and the channel
    /// is open. Returns a closed error once the channel is closed, even if
    /// values were still buffered at the moment it closed.
    pub fn recv(&self) -> Result<T, RecvError> {
        let mut state = sync::lock(&self.inner.state);
        loop {
            if state.closed {
                return Err(RecvError::Closed);
            }
            match state.buffer.pop() {
                Some(value) => {
                    self.notify(state, &self.inner.space_available);
                    return Ok(value);
                }
                None => {
                    state = sync::wait(&self.inner.item_available, state);
                }
            }
        }
    }

    /// Attempts to send without blocking.
    pub fn try_send(&self, value: T) -> Result<(), TrySendError<T>> {
        let mut state = sync::lock(&self.inner.state);
        if state.closed {
            return Err(TrySendError::Closed(value));
        }
        match state.buffer.push(value) {
            Ok(()) => {
                self.notify(state, &self.inner.item_available);
                Ok(())
            }
            Err(rejected) => Err(TrySendError::Full(rejected)),
        }
    }

    /// Attempts to receive without blocking.
    pub fn try_recv(&self) -> Result<T, TryRecvError> {
        let mut state = sync::lock(&self.inner.state);
        if state.closed {
            return Err(TryRecvError::Closed);
        }
        match state.buffer.pop() {
            Some(value) => {
                self.notify(state, &self.inner.space_available);
                Ok(value)
            }
            None => Err(TryRecvError::Empty),
        }
    }

    /// Closes the channel. Every thread currently blocked in `send`, `recv`,
    /// or `select` on this channel wakes and observes the closed state.
    pub fn close(&self) -> Result<(), CloseError> {
        let mut state = sync::lock(&self.inner.state);
        if state.closed {
            return Err(CloseError::AlreadyClosed);
        }
        state.closed = true;
        for waiter in &state.select_waiters {
            waiter.post();
        }
        // Drop the guard before waking blocked send/recv callers, since they
        // reacquire this same lock as soon as they wake.
        drop(state);
        self.inner.item_available.notify_all();
        self.inner.space_available.notify_all();
        Ok(())
    }

    /// Validates the destroy contract: a channel must be closed before it
    /// can be destroyed. Actual deallocation happens through ordinary `Arc`
    /// drop once every handle goes out of scope; this call exists only to
    /// reject the caller bug of destroying a still-open channel.
    pub fn destroy(&self) -> Result<(), DestroyError> {
        let state = sync::lock(&self.inner.state);
        if !state.closed {
            return Err(DestroyError::NotClosed);
        }
        Ok(())
    }

    /// True once `close` has been called.
    pub fn is_closed(&self) -> bool {
        sync::lock(&self.inner.state).closed
    }

    /// Number of values currently buffered.
    pub fn len(&self) -> usize {
        sync::lock(&self.inner.state).buffer.len()
    }

    /// True if no values are currently buffered.
    pub fn is_empty(&self) -> bool {
        sync::lock(&self.inner.state).buffer.is_empty()
    }

    /// The buffer capacity this channel was created with.
    pub fn capacity(&self) -> usize {
        sync::lock(&self.inner.state).buffer.capacity()
    }

    /// Number of `select` notifiers currently registered on this channel.
    /// Exposed for tests and introspection.
    pub fn waiter_count(&self) -> usize {
        sync::lock(&self.inner.state).select_waiters.len()
    }

    /// Posts every attached select waiter, then drops the lock before
    /// waking the complementary condvar, since the thread it wakes
    /// reacquires this same lock as soon as it wakes.
    fn notify(&self, state: sync::MutexGuard<'_, State<T>>, cv: &Condvar) {
        for waiter in &state.select_waiters {
            waiter.post();
        }
        drop(state);
        cv.notify_one();
    }

    /// Registers `notifier` on this channel's waiter list, unless the
    /// channel is already closed. Used by [`crate::select`]; not part of
    /// the public API.
    pub(crate) fn register_waiter(&self, notifier: &Arc<Notifier>) -> Result<(), ()> {
        let mut state = sync::lock(&self.inner.state);
        if state.closed {
            return Err(());
        }
        state.select_waiters.push(Arc::clone(notifier));
        Ok(())
    }

    /// Removes `notifier` from this channel's waiter list by identity. A
    /// no-op if it was never registered (or already removed).
    pub(crate) fn unregister_waiter(&self, notifier: &Arc<Notifier>) {
        let mut state = sync::lock(&self.inner.state);
        state.select_waiters.retain(|w| !Arc::ptr_eq(w, notifier));
    }
}

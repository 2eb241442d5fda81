//! Error types returned by [`crate::Channel`] and [`crate::select`].
//!
//! Each operation gets its own small enum rather than one shared status code,
//! so the type system rules out states that cannot occur for that operation
//! (a blocking `recv`, for instance, can never report `Full`). Where a
//! rejected value would otherwise be lost (a non-blocking send against a
//! full or closed channel), the error carries it back to the caller.
//!
//! A `Gen` variant is kept on every enum for parity with the source status
//! taxonomy's generic primitive-failure code. This crate cannot currently
//! produce it: the only primitive capable of failing is a poisoned mutex,
//! and every lock acquisition in this crate recovers from poisoning via
//! `PoisonError::into_inner` instead of propagating it, because none of the
//! critical sections guarded by these locks can panic. The variant stays
//! public so callers matching exhaustively don't need to special-case a
//! status this implementation happens not to produce today.

use std::fmt;

/// A blocking [`crate::Channel::send`] could not complete.
#[derive(PartialEq, Eq, Clone, Copy)]
pub enum SendError<T> {
    /// The channel was already closed, or was closed while the call blocked.
    /// The value that could not be sent is returned.
    Closed(T),
    /// A synchronization primitive failed unrecoverably.
    Gen,
}

impl<T> fmt::Debug for SendError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SendError::Closed(_) => f.write_str("SendError::Closed(..)"),
            SendError::Gen => f.write_str("SendError::Gen"),
        }
    }
}

impl<T> fmt::Display for SendError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SendError::Closed(_) => "sending on a closed channel".fmt(f),
            SendError::Gen => "synchronization primitive failed".fmt(f),
        }
    }
}

impl<T> std::error::Error for SendError<T> {}

/// A non-blocking [`crate::Channel::try_send`] could not complete.
#[derive(PartialEq, Eq, Clone, Copy)]
pub enum TrySendError<T> {
    /// The buffer is at capacity; the value is returned unchanged.
    Full(T),
    /// The channel is closed; the value is returned unchanged.
    Closed(T),
    /// A synchronization primitive failed unrecoverably.
    Gen,
}

impl<T> fmt::Debug for TrySendError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrySendError::Full(_) => f.write_str("TrySendError::Full(..)"),
            TrySendError::Closed(_) => f.write_str("TrySendError::Closed(..)"),
            TrySendError::Gen => f.write_str("TrySendError::Gen"),
        }
    }
}

impl<T> fmt::Display for TrySendError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrySendError::Full(_) => "sending on a full channel".fmt(f),
            TrySendError::Closed(_) => "sending on a closed channel".fmt(f),
            TrySendError::Gen => "synchronization primitive failed".fmt(f),
        }
    }
}

impl<T> std::error::Error for TrySendError<T> {}

/// A blocking [`crate::Channel::recv`] could not complete.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RecvError {
    /// The channel was already closed, or was closed while the call
    /// blocked. This is returned even if the buffer still held unreceived
    /// values at the moment the channel closed.
    Closed,
    /// A synchronization primitive failed unrecoverably.
    Gen,
}

impl fmt::Display for RecvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecvError::Closed => "receiving on a closed channel".fmt(f),
            RecvError::Gen => "synchronization primitive failed".fmt(f),
        }
    }
}

impl std::error::Error for RecvError {}

/// A non-blocking [`crate::Channel::try_recv`] could not complete.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TryRecvError {
    /// The buffer is empty and the channel is still open.
    Empty,
    /// The channel is closed.
    Closed,
    /// A synchronization primitive failed unrecoverably.
    Gen,
}

impl fmt::Display for TryRecvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TryRecvError::Empty => "receiving on an empty channel".fmt(f),
            TryRecvError::Closed => "receiving on a closed channel".fmt(f),
            TryRecvError::Gen => "synchronization primitive failed".fmt(f),
        }
    }
}

impl std::error::Error for TryRecvError {}

/// [`crate::Channel::close`] could not complete.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CloseError {
    /// The channel was already closed.
    AlreadyClosed,
}

impl fmt::Display for CloseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CloseError::AlreadyClosed => "channel is already closed".fmt(f),
        }
    }
}

impl std::error::Error for CloseError {}

/// [`crate::Channel::destroy`] could not complete.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DestroyError {
    /// `destroy` was called on a channel that has not been closed yet.
    /// Destroying an open channel is a caller bug; this is refused rather
    /// than forced.
    NotClosed,
}

impl fmt::Display for DestroyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DestroyError::NotClosed => "channel must be closed before it can be destroyed".fmt(f),
        }
    }
}

impl std::error::Error for DestroyError {}

/// A [`crate::select`] call terminated at a specific entry without
/// completing that entry's operation.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SelectError {
    /// The entry's channel is closed.
    Closed,
    /// A synchronization primitive failed unrecoverably.
    Gen,
}

impl fmt::Display for SelectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectError::Closed => "select entry's channel is closed".fmt(f),
            SelectError::Gen => "synchronization primitive failed".fmt(f),
        }
    }
}

impl std::error::Error for SelectError {}

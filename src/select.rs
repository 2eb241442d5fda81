//! Multi-channel select: block until the first of several send/receive
//! operations becomes possible, or until one of the involved channels
//! closes.

use crate::channel::Channel;
use crate::error::{SelectError, TryRecvError, TrySendError};
use crate::notifier::Notifier;
use crate::sync::Arc;

/// What a [`SelectEntry`] wants to do on its channel.
enum Direction<T> {
    /// Send `value` if the channel has room.
    Send(Option<T>),
    /// Receive a value if the channel has one buffered.
    Recv,
}

/// One arm of a [`select`] call: a channel paired with the operation to
/// attempt on it. The index of an entry within the slice passed to
/// `select` both orders polling and breaks ties among simultaneously-ready
/// entries (lowest index wins).
pub struct SelectEntry<'a, T> {
    channel: &'a Channel<T>,
    direction: Direction<T>,
}

impl<'a, T> SelectEntry<'a, T> {
    /// An entry that attempts to send `value` on `channel`.
    pub fn send(channel: &'a Channel<T>, value: T) -> Self {
        Self {
            channel,
            direction: Direction::Send(Some(value)),
        }
    }

    /// An entry that attempts to receive from `channel`.
    pub fn recv(channel: &'a Channel<T>) -> Self {
        Self {
            channel,
            direction: Direction::Recv,
        }
    }
}

/// The outcome of the entry [`select`] chose.
#[derive(Debug, PartialEq, Eq)]
pub enum Selected<T> {
    /// The chosen entry was a `Send`, and it completed.
    Sent,
    /// The chosen entry was a `Recv`, and it completed with this value.
    Received(T),
}

/// Blocks until exactly one of `entries` completes, or until one of their
/// channels is found closed, and reports which entry by index.
///
/// Entries that are not chosen are left untouched: an unchosen `Send` entry
/// still owns its value (nothing is dropped), and an unchosen `Recv` entry
/// is simply never attempted. Only the winning entry's effect is visible.
///
/// On success, `Ok((i, outcome))`: entry `i`'s operation has already
/// happened, atomically, as of this call returning. On failure,
/// `Err((i, err))`: entry `i`'s channel was observed closed (or a
/// primitive failed) before any entry could complete.
pub fn select<T>(
    entries: &mut [SelectEntry<'_, T>],
) -> Result<(usize, Selected<T>), (usize, SelectError)> {
    let notifier = Arc::new(Notifier::new());

    // Registration phase: lock one channel at a time, in index order. On
    // the first channel found closed, every channel registered so far has
    // its notifier removed before we return; no partial registration is
    // left behind for a select call that never proceeds to poll.
    for (i, entry) in entries.iter().enumerate() {
        if entry.channel.register_waiter(&notifier).is_err() {
            for prior in &entries[..i] {
                prior.channel.unregister_waiter(&notifier);
            }
            return Err((i, SelectError::Closed));
        }
    }

    let result = loop {
        let mut outcome = None;

        for (i, entry) in entries.iter_mut().enumerate() {
            match &mut entry.direction {
                Direction::Send(slot) => {
                    let value = slot
                        .take()
                        .expect("select entry polled again after completing");
                    match entry.channel.try_send(value) {
                        Ok(()) => {
                            outcome = Some(Ok((i, Selected::Sent)));
                            break;
                        }
                        Err(TrySendError::Full(value)) => {
                            *slot = Some(value);
                        }
                        Err(TrySendError::Closed(_value)) => {
                            outcome = Some(Err((i, SelectError::Closed)));
                            break;
                        }
                        Err(TrySendError::Gen) => {
                            outcome = Some(Err((i, SelectError::Gen)));
                            break;
                        }
                    }
                }
                Direction::Recv => match entry.channel.try_recv() {
                    Ok(value) => {
                        outcome = Some(Ok((i, Selected::Received(value))));
                        break;
                    }
                    Err(TryRecvError::Empty) => {}
                    Err(TryRecvError::Closed) => {
                        outcome = Some(Err((i, SelectError::Closed)));
                        break;
                    }
                    Err(TryRecvError::Gen) => {
                        outcome = Some(Err((i, SelectError::Gen)));
                        break;
                    }
                },
            }
        }

        if let Some(outcome) = outcome {
            break outcome;
        }

        // Nothing was ready this round. Sleep until some attached channel
        // makes progress (a send, a receive, or a close) posts to us.
        notifier.wait();
    };

    for entry in entries.iter() {
        entry.channel.unregister_waiter(&notifier);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn picks_lowest_ready_index() {
        let a: Channel<u8> = Channel::new(1); // empty, ready for send
        let b: Channel<u8> = Channel::new(1);
        b.send(42).unwrap(); // ready for recv

        let mut entries = [SelectEntry::send(&a, 7), SelectEntry::recv(&b)];
        let (index, outcome) = select(&mut entries).unwrap();
        assert_eq!(index, 0);
        assert_eq!(outcome, Selected::Sent);
        assert_eq!(a.try_recv(), Ok(7));
    }

    #[test]
    fn reordering_entries_still_picks_lowest_index() {
        let a: Channel<u8> = Channel::new(1);
        let b: Channel<u8> = Channel::new(1);
        b.send(42).unwrap();

        // `b`'s recv is now entry 0.
        let mut entries = [SelectEntry::recv(&b), SelectEntry::send(&a, 7)];
        let (index, outcome) = select(&mut entries).unwrap();
        assert_eq!(index, 0);
        assert_eq!(outcome, Selected::Received(42));
    }

    #[test]
    fn blocks_then_wakes_on_remote_send() {
        let a: Channel<u8> = Channel::new(1);
        let b: Channel<u8> = Channel::new(1);

        let b_for_thread = b.clone();
        let waiter = thread::spawn(move || {
            let mut entries = [SelectEntry::recv(&a), SelectEntry::recv(&b_for_thread)];
            select(&mut entries).map(|(i, outcome)| {
                (
                    i,
                    match outcome {
                        Selected::Received(v) => v,
                        Selected::Sent => unreachable!(),
                    },
                )
            })
        });

        thread::sleep(Duration::from_millis(50));
        b.send(99).unwrap();

        assert_eq!(waiter.join().unwrap(), Ok((1, 99)));
    }

    #[test]
    fn closed_channel_detected_at_registration() {
        let a: Channel<u8> = Channel::new(1);
        let b: Channel<u8> = Channel::new(1);
        b.close().unwrap();

        let mut entries = [SelectEntry::recv(&a), SelectEntry::recv(&b)];
        let err = select(&mut entries).unwrap_err();
        assert_eq!(err, (1, SelectError::Closed));

        // The registration on `a` must have been cleaned up; nothing is
        // left dangling in its waiter list.
        assert_eq!(a.waiter_count(), 0);
    }

    #[test]
    fn unchosen_send_entry_keeps_its_value() {
        let full: Channel<u8> = Channel::new(1);
        full.send(1).unwrap(); // full, send would block

        let ready: Channel<u8> = Channel::new(1);

        let mut entries = [SelectEntry::send(&full, 99), SelectEntry::recv(&ready)];
        ready.send(5).unwrap();

        let (index, outcome) = select(&mut entries).unwrap();
        assert_eq!(index, 1);
        assert_eq!(outcome, Selected::Received(5));

        // `full`'s send was never attempted; value 99 is still unsent.
        assert_eq!(full.try_send(2), Err(TrySendError::Full(2)));
    }
}

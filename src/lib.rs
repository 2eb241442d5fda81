//! A bounded, multi-producer multi-consumer channel with blocking,
//! non-blocking, and multi-channel `select` operations.
//!
//! # Example
//!
//! ```
//! use chansel::Channel;
//!
//! let ch = Channel::new(1);
//! ch.send(42).unwrap();
//! assert_eq!(ch.recv(), Ok(42));
//! ```
//!
//! # Closing
//!
//! A channel is closed by calling [`Channel::close`] on any handle. Once
//! closed, every blocked `send`, `recv`, and `select` involving that channel
//! wakes and reports a closed error. Receiving on a closed channel always
//! reports closed, even if values are still buffered; closing discards
//! whatever had not yet been received.
//!
//! # Select
//!
//! [`select`] waits on several channels at once and completes as soon as any
//! one of several prespecified send/receive operations becomes possible:
//!
//! ```
//! use chansel::{select, Channel, SelectEntry, Selected};
//!
//! let a: Channel<u8> = Channel::new(1);
//! let b: Channel<u8> = Channel::new(1);
//! b.send(7).unwrap();
//!
//! let mut entries = [SelectEntry::send(&a, 1), SelectEntry::recv(&b)];
//! match select(&mut entries) {
//!     Ok((0, Selected::Sent)) => println!("sent on a"),
//!     Ok((1, Selected::Received(v))) => println!("received {v} from b"),
//!     _ => unreachable!(),
//! }
//! ```

mod channel;
mod error;
mod notifier;
mod ring_buffer;
mod select;
mod sync;

pub use channel::Channel;
pub use error::{
    CloseError, DestroyError, RecvError, SelectError, SendError, TryRecvError, TrySendError,
};
pub use select::{select, Selected, SelectEntry};

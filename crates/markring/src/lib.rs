//! A fixed-capacity byte ring with overwrite-on-full semantics and a
//! rewindable read mark.
//!
//! The writer never blocks: when the ring is saturated the oldest unread
//! byte is dropped to make room. The reader can [`set_marker`] at any point
//! and later [`rewind`] to replay everything consumed since, which makes
//! speculative parsing of partially received frames straightforward.
//!
//! The ring never allocates. Storage is any `AsRef<[u8]> + AsMut<[u8]>`
//! value: an array, a `Vec<u8>`, or a caller-owned `&mut [u8]`.
//!
//! ```rust
//! use markring::RingBuffer;
//!
//! let mut ring = RingBuffer::new([0u8; 8])?;
//! ring.write_bytes(b"HDR");
//!
//! ring.set_marker();
//! assert_eq!(ring.read_byte(), Some(b'H'));
//! assert_eq!(ring.read_byte(), Some(b'D'));
//! // Not enough of the frame yet: put it back.
//! ring.rewind();
//! assert_eq!(ring.read_byte(), Some(b'H'));
//! # Ok::<(), markring::Error>(())
//! ```
//!
//! For a writer and a reader on different threads, wrap the ring in a
//! [`SharedRingBuffer`] and pick a [`Lock`] strategy at construction time.
//!
//! [`set_marker`]: RingBuffer::set_marker
//! [`rewind`]: RingBuffer::rewind

#![no_std]

#[cfg(any(test, feature = "fuzzing"))]
extern crate alloc;

#[cfg(any(test, feature = "std"))]
extern crate std;

#[macro_use]
mod log;

mod cursor;
mod error;
mod lock;
mod ring;
mod shared;
mod status;

#[cfg(any(test, feature = "fuzzing"))]
pub mod model;

#[cfg(test)]
mod tests;

pub use cursor::Cursors;
pub use error::Error;
#[cfg(feature = "spin")]
pub use lock::SpinLock;
#[cfg(feature = "std")]
pub use lock::StdLock;
pub use lock::{Lock, Unsynchronized};
pub use ring::RingBuffer;
#[cfg(feature = "spin")]
pub use shared::SpinRingBuffer;
#[cfg(feature = "std")]
pub use shared::StdRingBuffer;
pub use shared::{LocalRingBuffer, SharedRingBuffer};
pub use status::{BatchStatus, WriteStatus};

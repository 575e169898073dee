//! Reference model of the ring over absolute stream positions.
//!
//! The model keeps every byte ever written and tracks the cursors as
//! offsets into that history, so it can never confuse a replayed byte with
//! one that has since been overwritten in storage. Tests and the fuzz
//! target drive it in lock-step with [`RingBuffer`](crate::RingBuffer).

use alloc::vec::Vec;

use crate::{Cursors, WriteStatus};

/// Unbounded-history twin of a ring with `capacity` slots.
#[derive(Debug, Clone)]
pub struct Model {
    capacity: usize,
    history: Vec<u8>,
    read: usize,
    mark: usize,
}

impl Model {
    /// A model of an empty ring with `capacity` slots (at least one).
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "model needs at least one slot");
        Self {
            capacity,
            history: Vec::new(),
            read: 0,
            mark: 0,
        }
    }

    fn write(&self) -> usize {
        self.history.len()
    }

    /// Appends `byte`, dragging the mark and the reader along once the
    /// writer is a full lap ahead of them.
    pub fn write_byte(&mut self, byte: u8) -> WriteStatus {
        self.history.push(byte);
        if self.write() - self.mark == self.capacity {
            self.mark += 1;
        }
        if self.write() - self.read == self.capacity {
            self.read += 1;
            return WriteStatus::Overwritten;
        }
        WriteStatus::Stored
    }

    /// Consumes the next byte of history, if any is unread.
    pub fn read_byte(&mut self) -> Option<u8> {
        let byte = *self.history.get(self.read)?;
        self.read += 1;
        Some(byte)
    }

    /// Mark at the current read offset.
    pub fn set_marker(&mut self) {
        self.mark = self.read;
    }

    /// Read offset back to the mark.
    pub fn rewind(&mut self) {
        self.read = self.mark;
    }

    /// Whether every written byte has been consumed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.read == self.write()
    }

    /// Unread bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.write() - self.read
    }

    /// Slots left before a write drops unread data.
    #[must_use]
    pub fn free_space(&self) -> usize {
        self.capacity - 1 - self.len()
    }

    /// Bytes a rewind would replay.
    #[must_use]
    pub fn pending_replay(&self) -> usize {
        self.read - self.mark
    }

    /// The cursors a ring in the same state would report.
    #[must_use]
    pub fn cursors(&self) -> Cursors {
        Cursors {
            capacity: self.capacity,
            write: self.write() % self.capacity,
            read: self.read % self.capacity,
            mark: self.mark % self.capacity,
        }
    }
}

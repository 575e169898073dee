use core::fmt;

use crate::{BatchStatus, Cursors, Error, WriteStatus};

/// A fixed-capacity byte ring that overwrites its oldest unread byte when
/// full and can rewind its reader to a saved mark.
///
/// The ring takes ownership of its storage for its whole lifetime. Lending a
/// caller-owned region works through `&mut [u8]`; [`into_inner`] hands the
/// storage back.
///
/// All methods take `&mut self`. See [`SharedRingBuffer`] for a writer and a
/// reader on separate threads.
///
/// [`into_inner`]: RingBuffer::into_inner
/// [`SharedRingBuffer`]: crate::SharedRingBuffer
pub struct RingBuffer<S> {
    storage: S,
    cursors: Cursors,
}

impl<S> RingBuffer<S>
where
    S: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Binds a ring to `storage`, with every cursor at the first slot.
    ///
    /// The capacity is the storage length at construction; the storage must
    /// not change length afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyRegion`] if `storage` holds no bytes.
    pub fn new(storage: S) -> Result<Self, Error> {
        let capacity = storage.as_ref().len();
        if capacity == 0 {
            return Err(Error::EmptyRegion);
        }
        debug!(capacity, "ring buffer bound to region");
        Ok(Self {
            storage,
            cursors: Cursors::new(capacity),
        })
    }

    /// Number of slots in the backing region.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.cursors.capacity
    }

    /// Whether every written byte has been consumed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cursors.is_empty()
    }

    /// Number of unread bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cursors.len()
    }

    /// Slots that can be written before the next write drops unread data.
    ///
    /// Purely advisory: writes never consult it and never refuse.
    #[must_use]
    pub fn free_space(&self) -> usize {
        self.cursors.free_space()
    }

    /// Bytes that [`rewind`](Self::rewind) would put back in front of the
    /// reader.
    #[must_use]
    pub fn pending_replay(&self) -> usize {
        self.cursors.pending_replay()
    }

    /// A copy of the current cursor positions.
    #[must_use]
    pub fn cursors(&self) -> Cursors {
        self.cursors
    }

    /// The raw backing region, consumed and stale slots included.
    #[must_use]
    pub fn region(&self) -> &[u8] {
        self.storage.as_ref()
    }

    /// Stores `byte` and advances the write cursor.
    ///
    /// If the write cursor lands on the mark, the mark moves forward one slot
    /// so a later rewind cannot replay a byte that is about to be replaced.
    /// If it lands on the read cursor, the oldest unread byte is dropped and
    /// [`WriteStatus::Overwritten`] is returned.
    pub fn write_byte(&mut self, byte: u8) -> WriteStatus {
        let cursors = &mut self.cursors;
        self.storage.as_mut()[cursors.write] = byte;
        cursors.write = cursors.step(cursors.write);

        if cursors.write == cursors.mark {
            cursors.mark = cursors.step(cursors.mark);
            trace!(mark = cursors.mark, "writer reached the mark, mark displaced");
        }

        if cursors.write == cursors.read {
            trace!(slot = cursors.read, "oldest unread byte dropped");
            cursors.read = cursors.step(cursors.read);
            return WriteStatus::Overwritten;
        }

        WriteStatus::Stored
    }

    /// Writes every byte of `bytes` in order.
    ///
    /// The batch is not atomic with respect to overwrite: bytes written
    /// early in the batch can be dropped by bytes written later in it.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> BatchStatus {
        bytes.iter().map(|&byte| self.write_byte(byte)).collect()
    }

    /// Consumes the next unread byte, or returns `None` if the ring is
    /// empty. An empty read leaves every cursor where it was.
    pub fn read_byte(&mut self) -> Option<u8> {
        if self.cursors.is_empty() {
            return None;
        }
        let byte = self.storage.as_ref()[self.cursors.read];
        self.cursors.read = self.cursors.step(self.cursors.read);
        Some(byte)
    }

    /// Consumes up to `dst.len()` bytes into `dst`, returning how many were
    /// copied.
    pub fn read_into(&mut self, dst: &mut [u8]) -> usize {
        let mut copied = 0;
        for slot in dst.iter_mut() {
            let Some(byte) = self.read_byte() else {
                break;
            };
            *slot = byte;
            copied += 1;
        }
        copied
    }

    /// Saves the current read position, replacing any earlier mark.
    pub fn set_marker(&mut self) {
        self.cursors.mark = self.cursors.read;
    }

    /// Moves the read cursor back to the mark.
    ///
    /// Everything consumed since the mark was set, minus whatever the writer
    /// has since displaced the mark past, becomes readable again.
    pub fn rewind(&mut self) {
        trace!(replay = self.cursors.pending_replay(), "rewinding to mark");
        self.cursors.read = self.cursors.mark;
    }

    /// Releases the backing storage.
    pub fn into_inner(self) -> S {
        self.storage
    }
}

impl<S> Iterator for RingBuffer<S>
where
    S: AsRef<[u8]> + AsMut<[u8]>,
{
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_byte()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        // The writer side is `&mut self` too, so the count cannot grow while
        // iterating.
        let len = self.len();
        (len, Some(len))
    }
}

impl<S> fmt::Debug for RingBuffer<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingBuffer")
            .field("cursors", &self.cursors)
            .finish_non_exhaustive()
    }
}

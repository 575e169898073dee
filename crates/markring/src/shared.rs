use core::{fmt, marker::PhantomData};

use crate::{BatchStatus, Cursors, Error, Lock, RingBuffer, Unsynchronized, WriteStatus};

/// A [`RingBuffer`] guarded by the lock strategy `L`, usable through `&self`
/// by one writer and one reader.
///
/// Each method is its own critical section. Nothing spans calls: an
/// [`is_empty`] check followed by a read is two sections, and
/// [`write_bytes`] takes the lock once per byte. Use [`with_locked`] when a
/// compound sequence must not interleave with the other side.
///
/// The strategy is picked at construction, usually through one of the
/// aliases:
///
/// ```rust
/// # #[cfg(feature = "spin")] {
/// use markring::SpinRingBuffer;
///
/// let ring: SpinRingBuffer<[u8; 64]> = SpinRingBuffer::new([0; 64])?;
/// std::thread::scope(|s| {
///     s.spawn(|| ring.write_bytes(b"ping"));
/// });
/// assert_eq!(ring.len(), 4);
/// # }
/// # Ok::<(), markring::Error>(())
/// ```
///
/// [`is_empty`]: SharedRingBuffer::is_empty
/// [`write_bytes`]: SharedRingBuffer::write_bytes
/// [`with_locked`]: SharedRingBuffer::with_locked
pub struct SharedRingBuffer<S, L> {
    lock: L,
    storage: PhantomData<fn() -> S>,
}

/// A ring for a single thread, with a no-op lock.
pub type LocalRingBuffer<S> = SharedRingBuffer<S, Unsynchronized<RingBuffer<S>>>;

/// A ring guarded by a spinning lock; available without `std`.
#[cfg(feature = "spin")]
pub type SpinRingBuffer<S> = SharedRingBuffer<S, crate::SpinLock<RingBuffer<S>>>;

/// A ring guarded by `std::sync::Mutex`.
#[cfg(feature = "std")]
pub type StdRingBuffer<S> = SharedRingBuffer<S, crate::StdLock<RingBuffer<S>>>;

impl<S, L> SharedRingBuffer<S, L>
where
    S: AsRef<[u8]> + AsMut<[u8]>,
    L: Lock<RingBuffer<S>>,
{
    /// Binds a guarded ring to `storage`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyRegion`] if `storage` holds no bytes.
    pub fn new(storage: S) -> Result<Self, Error> {
        RingBuffer::new(storage).map(Self::from_ring)
    }

    /// Guards an existing ring, keeping its cursors.
    pub fn from_ring(ring: RingBuffer<S>) -> Self {
        Self {
            lock: L::new(ring),
            storage: PhantomData,
        }
    }

    /// See [`RingBuffer::capacity`].
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.lock.with(|ring| ring.capacity())
    }

    /// See [`RingBuffer::is_empty`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock.with(|ring| ring.is_empty())
    }

    /// See [`RingBuffer::len`].
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock.with(|ring| ring.len())
    }

    /// See [`RingBuffer::free_space`].
    #[must_use]
    pub fn free_space(&self) -> usize {
        self.lock.with(|ring| ring.free_space())
    }

    /// See [`RingBuffer::pending_replay`].
    #[must_use]
    pub fn pending_replay(&self) -> usize {
        self.lock.with(|ring| ring.pending_replay())
    }

    /// See [`RingBuffer::cursors`].
    #[must_use]
    pub fn cursors(&self) -> Cursors {
        self.lock.with(|ring| ring.cursors())
    }

    /// See [`RingBuffer::write_byte`].
    pub fn write_byte(&self, byte: u8) -> WriteStatus {
        self.lock.with(|ring| ring.write_byte(byte))
    }

    /// Writes `bytes` in order, locking separately for each byte so the
    /// reader can make progress during a long batch.
    pub fn write_bytes(&self, bytes: &[u8]) -> BatchStatus {
        bytes.iter().map(|&byte| self.write_byte(byte)).collect()
    }

    /// See [`RingBuffer::read_byte`]. The emptiness check and the read happen
    /// in the same critical section.
    pub fn read_byte(&self) -> Option<u8> {
        self.lock.with(RingBuffer::read_byte)
    }

    /// Consumes up to `dst.len()` bytes, one critical section per byte.
    pub fn read_into(&self, dst: &mut [u8]) -> usize {
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

    /// See [`RingBuffer::set_marker`].
    pub fn set_marker(&self) {
        self.lock.with(RingBuffer::set_marker);
    }

    /// See [`RingBuffer::rewind`].
    pub fn rewind(&self) {
        self.lock.with(RingBuffer::rewind);
    }

    /// Runs `f` against the ring inside a single critical section.
    ///
    /// `f` must not call back into this `SharedRingBuffer`.
    pub fn with_locked<R>(&self, f: impl FnOnce(&mut RingBuffer<S>) -> R) -> R {
        self.lock.with(f)
    }

    /// Removes the lock and returns the ring with its cursors intact.
    pub fn into_inner(self) -> RingBuffer<S> {
        self.lock.into_inner()
    }
}

impl<S, L: fmt::Debug> fmt::Debug for SharedRingBuffer<S, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedRingBuffer")
            .field("lock", &self.lock)
            .finish()
    }
}

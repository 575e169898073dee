//! Cursor arithmetic on the cyclic domain `[0, capacity)`.

/// A snapshot of a ring's cursors.
///
/// Every position is an index into the backing region and is always
/// strictly less than `capacity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cursors {
    /// Number of slots in the backing region.
    pub capacity: usize,
    /// Next slot to be written.
    pub write: usize,
    /// Next slot to be consumed.
    pub read: usize,
    /// Read position restored by a rewind.
    pub mark: usize,
}

impl Cursors {
    pub(crate) const fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0);
        Self {
            capacity,
            write: 0,
            read: 0,
            mark: 0,
        }
    }

    /// The slot after `pos`, wrapping past the end of the region.
    #[inline]
    pub(crate) const fn step(&self, pos: usize) -> usize {
        if pos + 1 == self.capacity { 0 } else { pos + 1 }
    }

    /// Distance travelled going forward from `from` to `to`.
    #[inline]
    const fn span(&self, from: usize, to: usize) -> usize {
        if to >= from {
            to - from
        } else {
            self.capacity - from + to
        }
    }

    /// `read == write`. Fullness never shows up here: the write path drops
    /// the oldest byte before the cursors could meet from behind.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.read == self.write
    }

    /// Unread bytes between `read` and `write`.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.span(self.read, self.write)
    }

    /// Slots that can be written before a write starts dropping unread data.
    ///
    /// One slot is held back so that a completely full ring and an empty ring
    /// remain distinguishable, hence at most `capacity - 1`.
    #[must_use]
    pub const fn free_space(&self) -> usize {
        let total = self.capacity - 1;
        if self.write == self.read {
            total
        } else if self.write > self.read {
            total - (self.write - self.read)
        } else {
            self.read - self.write - 1
        }
    }

    /// Bytes a rewind would put back in front of the reader.
    #[must_use]
    pub const fn pending_replay(&self) -> usize {
        self.span(self.mark, self.read)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::Cursors;

    fn at(capacity: usize, write: usize, read: usize, mark: usize) -> Cursors {
        Cursors {
            capacity,
            write,
            read,
            mark,
        }
    }

    #[rstest]
    #[case::empty_at_origin(at(11, 0, 0, 0), 10)]
    #[case::empty_mid_region(at(11, 7, 7, 7), 10)]
    #[case::write_ahead(at(11, 4, 1, 1), 7)]
    #[case::write_at_end(at(11, 10, 0, 0), 0)]
    #[case::wrapped(at(11, 2, 5, 5), 2)]
    #[case::wrapped_full(at(11, 4, 5, 5), 0)]
    #[case::single_slot(at(1, 0, 0, 0), 0)]
    fn free_space_accounts_for_reserved_slot(#[case] cursors: Cursors, #[case] expected: usize) {
        assert_eq!(cursors.free_space(), expected);
        assert_eq!(cursors.len() + cursors.free_space(), cursors.capacity - 1);
    }

    #[test]
    fn step_wraps_at_capacity() {
        let cursors = Cursors::new(3);
        assert_eq!(cursors.step(0), 1);
        assert_eq!(cursors.step(1), 2);
        assert_eq!(cursors.step(2), 0);
        assert_eq!(Cursors::new(1).step(0), 0);
    }

    #[test]
    fn pending_replay_follows_mark_around_the_end() {
        assert_eq!(at(8, 3, 3, 3).pending_replay(), 0);
        assert_eq!(at(8, 6, 5, 2).pending_replay(), 3);
        assert_eq!(at(8, 2, 1, 6).pending_replay(), 3);
    }
}

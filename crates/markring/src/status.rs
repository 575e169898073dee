/// Outcome of writing a single byte.
///
/// Writes always succeed; the status only tells the caller whether unread
/// data was sacrificed to make room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WriteStatus {
    /// The byte was stored without touching unread data.
    Stored,
    /// The ring was saturated and its oldest unread byte was dropped.
    Overwritten,
}

impl WriteStatus {
    /// Whether this write dropped an unread byte.
    #[must_use]
    pub const fn is_overwrite(self) -> bool {
        matches!(self, Self::Overwritten)
    }

    /// Integer status: `0` when stored, `-1` when a byte was overwritten.
    #[must_use]
    pub const fn code(self) -> i32 {
        match self {
            Self::Stored => 0,
            Self::Overwritten => -1,
        }
    }
}

/// Outcome of a batched write.
///
/// A batch is applied one byte at a time, so `overwritten` counts every
/// unread byte dropped along the way, including bytes written earlier in
/// the same batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BatchStatus {
    written: usize,
    overwritten: usize,
}

impl BatchStatus {
    /// Number of bytes stored by the batch.
    #[must_use]
    pub const fn written(&self) -> usize {
        self.written
    }

    /// Number of unread bytes dropped while applying the batch.
    #[must_use]
    pub const fn overwritten(&self) -> usize {
        self.overwritten
    }

    /// Integer status: `0` when nothing was lost, otherwise the negated
    /// overwrite count.
    #[must_use]
    pub fn code(&self) -> isize {
        isize::try_from(self.overwritten).map_or(isize::MIN, |n| -n)
    }

    fn traced(self) -> Self {
        if self.overwritten > 0 {
            debug!(
                written = self.written,
                overwritten = self.overwritten,
                "batched write dropped unread bytes"
            );
        }
        self
    }
}

impl FromIterator<WriteStatus> for BatchStatus {
    fn from_iter<I: IntoIterator<Item = WriteStatus>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::default(), |mut batch, status| {
                batch.written += 1;
                if status.is_overwrite() {
                    batch.overwritten += 1;
                }
                batch
            })
            .traced()
    }
}

#[cfg(test)]
mod tests {
    use super::{BatchStatus, WriteStatus};

    #[test]
    fn batch_counts_each_dropped_byte() {
        let batch: BatchStatus = [
            WriteStatus::Stored,
            WriteStatus::Overwritten,
            WriteStatus::Stored,
            WriteStatus::Overwritten,
        ]
        .into_iter()
        .collect();

        assert_eq!(batch.written(), 4);
        assert_eq!(batch.overwritten(), 2);
        assert_eq!(batch.code(), -2);
    }

    #[test]
    fn empty_batch_reports_success() {
        let batch: BatchStatus = core::iter::empty().collect();
        assert_eq!(batch, BatchStatus::default());
        assert_eq!(batch.code(), 0);
    }

    #[test]
    fn single_write_codes() {
        assert_eq!(WriteStatus::Stored.code(), 0);
        assert_eq!(WriteStatus::Overwritten.code(), -1);
        assert!(!WriteStatus::Stored.is_overwrite());
    }
}

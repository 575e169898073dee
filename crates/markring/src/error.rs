use thiserror::Error;

/// Errors raised while constructing a ring.
///
/// The data path itself has no failure mode: writes overwrite instead of
/// failing and reads on an empty ring return `None`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The backing region holds no bytes.
    #[error("ring buffer region must hold at least one byte")]
    EmptyRegion,
}

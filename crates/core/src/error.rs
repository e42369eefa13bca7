use thiserror::Error;

/// Result type alias for traced array operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when operating on a [`TracedArray`].
///
/// A failed operation leaves the array untouched: no counter changes and no
/// snapshot is appended, so the trace ends at the last successful operation.
///
/// [`TracedArray`]: crate::TracedArray
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("invalid index {position} for array of length {len}")]
    IndexOutOfRange { position: usize, len: usize },

    #[error("expected {expected} annotations, got {actual}")]
    AnnotationLength { expected: usize, actual: usize },

    #[error("element with identity {identity} does not belong to an array of length {len}")]
    ForeignElement { identity: usize, len: usize },
}

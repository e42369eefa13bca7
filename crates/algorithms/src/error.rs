/// Errors that can occur while running a sorting algorithm.
///
/// Any error aborts the run. A traced array keeps every snapshot recorded
/// before the failure.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Array(#[from] sortscope_core::Error),

    #[error("radix sort requires non-negative keys, found one at position {position}")]
    NegativeKey { position: usize },

    #[error("{algorithm} needs integer keys and cannot run on comparison alone")]
    NeedsRadixKey { algorithm: &'static str },
}

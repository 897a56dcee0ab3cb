use thiserror::Error;

/// Why a checked construction was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BuildError {
    /// The value at `index` is not strictly greater than the one before it. This covers both
    /// unsorted input and duplicates.
    #[error("input is not strictly ascending at index {index}")]
    NotStrictlyAscending {
        /// Position of the first value that breaks the ordering.
        index: usize,
    },
}

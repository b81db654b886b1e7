//! The errors returned by the forest, the grid and the statistics driver.

/// Everything that can go wrong while building or querying a percolation system.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// A forest or grid was asked for zero elements.
    #[error("the size must be larger than zero")]
    InvalidSize,
    /// An experiment was asked for a zero sized grid or zero trials.
    #[error("the grid size and the amount of trials must both be larger than zero")]
    InvalidParameters,
    /// Statistics were requested over an empty set of thresholds.
    #[error("at least one threshold is needed to compute statistics")]
    InsufficientSamples,
    /// A site coordinate lies outside of `1 ..= n`.
    #[error("the coordinates should be between 1 and {n}, got ({row}, {col})")]
    OutOfRange {
        row: usize,
        col: usize,
        n: usize,
    },
    /// The site was opened before.
    #[error("the site ({row}, {col}) is already open")]
    AlreadyOpen {
        row: usize,
        col: usize,
    },
    /// A forest index lies outside of `0 .. size`.
    #[error("index {index} is out of range for a forest of {size} elements")]
    IndexOutOfRange {
        index: usize,
        size: usize,
    },
}

/// A `Result` with the crate's [`Error`](enum.Error.html).
pub type Result<T> = std::result::Result<T, Error>;

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, CostError>;

/// The crate's error type. Malformed datasets are the only failure mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CostError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInput),
}

/// Why a dataset was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidInput {
    #[error("sample set is empty")]
    Empty,
    #[error("x has {x_len} values but y has {y_len}")]
    LengthMismatch { x_len: usize, y_len: usize },
}

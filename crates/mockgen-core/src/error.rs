use thiserror::Error;

/// Core error type shared across mockgen crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The source dataset violates a record invariant.
    #[error("invalid dataset: {0}")]
    InvalidDataset(String),
}

/// Convenience alias for results returned by mockgen crates.
pub type Result<T> = std::result::Result<T, Error>;

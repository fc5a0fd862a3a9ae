use thiserror::Error;

/// Errors emitted while building extraction patterns.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("invalid field pattern for '{field}': {source}")]
    Pattern {
        field: String,
        #[source]
        source: regex::Error,
    },
    #[error("block pattern has no fields")]
    EmptyPattern,
}

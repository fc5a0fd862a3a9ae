use thiserror::Error;

/// Errors emitted while assembling a module.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("format error: {0}")]
    Format(#[from] std::fmt::Error),
    #[error("invalid module spec: {0}")]
    InvalidSpec(String),
}

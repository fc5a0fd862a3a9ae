use std::path::PathBuf;

use thiserror::Error;

/// Errors emitted by the pipelines.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("input not readable at {path}: {source}")]
    MissingInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("output path {0} is the input path")]
    SameInputOutput(PathBuf),
    #[error(transparent)]
    Dataset(#[from] mockgen_core::Error),
    #[error("extract error: {0}")]
    Extract(#[from] mockgen_extract::ExtractError),
    #[error("render error: {0}")]
    Render(#[from] mockgen_render::RenderError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

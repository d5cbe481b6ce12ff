use thiserror::Error;

use brandcast_model::ModelError;

/// Errors surfaced by the pipeline stages.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// A precondition on user input failed before any network call.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A model call or response parse failed; the stage was aborted with no
    /// partial commit. The raw underlying message is preserved.
    #[error(transparent)]
    Model(#[from] ModelError),
}

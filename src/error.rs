//! Error types for the content synthesis pipeline.

use std::time::Duration;
use thiserror::Error;

/// Failures raised inside one generation run.
///
/// None of these reach the caller of [`crate::pipeline::ContentPipeline::generate`]:
/// the fallback orchestrator converts every one of them into fallback content.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("No credential configured for the generative service")]
    MissingCredential,

    #[error("Generative service did not answer within {0:?}")]
    Timeout(Duration),

    #[error("Transport error: {0}")]
    TransportError(String),

    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),

    #[error("No structured content could be recovered from the model response")]
    UnparsableResponse,

    #[error("Rendering failed on validated data: {0}")]
    RenderInconsistency(String),
}

impl GenerationError {
    /// Stable snake_case label used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            GenerationError::MissingCredential => "missing_credential",
            GenerationError::Timeout(_) => "timeout",
            GenerationError::TransportError(_) => "transport_error",
            GenerationError::UnexpectedShape(_) => "unexpected_shape",
            GenerationError::UnparsableResponse => "unparsable_response",
            GenerationError::RenderInconsistency(_) => "render_inconsistency",
        }
    }
}

/// Errors of the outer surfaces: configuration, storage and the CLI.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Generation failed: {0}")]
    Generation(#[from] GenerationError),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<sled::Error> for ApiError {
    fn from(err: sled::Error) -> Self {
        ApiError::StorageError(err.to_string())
    }
}

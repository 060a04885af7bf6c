//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::ApiError;

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    match e {
        ApiError::ConfigError(msg) => format!("configuration: {}", msg),
        ApiError::StorageError(msg) => format!("storage: {}", msg),
        ApiError::InvalidRequest(msg) => format!("invalid request: {}", msg),
        other => other.to_string(),
    }
}

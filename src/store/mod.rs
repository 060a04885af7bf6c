//! Result Store
//!
//! Keeps the most recent [`GeneratedContent`] (and every saved result by id) in a
//! local sled database, JSON-encoded.

use crate::error::ApiError;
use crate::pipeline::GeneratedContent;
use directories::ProjectDirs;
use std::path::PathBuf;

pub mod persistence;

pub use persistence::ContentStore;

/// Constant key of the most recently saved result.
pub const LATEST_KEY: &str = "pagesmith.latest";

/// Prefix of per-id keys.
pub const RESULT_KEY_PREFIX: &str = "pagesmith.result.";

/// Storage for generated results.
pub trait ResultStore {
    /// Save `content` as the latest result.
    fn save_latest(&self, content: &GeneratedContent) -> Result<(), ApiError>;

    /// The latest saved result, if any.
    fn load_latest(&self) -> Result<Option<GeneratedContent>, ApiError>;

    /// A saved result by id.
    fn load(&self, id: &str) -> Result<Option<GeneratedContent>, ApiError>;
}

/// `<platform data dir>/pagesmith/store`
pub fn default_path() -> Result<PathBuf, ApiError> {
    ProjectDirs::from("", "", "pagesmith")
        .map(|dirs| dirs.data_dir().join("store"))
        .ok_or_else(|| {
            ApiError::StorageError("Could not determine a data directory".to_string())
        })
}

pub(crate) fn result_key(id: &str) -> String {
    format!("{}{}", RESULT_KEY_PREFIX, id)
}

//! Sled-backed result store

use super::{result_key, ResultStore, LATEST_KEY, RESULT_KEY_PREFIX};
use crate::error::ApiError;
use crate::pipeline::GeneratedContent;
use std::path::Path;
use tracing::debug;

/// Sled-based implementation of [`ResultStore`]
pub struct ContentStore {
    db: sled::Db,
}

impl ContentStore {
    /// Open (or create) the database at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ApiError> {
        let db = sled::open(path.as_ref()).map_err(|e| {
            ApiError::StorageError(format!(
                "Failed to open sled database at {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Ok(Self { db })
    }

    /// Ids of every saved result, in key order.
    pub fn list_ids(&self) -> Result<Vec<String>, ApiError> {
        let mut ids = Vec::new();
        for item in self.db.scan_prefix(RESULT_KEY_PREFIX.as_bytes()) {
            let (key, _) = item?;
            if let Some(id) = key.strip_prefix(RESULT_KEY_PREFIX.as_bytes()) {
                ids.push(String::from_utf8_lossy(id).into_owned());
            }
        }
        Ok(ids)
    }

    fn read(&self, key: &str) -> Result<Option<GeneratedContent>, ApiError> {
        match self.db.get(key.as_bytes())? {
            Some(bytes) => {
                let content = serde_json::from_slice(&bytes).map_err(|e| {
                    ApiError::StorageError(format!("Failed to decode stored result {}: {}", key, e))
                })?;
                Ok(Some(content))
            }
            None => Ok(None),
        }
    }
}

impl ResultStore for ContentStore {
    fn save_latest(&self, content: &GeneratedContent) -> Result<(), ApiError> {
        let bytes = serde_json::to_vec(content)?;
        let mut batch = sled::Batch::default();
        batch.insert(LATEST_KEY.as_bytes(), bytes.clone());
        batch.insert(result_key(&content.id).as_bytes(), bytes);
        self.db.apply_batch(batch)?;
        self.db.flush()?;
        debug!(id = %content.id, "Saved result");
        Ok(())
    }

    fn load_latest(&self) -> Result<Option<GeneratedContent>, ApiError> {
        self.read(LATEST_KEY)
    }

    fn load(&self, id: &str) -> Result<Option<GeneratedContent>, ApiError> {
        self.read(&result_key(id))
    }
}

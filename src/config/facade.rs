//! Single entry point for loading configuration.

use super::merge::merge_policy;
use super::sources::{global_file, workspace_file};
use super::{PagesmithConfig, ENV_PREFIX};
use crate::error::ApiError;
use config::{Environment, File};
use std::path::Path;
use tracing::debug;

/// Loads [`PagesmithConfig`] from every layer in precedence order.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Defaults, global file, workspace files, environment.
    pub fn load(workspace_root: &Path) -> Result<PagesmithConfig, ApiError> {
        Self::load_with_file(workspace_root, None)
    }

    /// Like [`ConfigLoader::load`], with an explicit file layered after the workspace
    /// files. The explicit file must exist.
    pub fn load_with_file(
        workspace_root: &Path,
        config_file: Option<&Path>,
    ) -> Result<PagesmithConfig, ApiError> {
        let mut builder = merge_policy::builder_with_defaults()?;
        builder = global_file::add_to_builder(builder)?;
        builder = workspace_file::add_to_builder(builder, workspace_root)?;

        if let Some(path) = config_file {
            if !path.exists() {
                return Err(ApiError::ConfigError(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            builder = builder.add_source(File::from(path).required(true));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__"),
        );

        let config: PagesmithConfig = builder.build()?.try_deserialize()?;
        debug!(
            workspace = %workspace_root.display(),
            mode = ?config.generation.mode,
            has_credential = config.gateway.has_credential(),
            "Loaded configuration"
        );
        config.validated()
    }

    /// Parse a single TOML file with no other layers.
    pub fn load_from_file(path: &Path) -> Result<PagesmithConfig, ApiError> {
        let contents = std::fs::read_to_string(path)?;
        let config: PagesmithConfig = toml::from_str(&contents).map_err(|e| {
            ApiError::ConfigError(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        config.validated()
    }
}

//! Merge rules: defaults, override order, conflict handling.
//!
//! Later sources override earlier ones key by key; tables merge, scalars replace.

use crate::provider::{DEFAULT_ENDPOINT, DEFAULT_MODEL, DEFAULT_TIMEOUT};
use config::builder::DefaultState;
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("gateway.endpoint", DEFAULT_ENDPOINT)?
        .set_default("gateway.model", DEFAULT_MODEL)?
        .set_default("gateway.timeout_secs", DEFAULT_TIMEOUT.as_secs())?
        .set_default("generation.mode", "live")?
        .set_default("generation.default_language", "ko")
}

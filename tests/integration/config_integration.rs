//! Integration tests for layered configuration loading

use pagesmith::config::{ConfigLoader, PagesmithConfig};
use pagesmith::provider::DEFAULT_MODEL;
use pagesmith::request::{GenerationMode, TargetLanguage};
use std::fs;
use tempfile::TempDir;

fn write_workspace_config(root: &std::path::Path, contents: &str) {
    let dir = root.join("config");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("config.toml"), contents).unwrap();
}

#[test]
fn test_empty_workspace_uses_defaults() {
    let workspace = TempDir::new().unwrap();
    let config = ConfigLoader::load(workspace.path()).unwrap();
    let defaults = PagesmithConfig::default();

    assert_eq!(config.gateway.model, DEFAULT_MODEL);
    assert_eq!(config.gateway.timeout_secs, defaults.gateway.timeout_secs);
    assert_eq!(config.generation.default_language, TargetLanguage::Ko);
}

#[test]
fn test_workspace_file_overrides_defaults() {
    let workspace = TempDir::new().unwrap();
    write_workspace_config(
        workspace.path(),
        r#"
[gateway]
model = "gemini-workspace"

[generation]
mode = "offline"
default_language = "en"
"#,
    );

    let config = ConfigLoader::load(workspace.path()).unwrap();
    assert_eq!(config.gateway.model, "gemini-workspace");
    assert_eq!(config.generation.mode, GenerationMode::Offline);
    assert_eq!(config.generation.default_language, TargetLanguage::En);
}

#[test]
fn test_explicit_file_wins_over_workspace_file() {
    let workspace = TempDir::new().unwrap();
    write_workspace_config(
        workspace.path(),
        "[gateway]\nmodel = \"gemini-workspace\"\ntimeout_secs = 20\n",
    );
    let explicit = workspace.path().join("override.toml");
    fs::write(&explicit, "[gateway]\nmodel = \"gemini-explicit\"\n").unwrap();

    let config = ConfigLoader::load_with_file(workspace.path(), Some(&explicit)).unwrap();
    assert_eq!(config.gateway.model, "gemini-explicit");
    assert_eq!(config.gateway.timeout_secs, 20);
}

#[test]
fn test_invalid_workspace_value_fails_validation() {
    let workspace = TempDir::new().unwrap();
    write_workspace_config(workspace.path(), "[gateway]\nendpoint = \"ftp://nowhere\"\n");

    let err = ConfigLoader::load(workspace.path()).unwrap_err();
    assert!(err.to_string().contains("Invalid endpoint URL"));
}

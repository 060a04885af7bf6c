//! CLI route: single route table and run context. Dispatches to the pipeline, the
//! prompt compiler and the result store.

use crate::cli::parse::{Commands, OutputFormat};
use crate::cli::presentation::{
    format_batch_summary, format_config_text, format_progress_line, format_summary,
};
use crate::config::{ConfigLoader, PagesmithConfig};
use crate::error::ApiError;
use crate::pipeline::{ContentPipeline, GeneratedContent};
use crate::progress::ProgressReporter;
use crate::prompt;
use crate::provider::{GeminiClient, GenerativeClient, ScriptedClient};
use crate::request::{ContentRequest, GenerationMode};
use crate::store::{ContentStore, ResultStore};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Runtime context for CLI execution: workspace and loaded configuration.
pub struct RunContext {
    workspace_root: PathBuf,
    config: PagesmithConfig,
}

impl RunContext {
    /// Create run context from workspace root and optional config path. Uses ConfigLoader only.
    pub fn new(workspace_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config = ConfigLoader::load_with_file(&workspace_root, config_path.as_deref())?;
        Ok(Self::with_config(workspace_root, config))
    }

    pub fn with_config(workspace_root: PathBuf, config: PagesmithConfig) -> Self {
        Self {
            workspace_root,
            config,
        }
    }

    pub fn config(&self) -> &PagesmithConfig {
        &self.config
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let started = Instant::now();
        let result = self.execute_inner(command);
        debug!(
            workspace = %self.workspace_root.display(),
            ok = result.is_ok(),
            duration_ms = started.elapsed().as_millis() as u64,
            "Command finished"
        );
        result
    }

    fn execute_inner(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Generate {
                request,
                offline,
                save,
                format,
                response_file,
            } => {
                let request = request.to_request(self.config.generation.default_language);
                let client = self.client(response_file.as_deref())?;
                let pipeline = ContentPipeline::new(client, self.mode(*offline));
                let result = block_on(pipeline.generate(&request, &StderrProgress))?;
                if *save {
                    self.open_store()?.save_latest(&result)?;
                }
                render_result(&result, *format)
            }
            Commands::Batch {
                file,
                offline,
                save,
                format,
            } => {
                let requests = read_batch(file)?;
                info!(count = requests.len(), file = %file.display(), "Loaded batch file");
                let pipeline = ContentPipeline::new(self.client(None)?, self.mode(*offline));
                let results = block_on(pipeline.generate_batch(&requests, &StderrProgress))?;
                if *save {
                    let store = self.open_store()?;
                    for result in &results {
                        store.save_latest(result)?;
                    }
                }
                match format {
                    OutputFormat::Json => Ok(serde_json::to_string_pretty(&results)?),
                    OutputFormat::Summary => Ok(format_batch_summary(&results)),
                }
            }
            Commands::Prompt { request } => {
                let request = request.to_request(self.config.generation.default_language);
                Ok(prompt::compile(&request))
            }
            Commands::Show { id, format } => {
                let store = self.open_store()?;
                let result = match id {
                    Some(id) => store.load(id)?,
                    None => store.load_latest()?,
                };
                match result {
                    Some(result) => render_result(&result, *format),
                    None => Err(ApiError::StorageError(match id {
                        Some(id) => format!("No saved result with id {}", id),
                        None => "No saved result yet; run `generate --save` first".to_string(),
                    })),
                }
            }
            Commands::Config => Ok(format_config_text(&self.config)),
        }
    }

    fn mode(&self, offline: bool) -> GenerationMode {
        if offline {
            GenerationMode::Offline
        } else {
            self.config.generation.mode
        }
    }

    fn client(&self, response_file: Option<&Path>) -> Result<Arc<dyn GenerativeClient>, ApiError> {
        match response_file {
            Some(path) => {
                let text = std::fs::read_to_string(path)?;
                Ok(Arc::new(ScriptedClient::from_texts([text])))
            }
            None => Ok(Arc::new(GeminiClient::from_config(&self.config.gateway)?)),
        }
    }

    fn open_store(&self) -> Result<ContentStore, ApiError> {
        let path = self.config.storage.resolved_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        ContentStore::open(path)
    }
}

/// Prints progress lines to stderr.
struct StderrProgress;

impl ProgressReporter for StderrProgress {
    fn report(&self, percent: u8, message: &str) {
        eprintln!("{}", format_progress_line(percent, message));
    }
}

fn render_result(result: &GeneratedContent, format: OutputFormat) -> Result<String, ApiError> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Summary => Ok(format_summary(result)),
    }
}

fn read_batch(path: &Path) -> Result<Vec<ContentRequest>, ApiError> {
    let contents = std::fs::read_to_string(path)?;
    serde_json::from_str(&contents).map_err(|e| {
        ApiError::InvalidRequest(format!(
            "{} is not a JSON array of requests: {}",
            path.display(),
            e
        ))
    })
}

fn block_on<F: std::future::Future>(future: F) -> Result<F::Output, ApiError> {
    let runtime = tokio::runtime::Runtime::new()
        .map_err(|e| ApiError::ConfigError(format!("Failed to create runtime: {}", e)))?;
    Ok(runtime.block_on(future))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::parse::Cli;
    use clap::Parser;
    use tempfile::TempDir;

    fn context(dir: &TempDir) -> RunContext {
        let mut config = PagesmithConfig::default();
        config.storage.path = Some(dir.path().join("store"));
        RunContext::with_config(dir.path().to_path_buf(), config)
    }

    fn run(ctx: &RunContext, args: &[&str]) -> Result<String, ApiError> {
        let mut argv = vec!["pagesmith"];
        argv.extend_from_slice(args);
        let cli = Cli::try_parse_from(argv).unwrap();
        ctx.execute(&cli.command)
    }

    #[test]
    fn offline_generate_save_and_show() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir);
        let json = run(
            &ctx,
            &["generate", "kettle", "--kind", "manual", "--offline", "--save", "--format", "json"],
        )
        .unwrap();
        let generated: GeneratedContent = serde_json::from_str(&json).unwrap();
        assert_eq!(generated.pages().len(), 5);

        let shown = run(&ctx, &["show", "--format", "json"]).unwrap();
        let shown: GeneratedContent = serde_json::from_str(&shown).unwrap();
        assert_eq!(shown, generated);
    }

    #[test]
    fn response_file_replaces_the_service() {
        let dir = TempDir::new().unwrap();
        let response = dir.path().join("response.txt");
        std::fs::write(&response, "```json\n{\"title\": \"Recorded deck\"}\n```").unwrap();
        let ctx = context(&dir);
        let out = run(
            &ctx,
            &[
                "generate",
                "hub",
                "--response-file",
                response.to_str().unwrap(),
                "--format",
                "json",
            ],
        )
        .unwrap();
        assert!(out.contains("Recorded deck"));
    }

    #[test]
    fn show_without_saved_result_is_an_error() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir);
        assert!(matches!(
            run(&ctx, &["show"]),
            Err(ApiError::StorageError(_))
        ));
    }

    #[test]
    fn prompt_prints_the_compiled_prompt() {
        let dir = TempDir::new().unwrap();
        let ctx = context(&dir);
        let out = run(&ctx, &["prompt", "kettle", "-l", "en"]).unwrap();
        assert!(out.contains("kettle"));
        assert!(out.contains("Respond ONLY"));
    }
}

//! CLI parse: clap types for pagesmith. No behavior; definitions only.

use crate::request::{ContentKind, ContentRequest, DetailLevel, Difficulty, TargetLanguage};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// pagesmith - generate presentations and manuals from a topic
#[derive(Parser)]
#[command(name = "pagesmith")]
#[command(about = "Generate five-page presentations and user manuals with a generative model")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Workspace root directory (where config/ is looked up)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (layered after the workspace files)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate one presentation or manual
    Generate {
        #[command(flatten)]
        request: RequestArgs,
        /// Skip the generative service and render built-in content
        #[arg(long)]
        offline: bool,
        /// Save the result as the latest result
        #[arg(long)]
        save: bool,
        /// Output format
        #[arg(long, value_enum, default_value = "summary")]
        format: OutputFormat,
        /// Use the contents of this file as the model response instead of calling the service
        #[arg(long)]
        response_file: Option<PathBuf>,
    },
    /// Generate every request in a JSON array file, in order
    Batch {
        /// JSON file holding an array of requests
        file: PathBuf,
        #[arg(long)]
        offline: bool,
        /// Save the last result as the latest result and every result by id
        #[arg(long)]
        save: bool,
        #[arg(long, value_enum, default_value = "summary")]
        format: OutputFormat,
    },
    /// Print the compiled prompt for a request
    Prompt {
        #[command(flatten)]
        request: RequestArgs,
    },
    /// Show a saved result (the latest by default)
    Show {
        /// Result id
        #[arg(long)]
        id: Option<String>,
        #[arg(long, value_enum, default_value = "summary")]
        format: OutputFormat,
    },
    /// Print the effective configuration
    Config,
}

/// Request fields shared by `generate` and `prompt`.
#[derive(Args, Debug, Clone)]
pub struct RequestArgs {
    /// Topic to write about
    pub topic: String,

    /// presentation or manual
    #[arg(long, short = 'k', default_value = "presentation")]
    pub kind: ContentKind,

    /// ko, en, ja, zh or es (defaults to the configured language)
    #[arg(long, short = 'l')]
    pub language: Option<TargetLanguage>,

    /// beginner, intermediate or advanced
    #[arg(long, default_value = "intermediate")]
    pub difficulty: Difficulty,

    /// Tone and style hint
    #[arg(long)]
    pub style: Option<String>,

    /// Industry; also selects the theme
    #[arg(long)]
    pub industry: Option<String>,

    /// basic, detailed or comprehensive
    #[arg(long)]
    pub detail: Option<DetailLevel>,
}

impl RequestArgs {
    pub fn to_request(&self, default_language: TargetLanguage) -> ContentRequest {
        let mut request = ContentRequest::new(
            self.kind,
            self.topic.clone(),
            self.language.unwrap_or(default_language),
            self.difficulty,
        );
        request.style = self.style.clone();
        request.industry = self.industry.clone();
        request.detail_level = self.detail;
        request
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table
    Summary,
    /// Full result as JSON
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generate_parses_request_flags() {
        let cli = Cli::try_parse_from([
            "pagesmith",
            "generate",
            "smart home hub",
            "--kind",
            "manual",
            "-l",
            "en",
            "--industry",
            "fintech",
            "--offline",
            "--format",
            "json",
        ])
        .unwrap();
        match cli.command {
            Commands::Generate {
                request,
                offline,
                format,
                ..
            } => {
                assert!(offline);
                assert_eq!(format, OutputFormat::Json);
                let request = request.to_request(TargetLanguage::Ko);
                assert_eq!(request.content_kind, ContentKind::Manual);
                assert_eq!(request.target_language, TargetLanguage::En);
                assert_eq!(request.industry.as_deref(), Some("fintech"));
            }
            _ => panic!("expected generate"),
        }
    }

    #[test]
    fn language_defaults_to_configured_one() {
        let cli = Cli::try_parse_from(["pagesmith", "prompt", "kettle"]).unwrap();
        match cli.command {
            Commands::Prompt { request } => {
                let request = request.to_request(TargetLanguage::Ja);
                assert_eq!(request.target_language, TargetLanguage::Ja);
                assert_eq!(request.difficulty, Difficulty::Intermediate);
            }
            _ => panic!("expected prompt"),
        }
    }

    #[test]
    fn unknown_language_is_rejected() {
        assert!(Cli::try_parse_from(["pagesmith", "prompt", "x", "--language", "fr"]).is_err());
    }
}

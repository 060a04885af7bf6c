//! CLI domain: parse, route, output and presentation only.
//! No domain orchestration; a single route table dispatches to the pipeline and store.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::{Cli, Commands, OutputFormat, RequestArgs};
pub use presentation::{
    format_batch_summary, format_config_text, format_progress_line, format_summary,
};
pub use route::RunContext;

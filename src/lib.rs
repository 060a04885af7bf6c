//! pagesmith: topic in, five rendered pages out.
//!
//! A request is compiled into a prompt, sent to a generative model, and the
//! free-form reply is extracted, repaired, validated and rendered into a fixed
//! five-page presentation or manual. Any failure along the way degrades to
//! built-in content with the same shape, so a run always completes.

pub mod cli;
pub mod config;
pub mod content;
pub mod error;
pub mod extraction;
pub mod fallback;
pub mod locale;
pub mod logging;
pub mod pipeline;
pub mod progress;
pub mod prompt;
pub mod provider;
pub mod render;
pub mod request;
pub mod store;
pub mod theme;
pub mod validation;

pub use content::StructuredContentData;
pub use error::{ApiError, GenerationError};
pub use pipeline::{ContentPipeline, GeneratedContent};
pub use request::{ContentKind, ContentRequest, GenerationMode, TargetLanguage};

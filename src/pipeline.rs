//! Generation pipeline
//!
//! One run is a strict sequence: compile the prompt, call the gateway, extract,
//! validate, render. Any [`GenerationError`] before rendering discards the partial
//! state and the run continues with fallback content through the same rendering
//! path, so callers always receive a fully shaped [`GeneratedContent`].

use crate::content::StructuredContentData;
use crate::error::GenerationError;
use crate::extraction;
use crate::fallback;
use crate::progress::{Milestone, ProgressReporter, ProgressTracker, DEGRADED_MESSAGE};
use crate::prompt;
use crate::provider::GenerativeClient;
use crate::render::{self, RenderedPage};
use crate::request::{ContentKind, ContentRequest, GenerationMode};
use crate::theme::{self, ThemeTag};
use crate::validation::{self, ValidationContext};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info, warn};

/// Message of the final batch progress report.
pub const BATCH_COMPLETE_MESSAGE: &str = "Batch complete";

const ID_HEX_LEN: usize = 16;

/// Structured content plus its rendered pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentData {
    #[serde(flatten)]
    pub content: StructuredContentData,
    pub pages: Vec<RenderedPage>,
}

/// The result of one run. Successful and fallback runs share this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    pub id: String,
    pub content_kind: ContentKind,
    pub topic: String,
    pub created_at: DateTime<Utc>,
    pub data: ContentData,
    /// Page titles in page order.
    pub sections: Vec<String>,
}

impl GeneratedContent {
    pub fn pages(&self) -> &[RenderedPage] {
        &self.data.pages
    }
}

/// How a run's content was obtained.
enum Synthesis {
    Generated {
        data: StructuredContentData,
        theme: ThemeTag,
    },
    Fallback(GenerationError),
    Offline,
}

pub struct ContentPipeline {
    client: Arc<dyn GenerativeClient>,
    mode: GenerationMode,
}

impl ContentPipeline {
    pub fn new(client: Arc<dyn GenerativeClient>, mode: GenerationMode) -> Self {
        Self { client, mode }
    }

    /// Run one request to completion. Never fails: every [`GenerationError`] is logged
    /// and replaced by fallback content.
    pub async fn generate(
        &self,
        request: &ContentRequest,
        reporter: &dyn ProgressReporter,
    ) -> GeneratedContent {
        let tracker = ProgressTracker::new(reporter);
        let started = Instant::now();
        let created_at = Utc::now();
        let date = created_at.date_naive();

        tracker.milestone(Milestone::Started);
        info!(
            content_kind = %request.content_kind,
            language = %request.target_language,
            mode = ?self.mode,
            "Starting generation"
        );

        let synthesis = match self.mode {
            GenerationMode::Live => match self.synthesize(request, date, &tracker).await {
                Ok((data, theme)) => Synthesis::Generated { data, theme },
                Err(err) => Synthesis::Fallback(err),
            },
            GenerationMode::Offline => Synthesis::Offline,
        };

        let (data, theme, degraded) = match synthesis {
            Synthesis::Generated { data, theme } => (data, theme, false),
            Synthesis::Fallback(err) => {
                warn!(
                    error_kind = err.kind(),
                    error = %err,
                    "Generation failed, using fallback content"
                );
                tracker.note(DEGRADED_MESSAGE);
                let fallback = fallback::build(request, date);
                (fallback.data, fallback.theme, true)
            }
            Synthesis::Offline => {
                let fallback = fallback::build(request, date);
                (fallback.data, fallback.theme, false)
            }
        };

        let (data, pages) = match render::render(&data, theme, request.target_language) {
            Ok(pages) => (data, pages),
            Err(err) => {
                error!(error = %err, "Validated content failed to render, using fallback content");
                let fallback = fallback::build(request, date);
                let pages = render::render(&fallback.data, fallback.theme, request.target_language)
                    .unwrap_or_else(|err| {
                        error!(error = %err, "Fallback content failed to render");
                        Vec::new()
                    });
                (fallback.data, pages)
            }
        };
        tracker.milestone(Milestone::Rendered);

        let result = assemble(request, data, pages, created_at);
        info!(
            id = %result.id,
            pages = result.data.pages.len(),
            degraded,
            duration_ms = started.elapsed().as_millis() as u64,
            "Generation finished"
        );
        tracker.milestone(Milestone::Done);
        result
    }

    /// Run every request in order. A failing item degrades to its fallback form and
    /// the batch continues. Progress is `completed / total * 100` after each item.
    pub async fn generate_batch(
        &self,
        requests: &[ContentRequest],
        reporter: &dyn ProgressReporter,
    ) -> Vec<GeneratedContent> {
        let tracker = ProgressTracker::new(reporter);
        let total = requests.len();
        let mut results = Vec::with_capacity(total);

        info!(total, "Starting batch generation");
        for (index, request) in requests.iter().enumerate() {
            let result = self.generate(request, &crate::progress::NoopProgress).await;
            results.push(result);

            let completed = index + 1;
            let percent = (completed * 100 / total) as u8;
            tracker.report(
                percent,
                &format!("Generated {} of {}: {}", completed, total, request.topic.trim()),
            );
        }
        tracker.report(100, BATCH_COMPLETE_MESSAGE);
        info!(total, "Batch generation finished");
        results
    }

    async fn synthesize(
        &self,
        request: &ContentRequest,
        date: NaiveDate,
        tracker: &ProgressTracker<'_>,
    ) -> Result<(StructuredContentData, ThemeTag), GenerationError> {
        let prompt = prompt::compile(request);
        tracker.milestone(Milestone::PromptCompiled);

        tracker.milestone(Milestone::RequestSent);
        let raw = self.client.generate(&prompt).await?;
        tracker.milestone(Milestone::ResponseReceived);

        let extraction = extraction::extract(&raw)?;
        tracker.milestone(Milestone::Parsed);
        info!(
            provider = self.client.provider_name(),
            stage = %extraction.stage,
            "Parsed model response"
        );

        let ctx = ValidationContext::for_request(request, date);
        let mut data = validation::validate(request.content_kind, &extraction.value, &ctx);
        let theme = match &mut data {
            StructuredContentData::Presentation(content) => {
                let theme = theme::resolve(request, Some(&content.theme));
                content.theme = theme.as_str().to_string();
                theme
            }
            StructuredContentData::Manual(_) => theme::resolve(request, None),
        };
        tracker.milestone(Milestone::Validated);
        Ok((data, theme))
    }
}

fn assemble(
    request: &ContentRequest,
    content: StructuredContentData,
    pages: Vec<RenderedPage>,
    created_at: DateTime<Utc>,
) -> GeneratedContent {
    let topic = request.topic.trim().to_string();
    let sections = pages.iter().map(|page| page.title.clone()).collect();
    GeneratedContent {
        id: content_id(request, &created_at),
        content_kind: request.content_kind,
        topic,
        created_at,
        data: ContentData { content, pages },
        sections,
    }
}

/// Short blake3 digest over kind, topic, language and timestamp.
pub fn content_id(request: &ContentRequest, created_at: &DateTime<Utc>) -> String {
    let mut hasher = blake3::Hasher::new();
    hasher.update(request.content_kind.as_str().as_bytes());
    hasher.update(&[0]);
    hasher.update(request.topic.trim().as_bytes());
    hasher.update(&[0]);
    hasher.update(request.target_language.code().as_bytes());
    hasher.update(&[0]);
    hasher.update(created_at.to_rfc3339().as_bytes());
    let digest = hex::encode(hasher.finalize().as_bytes());
    digest[..ID_HEX_LEN].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::progress::GenerationProgress;
    use crate::provider::ScriptedClient;
    use crate::request::{Difficulty, TargetLanguage};
    use parking_lot::Mutex;

    fn request(kind: ContentKind) -> ContentRequest {
        ContentRequest::new(kind, "smart home hub", TargetLanguage::En, Difficulty::Intermediate)
    }

    fn recorder() -> (Arc<Mutex<Vec<GenerationProgress>>>, impl Fn(u8, &str) + Send + Sync) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let reporter = move |percent: u8, message: &str| {
            sink.lock().push(GenerationProgress::new(percent, message));
        };
        (seen, reporter)
    }

    #[tokio::test]
    async fn successful_run_reports_every_milestone() {
        let client = Arc::new(ScriptedClient::from_texts([
            r#"{"title": "Hub", "subtitle": "Home", "theme": "tech"}"#,
        ]));
        let pipeline = ContentPipeline::new(client, GenerationMode::Live);
        let (seen, reporter) = recorder();

        let result = pipeline.generate(&request(ContentKind::Presentation), &reporter).await;

        assert_eq!(result.data.content.title(), "Hub");
        assert_eq!(result.pages().len(), 5);
        let percents: Vec<u8> = seen.lock().iter().map(|p| p.percent).collect();
        assert_eq!(percents, vec![5, 15, 25, 60, 70, 85, 95, 100]);
        assert!(result.data.pages[0].markup.contains("theme-tech"));
    }

    #[tokio::test]
    async fn failed_call_degrades_at_the_current_percent() {
        let client = Arc::new(ScriptedClient::new([Err(GenerationError::MissingCredential)]));
        let pipeline = ContentPipeline::new(client, GenerationMode::Live);
        let (seen, reporter) = recorder();

        let result = pipeline.generate(&request(ContentKind::Manual), &reporter).await;

        assert_eq!(result.content_kind, ContentKind::Manual);
        assert_eq!(result.pages().len(), 5);
        let seen = seen.lock();
        let degraded = seen.iter().find(|p| p.message == DEGRADED_MESSAGE).unwrap();
        assert_eq!(degraded.percent, 25);
        let last = seen.last().unwrap();
        assert_eq!(last.percent, 100);
        assert_eq!(last.message, Milestone::Done.message());
    }

    #[tokio::test]
    async fn offline_mode_never_calls_the_gateway() {
        let client = Arc::new(ScriptedClient::from_texts(Vec::<String>::new()));
        let pipeline = ContentPipeline::new(client.clone(), GenerationMode::Offline);

        let result = pipeline
            .generate(&request(ContentKind::Presentation), &crate::progress::NoopProgress)
            .await;

        assert!(client.prompts().is_empty());
        assert_eq!(result.data.content.title(), "smart home hub");
        assert_eq!(result.sections.len(), 5);
    }

    #[tokio::test]
    async fn result_serializes_with_flattened_data() {
        let pipeline = ContentPipeline::new(
            Arc::new(ScriptedClient::from_texts(Vec::<String>::new())),
            GenerationMode::Offline,
        );
        let result = pipeline
            .generate(&request(ContentKind::Presentation), &crate::progress::NoopProgress)
            .await;

        let json = serde_json::to_value(&result).unwrap();
        for key in ["id", "contentKind", "topic", "createdAt", "data", "sections"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
        assert!(json["data"]["title"].is_string());
        assert_eq!(json["data"]["pages"].as_array().unwrap().len(), 5);
        assert_eq!(result.id.len(), ID_HEX_LEN);
    }

    #[test]
    fn content_id_depends_on_the_timestamp() {
        let request = request(ContentKind::Manual);
        let first = Utc::now();
        let second = first + chrono::Duration::seconds(1);
        assert_eq!(content_id(&request, &first), content_id(&request, &first));
        assert_ne!(content_id(&request, &first), content_id(&request, &second));
    }
}

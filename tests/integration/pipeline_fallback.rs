//! Integration tests for the fallback orchestrator

use pagesmith::content::StructuredContentData;
use pagesmith::pipeline::ContentPipeline;
use pagesmith::progress::{ChannelProgress, GenerationProgress, Milestone, DEGRADED_MESSAGE};
use pagesmith::provider::{GeminiClient, ScriptedClient};
use pagesmith::request::{ContentKind, ContentRequest, Difficulty, GenerationMode, TargetLanguage};
use serde_json::{json, Value};
use std::collections::BTreeSet;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;
use std::time::Duration;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

fn smart_home_hub() -> ContentRequest {
    ContentRequest::new(
        ContentKind::Presentation,
        "smart home hub",
        TargetLanguage::Ko,
        Difficulty::Intermediate,
    )
}

fn drain(mut receiver: UnboundedReceiver<GenerationProgress>) -> Vec<GenerationProgress> {
    let mut events = Vec::new();
    while let Ok(event) = receiver.try_recv() {
        events.push(event);
    }
    events
}

fn top_level_keys(value: &Value) -> BTreeSet<String> {
    value.as_object().unwrap().keys().cloned().collect()
}

#[tokio::test]
async fn test_unparsable_reply_still_yields_five_pages() {
    let client = Arc::new(ScriptedClient::from_texts(["not json at all"]));
    let pipeline = ContentPipeline::new(client, GenerationMode::Live);
    let (reporter, receiver) = ChannelProgress::channel();

    let result = pipeline.generate(&smart_home_hub(), &reporter).await;

    assert_eq!(result.content_kind, ContentKind::Presentation);
    assert_eq!(result.data.pages.len(), 5);
    assert!(!result.data.content.title().is_empty());

    let events = drain(receiver);
    assert!(events.iter().any(|e| e.message == DEGRADED_MESSAGE));
    assert!(events.windows(2).all(|w| w[0].percent <= w[1].percent));
    let last = events.last().unwrap();
    assert_eq!((last.percent, last.message.as_str()), (100, Milestone::Done.message()));
}

#[tokio::test]
async fn test_success_and_fallback_share_one_shape() {
    let reply = json!({
        "title": "스마트 홈 허브",
        "subtitle": "연결된 집",
        "stats": [{"value": "99%", "label": "가동률", "color": "success"}],
        "features": [{"icon": "🏠", "title": "음성 제어", "description": "말로 조작"}]
    })
    .to_string();
    let success = ContentPipeline::new(
        Arc::new(ScriptedClient::from_texts([reply])),
        GenerationMode::Live,
    )
    .generate(&smart_home_hub(), &pagesmith::progress::NoopProgress)
    .await;
    let fallback = ContentPipeline::new(
        Arc::new(ScriptedClient::from_texts(["not json at all"])),
        GenerationMode::Live,
    )
    .generate(&smart_home_hub(), &pagesmith::progress::NoopProgress)
    .await;

    assert_eq!(success.data.content.title(), "스마트 홈 허브");
    assert_eq!(fallback.data.content.title(), "smart home hub");

    let success_json = serde_json::to_value(&success).unwrap();
    let fallback_json = serde_json::to_value(&fallback).unwrap();
    assert_eq!(top_level_keys(&success_json), top_level_keys(&fallback_json));
    assert_eq!(
        top_level_keys(&success_json["data"]),
        top_level_keys(&fallback_json["data"])
    );
    assert_eq!(success.sections.len(), fallback.sections.len());
    assert_eq!(success.sections[1..], fallback.sections[1..]);
}

#[tokio::test]
async fn test_fallback_content_is_deterministic_apart_from_identity() {
    let pipeline = ContentPipeline::new(
        Arc::new(ScriptedClient::from_texts(["nope", "still nope"])),
        GenerationMode::Live,
    );
    let first = pipeline
        .generate(&smart_home_hub(), &pagesmith::progress::NoopProgress)
        .await;
    let second = pipeline
        .generate(&smart_home_hub(), &pagesmith::progress::NoopProgress)
        .await;

    assert_eq!(first.data.pages, second.data.pages);
    assert!(matches!(first.data.content, StructuredContentData::Presentation(_)));
}

#[tokio::test]
async fn test_truncated_reply_from_http_service_is_recovered() {
    let server = MockServer::start().await;
    let truncated = "```json\n{\"title\": \"Hub Pro\", \"subtitle\": \"Home control\", \"features\": [{\"title\": \"Vo";
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{ "text": truncated }] } }]
        })))
        .mount(&server)
        .await;

    let client = GeminiClient::new(
        format!("{}/models", server.uri()),
        "gemini-test",
        Some("k".to_string()),
        Duration::from_secs(5),
    )
    .unwrap();
    let request = ContentRequest::new(
        ContentKind::Presentation,
        "hub",
        TargetLanguage::En,
        Difficulty::Beginner,
    );
    let (reporter, receiver) = ChannelProgress::channel();
    let result = ContentPipeline::new(Arc::new(client), GenerationMode::Live)
        .generate(&request, &reporter)
        .await;

    assert_eq!(result.data.content.title(), "Hub Pro");
    assert_eq!(result.data.content.subtitle(), "Home control");
    assert!(drain(receiver).iter().all(|e| e.message != DEGRADED_MESSAGE));
}

#[tokio::test]
async fn test_manual_timeout_falls_back_with_guide_theme() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let client = GeminiClient::new(
        format!("{}/models", server.uri()),
        "gemini-test",
        Some("k".to_string()),
        Duration::from_millis(100),
    )
    .unwrap();
    let request = ContentRequest::new(
        ContentKind::Manual,
        "kettle",
        TargetLanguage::En,
        Difficulty::Beginner,
    );
    let result = ContentPipeline::new(Arc::new(client), GenerationMode::Live)
        .generate(&request, &pagesmith::progress::NoopProgress)
        .await;

    assert_eq!(result.content_kind, ContentKind::Manual);
    assert_eq!(result.data.pages.len(), 5);
    assert!(result.data.pages[0].markup.contains("theme-guide"));
}

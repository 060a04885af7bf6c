//! Integration tests for batch generation

use pagesmith::fallback;
use pagesmith::pipeline::{ContentPipeline, BATCH_COMPLETE_MESSAGE};
use pagesmith::progress::{ChannelProgress, GenerationProgress};
use pagesmith::provider::ScriptedClient;
use pagesmith::request::{ContentKind, ContentRequest, Difficulty, GenerationMode, TargetLanguage};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;

fn requests() -> Vec<ContentRequest> {
    vec![
        ContentRequest::new(
            ContentKind::Presentation,
            "solar roof",
            TargetLanguage::En,
            Difficulty::Beginner,
        ),
        ContentRequest::new(
            ContentKind::Manual,
            "espresso machine",
            TargetLanguage::En,
            Difficulty::Intermediate,
        ),
        ContentRequest::new(
            ContentKind::Presentation,
            "e-bike",
            TargetLanguage::Ja,
            Difficulty::Advanced,
        ),
    ]
}

fn drain(mut receiver: UnboundedReceiver<GenerationProgress>) -> Vec<GenerationProgress> {
    let mut events = Vec::new();
    while let Ok(event) = receiver.try_recv() {
        events.push(event);
    }
    events
}

#[tokio::test]
async fn test_failing_item_degrades_and_batch_continues() {
    let client = ScriptedClient::from_texts([
        json!({"title": "Solar Roof 2.0"}).to_string(),
        "<<garbage>>".to_string(),
        json!({"title": "E-Bike Launch"}).to_string(),
    ]);
    let pipeline = ContentPipeline::new(Arc::new(client), GenerationMode::Live);
    let requests = requests();
    let (reporter, receiver) = ChannelProgress::channel();

    let results = pipeline.generate_batch(&requests, &reporter).await;

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].data.content.title(), "Solar Roof 2.0");
    assert_eq!(results[2].data.content.title(), "E-Bike Launch");

    let degraded = &results[1];
    let expected = fallback::build(&requests[1], degraded.created_at.date_naive());
    assert_eq!(degraded.content_kind, ContentKind::Manual);
    assert_eq!(degraded.data.content, expected.data);
    assert_eq!(degraded.data.pages.len(), 5);

    let events = drain(receiver);
    let percents: Vec<u8> = events.iter().map(|e| e.percent).collect();
    assert_eq!(percents, vec![33, 66, 100, 100]);
    assert!(events[1].message.contains("espresso machine"));
    let last = events.last().unwrap();
    assert_eq!(last.message, BATCH_COMPLETE_MESSAGE);
}

#[tokio::test]
async fn test_results_keep_request_order() {
    let pipeline = ContentPipeline::new(
        Arc::new(ScriptedClient::from_texts(Vec::<String>::new())),
        GenerationMode::Offline,
    );
    let requests = requests();
    let results = pipeline
        .generate_batch(&requests, &pagesmith::progress::NoopProgress)
        .await;

    let topics: Vec<&str> = results.iter().map(|r| r.topic.as_str()).collect();
    assert_eq!(topics, vec!["solar roof", "espresso machine", "e-bike"]);
}

#[tokio::test]
async fn test_empty_batch_reports_completion() {
    let pipeline = ContentPipeline::new(
        Arc::new(ScriptedClient::from_texts(Vec::<String>::new())),
        GenerationMode::Offline,
    );
    let (reporter, receiver) = ChannelProgress::channel();
    let results = pipeline.generate_batch(&[], &reporter).await;

    assert!(results.is_empty());
    let events = drain(receiver);
    assert_eq!(events.len(), 1);
    assert_eq!((events[0].percent, events[0].message.as_str()), (100, BATCH_COMPLETE_MESSAGE));
}

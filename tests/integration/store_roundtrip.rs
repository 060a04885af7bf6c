//! Integration tests for the result store

use pagesmith::pipeline::{ContentPipeline, GeneratedContent};
use pagesmith::progress::NoopProgress;
use pagesmith::provider::ScriptedClient;
use pagesmith::request::{ContentKind, ContentRequest, Difficulty, GenerationMode, TargetLanguage};
use pagesmith::store::{ContentStore, ResultStore};
use std::sync::Arc;
use tempfile::TempDir;

async fn generate(reply: &str, topic: &str) -> GeneratedContent {
    let pipeline = ContentPipeline::new(
        Arc::new(ScriptedClient::from_texts([reply])),
        GenerationMode::Live,
    );
    let request = ContentRequest::new(
        ContentKind::Presentation,
        topic,
        TargetLanguage::Zh,
        Difficulty::Advanced,
    );
    pipeline.generate(&request, &NoopProgress).await
}

#[tokio::test]
async fn test_latest_survives_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("store");
    let result = generate(r#"{"title": "智能家居"}"#, "smart home").await;

    {
        let store = ContentStore::open(&path).unwrap();
        store.save_latest(&result).unwrap();
    }

    let store = ContentStore::open(&path).unwrap();
    let loaded = store.load_latest().unwrap().unwrap();
    assert_eq!(loaded, result);
    assert_eq!(loaded.data.content.title(), "智能家居");
}

#[tokio::test]
async fn test_fallback_results_are_stored_like_any_other() {
    let dir = TempDir::new().unwrap();
    let store = ContentStore::open(dir.path().join("store")).unwrap();
    let result = generate("no json here", "smart home").await;

    store.save_latest(&result).unwrap();
    assert_eq!(store.load(&result.id).unwrap(), Some(result));
    assert!(store.load("0000000000000000").unwrap().is_none());
}

//! Integration tests for the HTTP gateway against a mock generative service

use pagesmith::provider::{GeminiClient, GenerativeClient};
use pagesmith::GenerationError;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const MODEL: &str = "gemini-test";

fn client(server: &MockServer, key: Option<&str>, timeout: Duration) -> GeminiClient {
    GeminiClient::new(
        format!("{}/models", server.uri()),
        MODEL,
        key.map(str::to_string),
        timeout,
    )
    .unwrap()
}

fn candidate(text: &str) -> serde_json::Value {
    json!({ "candidates": [{ "content": { "parts": [{ "text": text }] } }] })
}

#[tokio::test]
async fn test_prompt_and_key_are_sent() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-test:generateContent"))
        .and(query_param("key", "test-key"))
        .and(body_partial_json(json!({
            "contents": [{ "parts": [{ "text": "hello prompt" }] }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate("{\"title\":\"Hub\"}")))
        .expect(1)
        .mount(&server)
        .await;

    let text = client(&server, Some("test-key"), Duration::from_secs(5))
        .generate("hello prompt")
        .await
        .unwrap();
    assert_eq!(text, "{\"title\":\"Hub\"}");
}

#[tokio::test]
async fn test_missing_key_never_reaches_the_network() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(candidate("x")))
        .expect(0)
        .mount(&server)
        .await;

    let err = client(&server, None, Duration::from_secs(5))
        .generate("prompt")
        .await
        .unwrap_err();
    assert!(matches!(err, GenerationError::MissingCredential));
}

#[tokio::test]
async fn test_non_success_status_is_a_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("overloaded"))
        .mount(&server)
        .await;

    let err = client(&server, Some("k"), Duration::from_secs(5))
        .generate("prompt")
        .await
        .unwrap_err();
    match err {
        GenerationError::TransportError(msg) => assert!(msg.contains("503")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_envelope_without_candidates_is_unexpected_shape() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let err = client(&server, Some("k"), Duration::from_secs(5))
        .generate("prompt")
        .await
        .unwrap_err();
    assert!(matches!(err, GenerationError::UnexpectedShape(_)));
}

#[tokio::test]
async fn test_slow_service_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(candidate("late"))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let timeout = Duration::from_millis(100);
    let err = client(&server, Some("k"), timeout)
        .generate("prompt")
        .await
        .unwrap_err();
    assert!(matches!(err, GenerationError::Timeout(t) if t == timeout));
}

//! Generative Service Gateway
//!
//! One outbound call per generation: the prompt goes out as a `generateContent`
//! request, the first candidate's text comes back. The call runs under a timeout
//! that cancels the in-flight request. There are no retries here.

use crate::config::GatewayConfig;
use crate::error::GenerationError;
use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;
use tracing::{debug, warn};

pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta/models";
pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const ERROR_BODY_PREVIEW: usize = 200;

/// Text generation behind one prompt-in, text-out call.
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    /// Send `prompt` and return the raw model text.
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;

    /// Get the provider name
    fn provider_name(&self) -> &str;
}

// Gemini request/response envelopes
#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// `limit` is reported when reqwest itself gave up waiting.
fn map_http_error(error: reqwest::Error, limit: Duration) -> GenerationError {
    if error.is_timeout() {
        GenerationError::Timeout(limit)
    } else if error.is_connect() {
        GenerationError::TransportError(format!("Connection error: {}", error))
    } else if let Some(status) = error.status() {
        GenerationError::TransportError(format!("Request failed with status {}", status))
    } else {
        GenerationError::TransportError(format!("HTTP error: {}", error))
    }
}

/// Client for the Gemini `generateContent` endpoint. The credential travels as the
/// `key` query parameter.
pub struct GeminiClient {
    client: Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl GeminiClient {
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()
            .map_err(|e| {
                GenerationError::TransportError(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            model: model.into(),
            api_key,
            timeout,
        })
    }

    pub fn from_config(config: &GatewayConfig) -> Result<Self, GenerationError> {
        Self::new(
            config.endpoint.clone(),
            config.model.clone(),
            config.api_key.clone(),
            config.timeout(),
        )
    }

    fn url(&self) -> String {
        format!(
            "{}/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }

    fn credential(&self) -> Result<&str, GenerationError> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or(GenerationError::MissingCredential)
    }

    async fn send(&self, key: &str, prompt: &str) -> Result<String, GenerationError> {
        let body = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: prompt }],
            }],
        };

        let response = self
            .client
            .post(self.url())
            .query(&[("key", key)])
            .json(&body)
            .send()
            .await
            .map_err(|e| map_http_error(e, CONNECT_TIMEOUT))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let preview: String = error_text.chars().take(ERROR_BODY_PREVIEW).collect();
            return Err(GenerationError::TransportError(format!(
                "Request failed with status {}: {}",
                status, preview
            )));
        }

        let envelope: GenerateResponse = response.json().await.map_err(|e| {
            GenerationError::TransportError(format!("Malformed response envelope: {}", e))
        })?;
        first_candidate_text(envelope)
    }
}

fn first_candidate_text(envelope: GenerateResponse) -> Result<String, GenerationError> {
    let candidate = envelope
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| GenerationError::UnexpectedShape("No candidates in response".to_string()))?;

    let text: String = candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(GenerationError::UnexpectedShape(
            "First candidate has no text".to_string(),
        ));
    }
    Ok(text)
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let key = self.credential()?;
        debug!(model = %self.model, prompt_chars = prompt.len(), "Calling generative service");

        match tokio::time::timeout(self.timeout, self.send(key, prompt)).await {
            Ok(result) => {
                if let Ok(text) = &result {
                    debug!(response_chars = text.len(), "Generative service answered");
                }
                result
            }
            Err(_) => {
                warn!(timeout = ?self.timeout, "Generative service call timed out");
                Err(GenerationError::Timeout(self.timeout))
            }
        }
    }

    fn provider_name(&self) -> &str {
        "gemini"
    }
}

/// Replays a fixed queue of outcomes, one per call. Used for recorded responses and
/// in tests.
pub struct ScriptedClient {
    responses: Mutex<VecDeque<Result<String, GenerationError>>>,
    calls: Mutex<Vec<String>>,
}

impl ScriptedClient {
    pub fn new(responses: impl IntoIterator<Item = Result<String, GenerationError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().collect()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn from_texts<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(texts.into_iter().map(|text| Ok(text.into())))
    }

    /// Prompts received so far, in call order.
    pub fn prompts(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

#[async_trait]
impl GenerativeClient for ScriptedClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.calls.lock().push(prompt.to_string());
        self.responses.lock().pop_front().unwrap_or_else(|| {
            Err(GenerationError::TransportError(
                "No scripted response left".to_string(),
            ))
        })
    }

    fn provider_name(&self) -> &str {
        "scripted"
    }
}

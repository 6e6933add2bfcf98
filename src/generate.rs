//! Generation bridge between the UI and the mock generation API.
//!
//! When `MINDPAL_API_URL` is set, requests go over HTTP to the `mindpal-api`
//! endpoints. Otherwise the same canned payloads are served locally after a
//! short simulated delay, so the demo works with no backend running.

use crate::mocks;
use crate::types::{Document, Mindmap, Quiz, Summary};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Simulated latency for local generation.
const LOCAL_DELAY: Duration = Duration::from_millis(600);

#[derive(Debug, Clone)]
pub struct GenerateError(String);

impl GenerateError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl std::fmt::Display for GenerateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for GenerateError {}

pub type GenerateResult<T> = Result<T, GenerateError>;

/// The document library is static; there is no ingestion to fetch from.
pub fn fetch_documents() -> Vec<Document> {
    mocks::sample_documents()
}

pub fn fetch_summaries() -> Vec<Summary> {
    mocks::initial_summaries()
}

pub fn fetch_mindmaps() -> Vec<Mindmap> {
    mocks::initial_mindmaps()
}

/// Quizzes start empty; the list grows only through [`generate_quiz`].
pub fn fetch_quizzes() -> Vec<Quiz> {
    Vec::new()
}

pub async fn generate_summary(document_id: &str) -> GenerateResult<Summary> {
    match api_base() {
        Some(base) => post_generate(&base, "generate-summary", document_id).await,
        None => {
            tokio::time::sleep(LOCAL_DELAY).await;
            Ok(mocks::mock_summary(document_id))
        }
    }
}

pub async fn generate_mindmap(document_id: &str) -> GenerateResult<Mindmap> {
    match api_base() {
        Some(base) => post_generate(&base, "generate-mindmap", document_id).await,
        None => {
            tokio::time::sleep(LOCAL_DELAY).await;
            Ok(mocks::mock_mindmap(document_id))
        }
    }
}

pub async fn generate_quiz(document_id: &str) -> GenerateResult<Quiz> {
    match api_base() {
        Some(base) => post_generate(&base, "generate-quiz", document_id).await,
        None => {
            tokio::time::sleep(LOCAL_DELAY).await;
            Ok(mocks::mock_quiz(document_id))
        }
    }
}

fn api_base() -> Option<String> {
    env::var("MINDPAL_API_URL")
        .ok()
        .map(|value| value.trim().trim_end_matches('/').to_string())
        .filter(|value| !value.is_empty())
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

async fn post_generate<T: DeserializeOwned>(
    base: &str,
    path: &str,
    document_id: &str,
) -> GenerateResult<T> {
    let url = format!("{base}/{path}");
    let response = reqwest::Client::new()
        .post(&url)
        .json(&serde_json::json!({ "documentId": document_id }))
        .send()
        .await
        .map_err(|err| GenerateError::new(format!("request to {url} failed: {err}")))?;

    let status = response.status();
    if !status.is_success() {
        // The API reports failures as 400 with an `error` field.
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => format!("{path} returned {status}"),
        };
        return Err(GenerateError::new(message));
    }

    response
        .json::<T>()
        .await
        .map_err(|err| GenerateError::new(format!("invalid {path} response: {err}")))
}

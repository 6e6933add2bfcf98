//! Router and request handlers.
//!
//! Each handler follows the same shape: decode `{ documentId }`, check the
//! API key is configured, build the canned payload, fire a best-effort
//! insert, reply 200. CORS is fully permissive and pre-flight OPTIONS is
//! answered by the layer.

use crate::mocks;
use crate::server::error::ApiError;
use crate::server::store::ArtifactStore;
use crate::types::{Mindmap, Quiz, Summary};
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;
use tower_http::cors::CorsLayer;

#[derive(Clone)]
pub struct ApiState {
    api_key: Option<String>,
    store: ArtifactStore,
}

impl ApiState {
    pub fn new(api_key: Option<String>, store: ArtifactStore) -> Self {
        Self { api_key, store }
    }

    fn require_api_key(&self) -> Result<(), ApiError> {
        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(()),
            _ => Err(ApiError::MissingApiKey),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub document_id: String,
}

pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/generate-summary", post(generate_summary))
        .route("/generate-mindmap", post(generate_mindmap))
        .route("/generate-quiz", post(generate_quiz))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn generate_summary(
    State(state): State<ApiState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<Summary>, ApiError> {
    let Json(request) = payload.map_err(|err| ApiError::BadRequest(err.body_text()))?;
    state.require_api_key()?;
    let summary = mocks::mock_summary(&request.document_id);
    state.store.insert_summary(&summary).await;
    Ok(Json(summary))
}

async fn generate_mindmap(
    State(state): State<ApiState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<Mindmap>, ApiError> {
    let Json(request) = payload.map_err(|err| ApiError::BadRequest(err.body_text()))?;
    state.require_api_key()?;
    let mindmap = mocks::mock_mindmap(&request.document_id);
    state.store.insert_mindmap(&mindmap).await;
    Ok(Json(mindmap))
}

async fn generate_quiz(
    State(state): State<ApiState>,
    payload: Result<Json<GenerateRequest>, JsonRejection>,
) -> Result<Json<Quiz>, ApiError> {
    let Json(request) = payload.map_err(|err| ApiError::BadRequest(err.body_text()))?;
    state.require_api_key()?;
    let quiz = mocks::mock_quiz(&request.document_id);
    state.store.insert_quiz(&quiz).await;
    Ok(Json(quiz))
}

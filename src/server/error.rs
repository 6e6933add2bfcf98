//! The primary error type for the mock generation API.
//!
//! Every handler failure collapses into HTTP 400 with a JSON
//! `{ "error": … }` body; clients distinguish failures by the message, not
//! the status code.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The inference API key is not configured. Checked per request, never
    /// actually used for an inference call.
    #[error("API key not found")]
    MissingApiKey,

    /// The request body was missing or not valid JSON.
    #[error("{0}")]
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (StatusCode::BAD_REQUEST, body).into_response()
    }
}

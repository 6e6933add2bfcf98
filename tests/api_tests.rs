#![cfg(feature = "server")]

//! End-to-end tests for the generate endpoints, driven through the router
//! with `tower::ServiceExt::oneshot`. No database is attached, so the
//! best-effort inserts are skipped.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use mindpal::server::{ApiState, ArtifactStore, router};
use serde_json::{Value, json};
use tower::ServiceExt;

fn app(api_key: Option<&str>) -> Router {
    router(ApiState::new(
        api_key.map(str::to_string),
        ArtifactStore::new(None),
    ))
}

async fn post_json(app: Router, path: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = serde_json::from_slice(&bytes).unwrap();
    (status, value)
}

mod missing_api_key {
    use super::*;

    #[tokio::test]
    async fn every_endpoint_replies_400_with_an_error_field() {
        for path in ["/generate-summary", "/generate-mindmap", "/generate-quiz"] {
            let (status, body) =
                post_json(app(None), path, r#"{"documentId":"doc-1"}"#).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{path}");
            assert_eq!(body["error"], json!("API key not found"), "{path}");
            assert!(body.get("id").is_none(), "{path} must not leak a payload");
        }
    }

    #[tokio::test]
    async fn a_blank_key_counts_as_missing() {
        let (status, body) =
            post_json(app(Some("  ")), "/generate-summary", r#"{"documentId":"x"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], json!("API key not found"));
    }
}

mod malformed_requests {
    use super::*;

    #[tokio::test]
    async fn invalid_json_is_a_400() {
        let (status, body) =
            post_json(app(Some("key")), "/generate-summary", "{not json").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }

    #[tokio::test]
    async fn missing_document_id_is_a_400() {
        let (status, body) = post_json(app(Some("key")), "/generate-quiz", "{}").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].is_string());
    }
}

mod generated_payloads {
    use super::*;

    #[tokio::test]
    async fn summary_carries_the_document_id_and_key_points() {
        let (status, body) =
            post_json(app(Some("key")), "/generate-summary", r#"{"documentId":"doc-7"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["documentId"], json!("doc-7"));
        assert_eq!(body["title"], json!("Machine Learning Ethics Summary"));
        assert_eq!(body["keyPoints"].as_array().map(Vec::len), Some(8));
        assert!(body["id"].is_string());
        assert!(body["content"].is_string());
        assert!(body["createdAt"].is_string());
    }

    #[tokio::test]
    async fn mindmap_has_a_root_and_camel_case_nodes() {
        let (status, body) =
            post_json(app(Some("key")), "/generate-mindmap", r#"{"documentId":"doc-7"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["documentId"], json!("doc-7"));
        let nodes = body["nodes"].as_array().expect("nodes array");
        assert_eq!(nodes.len(), 13);
        let root = &nodes[0];
        assert_eq!(root["level"], json!(0));
        assert!(root["children"].as_array().is_some_and(|c| !c.is_empty()));
        assert!(root["color"].is_string());
    }

    #[tokio::test]
    async fn quiz_has_five_questions_of_four_options() {
        let (status, body) =
            post_json(app(Some("key")), "/generate-quiz", r#"{"documentId":"doc-7"}"#).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["sourceDocument"],
            json!("Neural Networks Fundamentals.pdf")
        );
        let questions = body["questions"].as_array().expect("questions array");
        assert_eq!(questions.len(), 5);
        for question in questions {
            assert_eq!(question["options"].as_array().map(Vec::len), Some(4));
            let correct = question["correctAnswer"].as_u64().expect("correctAnswer");
            assert!(correct < 4);
            assert!(question["explanation"].is_string());
        }
    }

    #[tokio::test]
    async fn repeated_calls_mint_fresh_ids() {
        let (_, first) =
            post_json(app(Some("key")), "/generate-quiz", r#"{"documentId":"doc-1"}"#).await;
        let (_, second) =
            post_json(app(Some("key")), "/generate-quiz", r#"{"documentId":"doc-1"}"#).await;
        assert_ne!(first["id"], second["id"]);
    }
}

//! Mock generation API for MindPal.
//!
//! Three stateless POST endpoints that mirror the UI's generation bridge:
//! `/generate-summary`, `/generate-mindmap`, and `/generate-quiz`. Each
//! accepts `{ "documentId": … }`, ignores it for response content, returns
//! the canned payload, and attempts a best-effort database insert. Any
//! failure collapses to HTTP 400 with a JSON `error` field.
//!
//! Served by the `mindpal-api` binary (requires the `server` feature).

pub mod config;
pub mod error;
pub mod routes;
pub mod store;

pub use config::ApiConfig;
pub use error::ApiError;
pub use routes::{ApiState, router};
pub use store::ArtifactStore;

//! Best-effort artifact persistence.
//!
//! One row per generated artifact, written after the response payload is
//! already built. Insert failures are logged and swallowed; the caller never
//! sees them. Expected tables:
//!
//! ```sql
//! CREATE TABLE summaries (id text PRIMARY KEY, document_id text, title text,
//!     content text, key_points text[], created_at text);
//! CREATE TABLE mindmaps  (id text PRIMARY KEY, document_id text, title text,
//!     nodes jsonb, created_at text);
//! CREATE TABLE quizzes   (id text PRIMARY KEY, title text, description text,
//!     source_document text, questions jsonb, created_at text);
//! ```

use crate::mocks::now_rfc3339;
use crate::types::{Mindmap, Quiz, Summary};
use sqlx::PgPool;
use sqlx::types::Json;
use tracing::{debug, warn};

#[derive(Clone, Default)]
pub struct ArtifactStore {
    pool: Option<PgPool>,
}

impl ArtifactStore {
    pub fn new(pool: Option<PgPool>) -> Self {
        Self { pool }
    }

    pub async fn insert_summary(&self, summary: &Summary) {
        let Some(pool) = &self.pool else {
            debug!("no database configured; skipping summary insert");
            return;
        };
        let result = sqlx::query(
            "INSERT INTO summaries (id, document_id, title, content, key_points, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(&summary.id)
        .bind(&summary.document_id)
        .bind(&summary.title)
        .bind(&summary.content)
        .bind(&summary.key_points)
        .bind(&summary.created_at)
        .execute(pool)
        .await;
        if let Err(err) = result {
            warn!(error = %err, id = %summary.id, "summary insert failed");
        }
    }

    pub async fn insert_mindmap(&self, mindmap: &Mindmap) {
        let Some(pool) = &self.pool else {
            debug!("no database configured; skipping mindmap insert");
            return;
        };
        let result = sqlx::query(
            "INSERT INTO mindmaps (id, document_id, title, nodes, created_at) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(&mindmap.id)
        .bind(&mindmap.document_id)
        .bind(&mindmap.title)
        .bind(Json(&mindmap.nodes))
        .bind(&mindmap.created_at)
        .execute(pool)
        .await;
        if let Err(err) = result {
            warn!(error = %err, id = %mindmap.id, "mindmap insert failed");
        }
    }

    pub async fn insert_quiz(&self, quiz: &Quiz) {
        let Some(pool) = &self.pool else {
            debug!("no database configured; skipping quiz insert");
            return;
        };
        let result = sqlx::query(
            "INSERT INTO quizzes (id, title, description, source_document, questions, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(&quiz.id)
        .bind(&quiz.title)
        .bind(&quiz.description)
        .bind(&quiz.source_document)
        .bind(Json(&quiz.questions))
        .bind(now_rfc3339())
        .execute(pool)
        .await;
        if let Err(err) = result {
            warn!(error = %err, id = %quiz.id, "quiz insert failed");
        }
    }
}

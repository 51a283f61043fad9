//! Repository for the `document_histories` table.
//!
//! History rows are fully dependent on their document; deletion happens
//! inside the cascading-delete transaction in [`crate::lifecycle`].

use sqlx::PgPool;

use scribe_core::types::DbId;

use crate::models::document::DocumentHistory;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, doc_id, content, created_by, created_at";

/// Provides CRUD operations for document revision history.
pub struct DocumentHistoryRepo;

impl DocumentHistoryRepo {
    /// Record a revision for a document, returning the created row.
    pub async fn create(
        pool: &PgPool,
        doc_id: DbId,
        content: Option<&str>,
        created_by: DbId,
    ) -> Result<DocumentHistory, sqlx::Error> {
        let query = format!(
            "INSERT INTO document_histories (doc_id, content, created_by)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DocumentHistory>(&query)
            .bind(doc_id)
            .bind(content)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// List a document's revisions, newest first.
    pub async fn list_by_doc(
        pool: &PgPool,
        doc_id: DbId,
    ) -> Result<Vec<DocumentHistory>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM document_histories WHERE doc_id = $1 ORDER BY id DESC");
        sqlx::query_as::<_, DocumentHistory>(&query)
            .bind(doc_id)
            .fetch_all(pool)
            .await
    }
}

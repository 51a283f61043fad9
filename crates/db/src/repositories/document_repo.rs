//! Repository for the `documents` table.

use sqlx::PgPool;

use scribe_core::tree::DocNode;
use scribe_core::types::DbId;

use crate::models::document::{CreateDocument, Document, DocumentNode};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, name, parent_id, sort_order, created_at, updated_at";

/// Provides CRUD operations for documents.
pub struct DocumentRepo;

impl DocumentRepo {
    /// Insert a new document, returning the created row.
    ///
    /// `parent_id` defaults to 0 (root) and `sort_order` to 0 if omitted.
    pub async fn create(pool: &PgPool, input: &CreateDocument) -> Result<Document, sqlx::Error> {
        let query = format!(
            "INSERT INTO documents (project_id, name, parent_id, sort_order)
             VALUES ($1, $2, COALESCE($3, 0), COALESCE($4, 0))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Document>(&query)
            .bind(input.project_id)
            .bind(&input.name)
            .bind(input.parent_id)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// Find a document by its primary key.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Document>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM documents WHERE id = $1");
        sqlx::query_as::<_, Document>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Load the tree projection of a project's documents, in sort order.
    pub async fn list_nodes(pool: &PgPool, project_id: DbId) -> Result<Vec<DocNode>, sqlx::Error> {
        let rows = sqlx::query_as::<_, DocumentNode>(
            "SELECT id, name, parent_id FROM documents
             WHERE project_id = $1
             ORDER BY sort_order ASC, id ASC",
        )
        .bind(project_id)
        .fetch_all(pool)
        .await?;
        Ok(rows.into_iter().map(DocNode::from).collect())
    }

    /// Collect the ids of every document under a project.
    pub async fn list_ids_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar("SELECT id FROM documents WHERE project_id = $1")
            .bind(project_id)
            .fetch_all(pool)
            .await
    }
}

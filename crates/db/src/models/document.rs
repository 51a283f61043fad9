//! Document and document-history entity models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use scribe_core::tree::DocNode;
use scribe_core::types::{DbId, Timestamp};

/// A document row from the `documents` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Document {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    /// 0 marks a root of the project's document forest.
    pub parent_id: DbId,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new document.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateDocument {
    pub project_id: DbId,
    pub name: String,
    /// Defaults to 0 (root) if omitted.
    pub parent_id: Option<DbId>,
    /// Defaults to 0 if omitted.
    pub sort_order: Option<i32>,
}

/// The tree-relevant projection of a document row.
#[derive(Debug, Clone, FromRow)]
pub struct DocumentNode {
    pub id: DbId,
    pub name: String,
    pub parent_id: DbId,
}

impl From<DocumentNode> for DocNode {
    fn from(node: DocumentNode) -> Self {
        DocNode {
            id: node.id,
            name: node.name,
            parent_id: node.parent_id,
        }
    }
}

/// A revision row from the `document_histories` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DocumentHistory {
    pub id: DbId,
    pub doc_id: DbId,
    pub content: Option<String>,
    pub created_by: DbId,
    pub created_at: Timestamp,
}

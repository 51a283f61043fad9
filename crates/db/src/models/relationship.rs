//! Relationship (project membership) entity model.

use serde::Serialize;
use sqlx::FromRow;

use scribe_core::types::{DbId, Timestamp};

/// A membership row from the `relationships` table.
///
/// Unique per `(project_id, member_id)` pair.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Relationship {
    pub id: DbId,
    pub project_id: DbId,
    pub member_id: DbId,
    /// 1 = owner, 0 = participant (see `scribe_core::membership::roles`).
    pub role: i16,
    pub created_at: Timestamp,
}

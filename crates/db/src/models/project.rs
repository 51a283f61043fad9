//! Project entity model.

use serde::Serialize;
use sqlx::FromRow;

use scribe_core::project::VisibilityState;
use scribe_core::types::{DbId, Timestamp};

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    /// Raw visibility column; decode via [`Project::visibility_state`].
    pub visibility: i16,
    /// Set iff the project is password-protected. Never serialized.
    #[serde(skip_serializing)]
    pub password: Option<String>,
    pub created_by: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Project {
    /// Decode the stored visibility column.
    ///
    /// Returns `None` only for rows predating the validation rules; callers
    /// treat such rows as private.
    pub fn visibility_state(&self) -> Option<VisibilityState> {
        VisibilityState::from_i16(self.visibility)
    }
}

/// A project joined with the caller's relationship role and the project's
/// member count, for the participation listing.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectWithRole {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub visibility: i16,
    pub created_by: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    /// The caller's role in this project (1 = owner, 0 = participant).
    pub role: i16,
    pub member_count: i64,
}

//! Repository for the `projects` table.
//!
//! Writes that must be transactional (create with the staged owner
//! relationship, cascading delete) live in [`crate::lifecycle`]; this
//! repository covers the indexed read paths.

use sqlx::PgPool;

use scribe_core::types::DbId;

use crate::models::project::{Project, ProjectWithRole};

/// Column list shared across queries to avoid repetition.
pub(crate) const COLUMNS: &str =
    "id, name, description, visibility, password, created_by, created_at, updated_at";

/// Provides read operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the projects a member participates in, newest first, with the
    /// member's role and the project's total member count.
    pub async fn list_by_member(
        pool: &PgPool,
        member_id: DbId,
    ) -> Result<Vec<ProjectWithRole>, sqlx::Error> {
        sqlx::query_as::<_, ProjectWithRole>(
            "SELECT p.id, p.name, p.description, p.visibility, p.created_by,
                    p.created_at, p.updated_at, rel.role,
                    (SELECT COUNT(*) FROM relationships r2
                      WHERE r2.project_id = p.id) AS member_count
             FROM projects p
             JOIN relationships rel ON rel.project_id = p.id
             WHERE rel.member_id = $1
             ORDER BY p.id DESC",
        )
        .bind(member_id)
        .fetch_all(pool)
        .await
    }

    /// List the projects a caller may browse, newest first.
    ///
    /// Anonymous callers see public projects only; a member additionally
    /// sees projects they created or belong to.
    pub async fn list_visible(
        pool: &PgPool,
        member_id: Option<DbId>,
    ) -> Result<Vec<Project>, sqlx::Error> {
        match member_id {
            Some(member_id) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM projects p
                     WHERE p.visibility = 1
                        OR p.created_by = $1
                        OR EXISTS (SELECT 1 FROM relationships rel
                                    WHERE rel.project_id = p.id
                                      AND rel.member_id = $1)
                     ORDER BY p.id DESC"
                );
                sqlx::query_as::<_, Project>(&query)
                    .bind(member_id)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {COLUMNS} FROM projects WHERE visibility = 1 ORDER BY id DESC"
                );
                sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
            }
        }
    }
}

//! Repository for the `relationships` table.

use sqlx::PgPool;

use scribe_core::types::DbId;

use crate::models::relationship::Relationship;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, member_id, role, created_at";

/// Provides lookup operations for project memberships.
pub struct RelationshipRepo;

impl RelationshipRepo {
    /// Insert a membership row, returning the created row.
    ///
    /// The creator-derived owner row is inserted by the lifecycle
    /// transaction instead; this covers inviting additional members.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        member_id: DbId,
        role: i16,
    ) -> Result<Relationship, sqlx::Error> {
        let query = format!(
            "INSERT INTO relationships (project_id, member_id, role)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Relationship>(&query)
            .bind(project_id)
            .bind(member_id)
            .bind(role)
            .fetch_one(pool)
            .await
    }

    /// Find the unique membership row for a (project, member) pair.
    pub async fn find_by_project_and_member(
        pool: &PgPool,
        project_id: DbId,
        member_id: DbId,
    ) -> Result<Option<Relationship>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM relationships WHERE project_id = $1 AND member_id = $2"
        );
        sqlx::query_as::<_, Relationship>(&query)
            .bind(project_id)
            .bind(member_id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's membership roster, newest first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Relationship>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM relationships WHERE project_id = $1 ORDER BY id DESC");
        sqlx::query_as::<_, Relationship>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Count a project's members.
    pub async fn count_by_project(pool: &PgPool, project_id: DbId) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM relationships WHERE project_id = $1")
            .bind(project_id)
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }
}

//! Project lifecycle: validate-then-persist saves and cascading deletes.
//!
//! Both paths group their writes into a single transaction. A failed
//! statement drops the transaction, which rolls everything back before the
//! error surfaces, so readers never observe a half-applied save or a
//! half-deleted project.

use sqlx::PgPool;

use scribe_core::membership::roles;
use scribe_core::project::{validate_draft, ProjectDraft};
use scribe_core::types::DbId;

use crate::cache::ProjectCache;
use crate::error::DbError;
use crate::models::project::Project;
use crate::repositories::{project_repo, DocumentRepo, ProjectRepo};

/// Create or update a project.
///
/// Validation runs before the transaction begins (fail fast, no partial
/// writes). A draft without an id is a new project: the row is inserted
/// and the creator's owner relationship is persisted in the same
/// transaction, with the freshly assigned project id backfilled. A draft
/// with an id updates the existing row, or fails with not-found when the
/// row is gone.
pub async fn save(
    pool: &PgPool,
    cache: &ProjectCache,
    draft: &ProjectDraft,
) -> Result<Project, DbError> {
    let (state, password) = validate_draft(draft)?;

    let mut tx = pool.begin().await?;

    let project = match draft.id {
        None => {
            let query = format!(
                "INSERT INTO projects (name, description, visibility, password, created_by)
                 VALUES ($1, $2, $3, $4, $5)
                 RETURNING {}",
                project_repo::COLUMNS
            );
            let project: Project = sqlx::query_as(&query)
                .bind(&draft.name)
                .bind(&draft.description)
                .bind(state.as_i16())
                .bind(&password)
                .bind(draft.creator_id)
                .fetch_one(&mut *tx)
                .await?;

            // The staged owner relationship, backfilled with the assigned id.
            sqlx::query("INSERT INTO relationships (project_id, member_id, role) VALUES ($1, $2, $3)")
                .bind(project.id)
                .bind(draft.creator_id)
                .bind(roles::OWNER)
                .execute(&mut *tx)
                .await?;

            project
        }
        Some(id) => {
            let query = format!(
                "UPDATE projects
                 SET name = $2, description = $3, visibility = $4, password = $5,
                     updated_at = NOW()
                 WHERE id = $1
                 RETURNING {}",
                project_repo::COLUMNS
            );
            sqlx::query_as::<_, Project>(&query)
                .bind(id)
                .bind(&draft.name)
                .bind(&draft.description)
                .bind(state.as_i16())
                .bind(&password)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or_else(|| DbError::project_not_found(id))?
        }
    };

    tx.commit().await?;
    cache.invalidate(project.id).await;
    tracing::debug!(project_id = project.id, "Project saved");
    Ok(project)
}

/// Delete a project together with its documents, their history rows, and
/// its membership relationships, as one atomic unit.
///
/// Fails with not-found when no project exists for `project_id`; a
/// repeated call on an already-deleted id therefore stays loud instead of
/// silently succeeding.
pub async fn delete_by_project_id(
    pool: &PgPool,
    cache: &ProjectCache,
    project_id: DbId,
) -> Result<(), DbError> {
    if ProjectRepo::find_by_id(pool, project_id).await?.is_none() {
        return Err(DbError::project_not_found(project_id));
    }

    let doc_ids = DocumentRepo::list_ids_by_project(pool, project_id).await?;

    let mut tx = pool.begin().await?;

    if !doc_ids.is_empty() {
        sqlx::query("DELETE FROM documents WHERE project_id = $1")
            .bind(project_id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM document_histories WHERE doc_id = ANY($1)")
            .bind(&doc_ids)
            .execute(&mut *tx)
            .await?;
    }

    sqlx::query("DELETE FROM relationships WHERE project_id = $1")
        .bind(project_id)
        .execute(&mut *tx)
        .await?;

    sqlx::query("DELETE FROM projects WHERE id = $1")
        .bind(project_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;
    cache.invalidate(project_id).await;
    tracing::info!(project_id, documents = doc_ids.len(), "Project deleted");
    Ok(())
}

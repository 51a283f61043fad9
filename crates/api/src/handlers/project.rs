//! Handlers for the `/projects` resource.
//!
//! Authentication is out of scope: the caller identity arrives as an
//! already-resolved `member_id` query parameter, alongside an optional
//! project password for password-protected projects.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use scribe_core::error::CoreError;
use scribe_core::project::ProjectDraft;
use scribe_core::types::DbId;
use scribe_db::models::project::{Project, ProjectWithRole};
use scribe_db::models::relationship::Relationship;
use scribe_db::repositories::{ProjectRepo, RelationshipRepo};
use scribe_db::{lifecycle, permissions};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Caller identity and optional project password, resolved upstream.
#[derive(Debug, Deserialize)]
pub struct CallerQuery {
    pub member_id: Option<DbId>,
    pub password: Option<String>,
}

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    Json(mut draft): Json<ProjectDraft>,
) -> AppResult<(StatusCode, Json<Project>)> {
    // The store assigns the id; a client-supplied one is ignored.
    draft.id = None;
    let project = lifecycle::save(&state.pool, &state.project_cache, &draft).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// PUT /api/v1/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut draft): Json<ProjectDraft>,
) -> AppResult<Json<Project>> {
    draft.id = Some(id);
    let project = lifecycle::save(&state.pool, &state.project_cache, &draft).await?;
    Ok(Json(project))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(caller): Query<CallerQuery>,
) -> AppResult<Json<Project>> {
    let visible = permissions::can_view(
        &state.pool,
        &state.project_cache,
        id,
        caller.member_id,
        caller.password.as_deref(),
    )
    .await?;
    if !visible {
        return Err(AppError::Forbidden("You may not view this project".into()));
    }
    let project = state
        .project_cache
        .get(&state.pool, id, false)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}

/// DELETE /api/v1/projects/{id}
///
/// Only the project owner may delete; the cascade removes documents,
/// history, and relationships with the project row.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(caller): Query<CallerQuery>,
) -> AppResult<StatusCode> {
    let Some(member_id) = caller.member_id else {
        return Err(AppError::Forbidden("Only the owner may delete a project".into()));
    };
    if !permissions::is_owner(&state.pool, id, member_id).await? {
        return Err(AppError::Forbidden("Only the owner may delete a project".into()));
    }
    lifecycle::delete_by_project_id(&state.pool, &state.project_cache, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/projects
///
/// Anonymous callers see public projects; a member additionally sees
/// projects they created or belong to.
pub async fn list(
    State(state): State<AppState>,
    Query(caller): Query<CallerQuery>,
) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list_visible(&state.pool, caller.member_id).await?;
    Ok(Json(projects))
}

/// GET /api/v1/projects/mine
pub async fn list_mine(
    State(state): State<AppState>,
    Query(caller): Query<CallerQuery>,
) -> AppResult<Json<Vec<ProjectWithRole>>> {
    let Some(member_id) = caller.member_id else {
        return Err(AppError::Forbidden("A member id is required".into()));
    };
    let projects = ProjectRepo::list_by_member(&state.pool, member_id).await?;
    Ok(Json(projects))
}

/// GET /api/v1/projects/{id}/members
pub async fn members(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(caller): Query<CallerQuery>,
) -> AppResult<Json<Vec<Relationship>>> {
    let visible = permissions::can_view(
        &state.pool,
        &state.project_cache,
        id,
        caller.member_id,
        caller.password.as_deref(),
    )
    .await?;
    if !visible {
        return Err(AppError::Forbidden("You may not view this project".into()));
    }
    let roster = RelationshipRepo::list_by_project(&state.pool, id).await?;
    Ok(Json(roster))
}

/// Resolved access rights for a caller on a project.
#[derive(Debug, Serialize)]
pub struct AccessResponse {
    pub can_view: bool,
    pub can_edit: bool,
}

/// GET /api/v1/projects/{id}/access
pub async fn access(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(caller): Query<CallerQuery>,
) -> AppResult<Json<AccessResponse>> {
    let can_view = permissions::can_view(
        &state.pool,
        &state.project_cache,
        id,
        caller.member_id,
        caller.password.as_deref(),
    )
    .await?;
    let can_edit = match caller.member_id {
        Some(member_id) => permissions::can_edit(&state.pool, id, member_id).await?,
        None => false,
    };
    Ok(Json(AccessResponse { can_view, can_edit }))
}

//! Handlers for a project's document tree.

use axum::extract::{Path, Query, State};
use axum::response::Html;
use axum::Json;
use serde::Deserialize;

use scribe_core::tree::{self, TreeEntry};
use scribe_core::types::DbId;
use scribe_db::permissions;
use scribe_db::repositories::DocumentRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Caller identity, optional password, and the selected document for the
/// rendered navigation.
#[derive(Debug, Deserialize)]
pub struct TreeQuery {
    pub member_id: Option<DbId>,
    pub password: Option<String>,
    /// Document to mark selected in the rendered navigation.
    pub selected: Option<DbId>,
}

/// Canonical view path for a document; injected into the tree renderer.
fn document_path(doc_id: DbId) -> String {
    format!("/docs/{doc_id}")
}

async fn ensure_visible(state: &AppState, project_id: DbId, query: &TreeQuery) -> AppResult<()> {
    let visible = permissions::can_view(
        &state.pool,
        &state.project_cache,
        project_id,
        query.member_id,
        query.password.as_deref(),
    )
    .await?;
    if visible {
        Ok(())
    } else {
        Err(AppError::Forbidden("You may not view this project".into()))
    }
}

/// GET /api/v1/projects/{id}/tree
///
/// The flat widget-format sequence: every document as
/// `{id, text, parent}` with `"#"` marking roots.
pub async fn tree(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Query(query): Query<TreeQuery>,
) -> AppResult<Json<Vec<TreeEntry>>> {
    ensure_visible(&state, project_id, &query).await?;
    let nodes = DocumentRepo::list_nodes(&state.pool, project_id).await?;
    Ok(Json(tree::to_tree_entries(&nodes)))
}

/// GET /api/v1/projects/{id}/nav
///
/// The rendered navigation list, with the `selected` document marked and
/// its ancestor chain held open.
pub async fn nav(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Query(query): Query<TreeQuery>,
) -> AppResult<Html<String>> {
    ensure_visible(&state, project_id, &query).await?;
    let nodes = DocumentRepo::list_nodes(&state.pool, project_id).await?;
    let html = tree::render_nav_tree(&nodes, query.selected.unwrap_or(0), document_path);
    Ok(Html(html))
}

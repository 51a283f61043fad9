//! Route definitions for the `/projects` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::{document, project};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                -> list
/// POST   /                -> create
/// GET    /mine            -> list_mine
/// GET    /{id}            -> get_by_id
/// PUT    /{id}            -> update
/// DELETE /{id}            -> delete
/// GET    /{id}/members    -> members
/// GET    /{id}/access     -> access
/// GET    /{id}/tree       -> document tree (widget format)
/// GET    /{id}/nav        -> rendered navigation
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route("/mine", get(project::list_mine))
        .route(
            "/{id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route("/{id}/members", get(project::members))
        .route("/{id}/access", get(project::access))
        .route("/{id}/tree", get(document::tree))
        .route("/{id}/nav", get(document::nav))
}

pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                  list, create
/// /projects/mine             participation listing
/// /projects/{id}             get, update, delete
/// /projects/{id}/members     membership roster
/// /projects/{id}/access      resolved view/edit rights
/// /projects/{id}/tree        widget-format document tree
/// /projects/{id}/nav         rendered navigation
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/projects", project::router())
}

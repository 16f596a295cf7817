pub mod health;
pub mod palette;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /palettes                 list, create
/// /palettes/{id}            delete
///
/// /projects                 list, create
/// /projects/{id}            get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/palettes", palette::router())
        .nest("/projects", project::router())
}

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::palette;
use crate::state::AppState;

/// Routes mounted at `/palettes`.
///
/// ```text
/// GET    /           -> list
/// POST   /           -> create
/// DELETE /{id}       -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(palette::list).post(palette::create))
        .route("/{id}", delete(palette::delete))
}

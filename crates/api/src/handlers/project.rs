//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use palette_picker_core::error::CoreError;
use palette_picker_core::project::{ENTITY, EXPECTED_FORMAT, REQUIRED_FIELDS};
use palette_picker_core::validation;
use palette_picker_db::models::project::{CreateProject, Project};
use palette_picker_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::handlers::CreatedId;
use crate::state::AppState;

/// GET /api/v1/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    tracing::debug!(count = projects.len(), "Listed projects");
    Ok(Json(projects))
}

/// GET /api/v1/projects/{id}
///
/// Responds with the matching rows as an array, or 404 when there are none.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::find_by_id(&state.pool, &id).await?;
    if projects.is_empty() {
        return Err(AppError::Core(CoreError::NotFound { entity: ENTITY, id }));
    }
    Ok(Json(projects))
}

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> AppResult<(StatusCode, Json<CreatedId>)> {
    validation::require_fields(&body, REQUIRED_FIELDS, EXPECTED_FORMAT)?;
    let input = CreateProject {
        project: validation::text_field(&body, "project", EXPECTED_FORMAT)?,
    };

    let id = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(id, project = %input.project, "Created project");

    Ok((StatusCode::CREATED, Json(CreatedId { id })))
}

//! Handlers for the `/palettes` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use palette_picker_core::error::CoreError;
use palette_picker_core::palette::{EXPECTED_FORMAT, REQUIRED_FIELDS};
use palette_picker_core::validation;
use palette_picker_db::models::palette::{CreatePalette, Palette};
use palette_picker_db::repositories::PaletteRepo;
use serde_json::Value;

use crate::error::AppResult;
use crate::extract::JsonBody;
use crate::handlers::CreatedId;
use crate::state::AppState;

/// GET /api/v1/palettes
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Palette>>> {
    let palettes = PaletteRepo::list(&state.pool).await?;
    tracing::debug!(count = palettes.len(), "Listed palettes");
    Ok(Json(palettes))
}

/// POST /api/v1/palettes
///
/// Rejects with 422 on the first of `palette`, `project_id`, `palette_name`
/// that is missing or falsy.
pub async fn create(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> AppResult<(StatusCode, Json<CreatedId>)> {
    let input = parse_create(&body)?;
    let id = PaletteRepo::create(&state.pool, &input).await?;

    tracing::info!(
        id,
        project_id = input.project_id,
        palette_name = %input.palette_name,
        "Created palette"
    );

    Ok((StatusCode::CREATED, Json(CreatedId { id })))
}

/// DELETE /api/v1/palettes/{id}
///
/// Always answers 204 when the store call succeeds, carrying the number of
/// rows removed as the body.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<(StatusCode, Json<u64>)> {
    let deleted = PaletteRepo::delete(&state.pool, &id).await?;
    tracing::info!(id = %id, deleted, "Deleted palette");
    Ok((StatusCode::NO_CONTENT, Json(deleted)))
}

fn parse_create(body: &Value) -> Result<CreatePalette, CoreError> {
    validation::require_fields(body, REQUIRED_FIELDS, EXPECTED_FORMAT)?;
    Ok(CreatePalette {
        palette: validation::field(body, "palette", EXPECTED_FORMAT)?,
        project_id: validation::integer_field(body, "project_id", EXPECTED_FORMAT)?,
        palette_name: validation::text_field(body, "palette_name", EXPECTED_FORMAT)?,
    })
}

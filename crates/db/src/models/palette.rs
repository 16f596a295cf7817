//! Palette entity model and DTOs.

use palette_picker_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A palette row from the `palettes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Palette {
    pub id: DbId,
    /// Ordered color values, e.g. `"#a1b2c3"`.
    pub palette: Vec<String>,
    pub project_id: DbId,
    pub palette_name: String,
}

/// DTO for creating a new palette.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePalette {
    pub palette: Vec<String>,
    pub project_id: DbId,
    pub palette_name: String,
}

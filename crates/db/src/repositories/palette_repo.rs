//! Repository for the `palettes` table.

use palette_picker_core::types::DbId;
use sqlx::PgPool;

use crate::models::palette::{CreatePalette, Palette};

const COLUMNS: &str = "id, palette, project_id, palette_name";

/// Provides list, insert and delete for palettes.
pub struct PaletteRepo;

impl PaletteRepo {
    /// List all palettes in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Palette>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM palettes ORDER BY id");
        sqlx::query_as::<_, Palette>(&query).fetch_all(pool).await
    }

    /// Insert a new palette, returning the generated id.
    ///
    /// A `project_id` with no matching project violates the foreign key and
    /// comes back as a database error.
    pub async fn create(pool: &PgPool, input: &CreatePalette) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO palettes (palette, project_id, palette_name)
             VALUES ($1, $2, $3)
             RETURNING id",
        )
        .bind(&input.palette)
        .bind(input.project_id)
        .bind(&input.palette_name)
        .fetch_one(pool)
        .await
    }

    /// Touch the `palettes` table without reading any rows.
    pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1 FROM palettes LIMIT 1")
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Delete every palette whose id matches the raw path value.
    ///
    /// Returns the number of rows removed, which may be zero.
    pub async fn delete(pool: &PgPool, id: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM palettes WHERE id = $1::bigint")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}

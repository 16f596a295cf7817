//! Repository for the `projects` table.

use palette_picker_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project";

/// Provides list, lookup and insert for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// List all projects in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY id");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Find every project whose id matches the raw path value.
    ///
    /// The id is cast to `BIGINT` by the database, so text that is not a
    /// number fails as a query error rather than matching nothing.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1::bigint");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_all(pool)
            .await
    }

    /// Touch the `projects` table without reading any rows.
    pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
        sqlx::query("SELECT 1 FROM projects LIMIT 1")
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Insert a new project, returning the generated id.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>("INSERT INTO projects (project) VALUES ($1) RETURNING id")
            .bind(&input.project)
            .fetch_one(pool)
            .await
    }
}

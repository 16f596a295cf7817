//! Liveness of the two resource tables.
//!
//! `GET /health` answers 200 while the process is up and reports, per
//! table, whether a query against it succeeded:
//!
//! ```text
//! { "status": "ok", "tables": { "palettes": true, "projects": true } }
//! ```

use axum::extract::State;
use axum::{routing::get, Json, Router};
use palette_picker_db::repositories::{PaletteRepo, ProjectRepo};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct TableHealth {
    pub palettes: bool,
    pub projects: bool,
}

#[derive(Debug, Serialize)]
pub struct HealthReport {
    /// `ok` when every table answered, `degraded` otherwise.
    pub status: &'static str,
    pub tables: TableHealth,
}

async fn report(State(state): State<AppState>) -> Json<HealthReport> {
    let (palettes, projects) = tokio::join!(
        PaletteRepo::ping(&state.pool),
        ProjectRepo::ping(&state.pool)
    );

    if let Err(e) = &palettes {
        tracing::warn!(error = %e, "palettes table unreachable");
    }
    if let Err(e) = &projects {
        tracing::warn!(error = %e, "projects table unreachable");
    }

    let tables = TableHealth {
        palettes: palettes.is_ok(),
        projects: projects.is_ok(),
    };
    let status = if tables.palettes && tables.projects {
        "ok"
    } else {
        "degraded"
    };

    Json(HealthReport { status, tables })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(report))
}

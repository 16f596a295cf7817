//! Request handlers for palettes and projects.
//!
//! Each handler makes exactly one repository call in `palette_picker_db`
//! and maps the outcome to a response, converting failures via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod palette;
pub mod project;

use palette_picker_core::types::DbId;
use serde::Serialize;

/// Body returned by the create endpoints.
#[derive(Debug, Serialize)]
pub struct CreatedId {
    pub id: DbId,
}

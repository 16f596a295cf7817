//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument and issue a single statement.

pub mod palette_repo;
pub mod project_repo;

pub use palette_repo::PaletteRepo;
pub use project_repo::ProjectRepo;

//! Domain types and request validation shared by the db and api crates.

pub mod error;
pub mod palette;
pub mod project;
pub mod types;
pub mod validation;

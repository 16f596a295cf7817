//! Request shape for palette creation.

/// Fields a palette create request must carry, in the order they are checked.
pub const REQUIRED_FIELDS: &[&str] = &["palette", "project_id", "palette_name"];

/// Shape quoted back to the client when a field is missing or malformed.
pub const EXPECTED_FORMAT: &str =
    "{palette: <array>, project_id: <number>, palette_name: <string>}";

//! Request shape for project creation.

/// Fields a project create request must carry.
pub const REQUIRED_FIELDS: &[&str] = &["project"];

/// Shape quoted back to the client when a field is missing or malformed.
pub const EXPECTED_FORMAT: &str = "{ project: <string> }";

/// Entity label used in not-found messages.
pub const ENTITY: &str = "project";

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Expected format: {expected_format}. You're missing a \"{field}\" property.")]
    MissingField {
        field: &'static str,
        expected_format: &'static str,
    },

    #[error("Expected format: {expected_format}. You're sending an invalid \"{field}\" property.")]
    InvalidField {
        field: &'static str,
        expected_format: &'static str,
    },

    #[error("Could not find {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },
}

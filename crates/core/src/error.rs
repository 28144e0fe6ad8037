#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Category '{name}' already exists")]
    DuplicateName { name: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    /// Unique index on `company.name` rejected the insert.
    #[error("duplicate name: {0}")]
    DuplicateName(String),
    #[error("database error: {0}")]
    Db(String),
}

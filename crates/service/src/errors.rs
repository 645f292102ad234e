use thiserror::Error;

use models::errors::ModelError;

use crate::validation::{ValidationErrors, DUPLICATE_NAME};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(ValidationErrors),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn duplicate_name() -> Self {
        Self::Validation(ValidationErrors::single("name", DUPLICATE_NAME))
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::DuplicateName(_) => Self::duplicate_name(),
            ModelError::Validation(msg) => Self::Validation(ValidationErrors::single("non_field_errors", msg)),
            ModelError::Db(msg) => Self::Db(msg),
        }
    }
}

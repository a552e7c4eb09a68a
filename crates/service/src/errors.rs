use models::errors::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    MissingParameter(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn db(err: impl std::fmt::Display) -> Self { Self::Db(err.to_string()) }
}

impl From<ModelError> for ServiceError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::Validation(msg) => Self::Validation(msg),
            ModelError::Duplicate { entity } => Self::Conflict(duplicate_message(entity)),
            ModelError::Db(msg) => Self::Db(msg),
        }
    }
}

fn duplicate_message(entity: &str) -> String {
    let mut chars = entity.chars();
    match chars.next() {
        Some(first) => format!("{}{} already exists", first.to_uppercase(), chars.as_str()),
        None => "resource already exists".to_string(),
    }
}

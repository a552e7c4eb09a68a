use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("{entity} already exists")]
    Duplicate { entity: &'static str },
    #[error("database error: {0}")]
    Db(String),
}

impl ModelError {
    /// Classify a driver error, turning unique-constraint violations into `Duplicate`.
    pub fn from_db(entity: &'static str, err: sea_orm::DbErr) -> Self {
        match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(_)) => Self::Duplicate { entity },
            _ => Self::Db(err.to_string()),
        }
    }
}

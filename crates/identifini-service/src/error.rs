use thiserror::Error;

/// Service layer errors
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error(transparent)]
    DatabaseError(#[from] identifini_db::error::DbError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Missing required field: {0}")]
    MissingRequiredField(&'static str),
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;

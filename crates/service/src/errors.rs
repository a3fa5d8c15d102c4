use models::errors::ValidationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("database error: {0}")]
    Db(String),
}

impl ServiceError {
    pub fn db(e: sea_orm::DbErr) -> Self { Self::Db(e.to_string()) }
}

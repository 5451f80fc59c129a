//! Error types for the record store

use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum StoreError {
    /// The record does not fit the table (missing non-null value, id collision).
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// The database could not be reached or written.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) => match db_err.kind() {
                sqlx::error::ErrorKind::UniqueViolation
                | sqlx::error::ErrorKind::NotNullViolation
                | sqlx::error::ErrorKind::CheckViolation
                | sqlx::error::ErrorKind::ForeignKeyViolation => {
                    StoreError::ConstraintViolation(db_err.message().to_string())
                }
                _ => StoreError::StorageUnavailable(err.to_string()),
            },
            _ => StoreError::StorageUnavailable(err.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for StoreError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        StoreError::Migration(err.to_string())
    }
}

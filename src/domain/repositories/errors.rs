use thiserror::Error;

/// Errors surfaced by repository implementations
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("Conflicting record: {0}")]
    Conflict(String),

    #[error("Stored data is invalid: {0}")]
    Corrupt(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

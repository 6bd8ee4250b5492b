// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod in_memory;
pub mod postgres_match_repository;
pub mod postgres_team_repository;

pub use in_memory::InMemoryStore;
pub use postgres_match_repository::PostgresMatchRepository;
pub use postgres_team_repository::PostgresTeamRepository;

use crate::domain::repositories::RepositoryError;

/// Turns constraint violations into conflicts, anything else stays a database error
fn map_write_error(error: sqlx::Error, kind: &str, key: &str) -> RepositoryError {
    match error.as_database_error() {
        Some(db) if db.is_unique_violation() => {
            RepositoryError::Conflict(format!("{kind} '{key}' already exists"))
        }
        Some(db) if db.is_foreign_key_violation() => {
            RepositoryError::Conflict(format!("{kind} '{key}' references a missing team"))
        }
        _ => RepositoryError::Database(error),
    }
}

// Repository interfaces (ports)
// Implemented by the infrastructure layer

pub mod errors;
pub mod match_repository;
pub mod team_repository;

pub use errors::{RepositoryError, RepositoryResult};
pub use match_repository::MatchRepository;
pub use team_repository::TeamRepository;

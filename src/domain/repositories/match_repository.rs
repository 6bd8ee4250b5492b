use async_trait::async_trait;

use super::errors::RepositoryResult;
use crate::domain::fixture::{Match, MatchId, NewMatch};

/// Repository trait for Match aggregate
#[async_trait]
pub trait MatchRepository: Send + Sync {
    /// Store a new match and return it with its assigned id
    async fn insert(&self, result: &NewMatch) -> RepositoryResult<Match>;

    /// Find a match by id
    async fn find_by_id(&self, id: MatchId) -> RepositoryResult<Option<Match>>;

    /// Find the match between two teams, in either order
    async fn find_pairing(&self, team_a: &str, team_b: &str) -> RepositoryResult<Option<Match>>;

    /// Count the matches a team played
    async fn count_for_team(&self, team: &str) -> RepositoryResult<usize>;

    /// List all matches in insertion order
    async fn list(&self) -> RepositoryResult<Vec<Match>>;

    /// Overwrite teams and score of an existing match
    async fn update(&self, result: &Match) -> RepositoryResult<()>;

    /// Delete a match, returning what was removed
    async fn delete(&self, id: MatchId) -> RepositoryResult<Match>;
}

use async_trait::async_trait;

use super::errors::RepositoryResult;
use crate::domain::team::{GroupNumber, Team};

/// Repository trait for Team aggregate
///
/// Defines the contract for persisting and retrieving teams.
/// Listing methods return teams in registration (insertion) order, which
/// the ranking engine relies on for stable tie handling.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Insert a new team
    async fn insert(&self, team: &Team) -> RepositoryResult<()>;

    /// Find a team by its name
    async fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Team>>;

    /// List teams, optionally restricted to one group
    async fn list(&self, group: Option<GroupNumber>) -> RepositoryResult<Vec<Team>>;

    /// Count the teams currently in a group
    async fn count_in_group(&self, group: GroupNumber) -> RepositoryResult<usize>;

    /// Replace the team stored under `current_name`
    ///
    /// When the name changes, every match referencing `current_name` is
    /// rewritten in the same atomic step.
    async fn update(&self, current_name: &str, team: &Team) -> RepositoryResult<()>;

    /// Delete a team and every match it played
    ///
    /// Returns the number of matches removed alongside the team.
    async fn delete(&self, name: &str) -> RepositoryResult<usize>;

    /// Delete every team and match, returning (teams, matches) removed
    async fn clear(&self) -> RepositoryResult<(usize, usize)>;
}

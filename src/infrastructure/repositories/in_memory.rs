use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::fixture::{Match, MatchId, NewMatch};
use crate::domain::repositories::{
    MatchRepository, RepositoryError, RepositoryResult, TeamRepository,
};
use crate::domain::team::{GroupNumber, Team};

#[derive(Debug, Default)]
struct State {
    teams: Vec<Team>,
    matches: Vec<Match>,
    next_match_id: MatchId,
}

/// In-memory implementation of both repositories
///
/// Teams and matches share one lock so a rename or a cascading delete is
/// a single atomic step, mirroring the foreign keys of the PostgreSQL
/// schema. Used for local runs (`STORAGE_BACKEND=memory`) and tests.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: RwLock<State>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TeamRepository for InMemoryStore {
    async fn insert(&self, team: &Team) -> RepositoryResult<()> {
        let mut state = self.state.write().await;
        if state.teams.iter().any(|t| t.name() == team.name()) {
            return Err(RepositoryError::Conflict(format!(
                "team '{}' already exists",
                team.name()
            )));
        }
        state.teams.push(team.clone());
        Ok(())
    }

    async fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Team>> {
        let state = self.state.read().await;
        Ok(state.teams.iter().find(|t| t.name() == name).cloned())
    }

    async fn list(&self, group: Option<GroupNumber>) -> RepositoryResult<Vec<Team>> {
        let state = self.state.read().await;
        Ok(state
            .teams
            .iter()
            .filter(|t| group.map_or(true, |g| t.group() == g))
            .cloned()
            .collect())
    }

    async fn count_in_group(&self, group: GroupNumber) -> RepositoryResult<usize> {
        let state = self.state.read().await;
        Ok(state.teams.iter().filter(|t| t.group() == group).count())
    }

    async fn update(&self, current_name: &str, team: &Team) -> RepositoryResult<()> {
        let mut state = self.state.write().await;

        if team.name() != current_name && state.teams.iter().any(|t| t.name() == team.name()) {
            return Err(RepositoryError::Conflict(format!(
                "team '{}' already exists",
                team.name()
            )));
        }

        let slot = state
            .teams
            .iter_mut()
            .find(|t| t.name() == current_name)
            .ok_or_else(|| RepositoryError::NotFound(format!("Team '{}'", current_name)))?;
        *slot = team.clone();

        if team.name() != current_name {
            for played in state.matches.iter_mut() {
                played.rename_team(current_name, team.name());
            }
        }
        Ok(())
    }

    async fn delete(&self, name: &str) -> RepositoryResult<usize> {
        let mut state = self.state.write().await;

        let before = state.teams.len();
        state.teams.retain(|t| t.name() != name);
        if state.teams.len() == before {
            return Err(RepositoryError::NotFound(format!("Team '{}'", name)));
        }

        let before = state.matches.len();
        state.matches.retain(|m| !m.involves(name));
        Ok(before - state.matches.len())
    }

    async fn clear(&self) -> RepositoryResult<(usize, usize)> {
        let mut state = self.state.write().await;
        let removed = (state.teams.len(), state.matches.len());
        state.teams.clear();
        state.matches.clear();
        Ok(removed)
    }
}

#[async_trait]
impl MatchRepository for InMemoryStore {
    async fn insert(&self, result: &NewMatch) -> RepositoryResult<Match> {
        let mut state = self.state.write().await;
        state.next_match_id += 1;
        let stored = result.clone().into_match(state.next_match_id);
        state.matches.push(stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: MatchId) -> RepositoryResult<Option<Match>> {
        let state = self.state.read().await;
        Ok(state.matches.iter().find(|m| m.id == id).cloned())
    }

    async fn find_pairing(&self, team_a: &str, team_b: &str) -> RepositoryResult<Option<Match>> {
        let state = self.state.read().await;
        Ok(state
            .matches
            .iter()
            .find(|m| m.is_pairing(team_a, team_b))
            .cloned())
    }

    async fn count_for_team(&self, team: &str) -> RepositoryResult<usize> {
        let state = self.state.read().await;
        Ok(state.matches.iter().filter(|m| m.involves(team)).count())
    }

    async fn list(&self) -> RepositoryResult<Vec<Match>> {
        Ok(self.state.read().await.matches.clone())
    }

    async fn update(&self, result: &Match) -> RepositoryResult<()> {
        let mut state = self.state.write().await;
        let slot = state
            .matches
            .iter_mut()
            .find(|m| m.id == result.id)
            .ok_or_else(|| RepositoryError::NotFound(format!("Match {}", result.id)))?;
        *slot = result.clone();
        Ok(())
    }

    async fn delete(&self, id: MatchId) -> RepositoryResult<Match> {
        let mut state = self.state.write().await;
        let position = state
            .matches
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| RepositoryError::NotFound(format!("Match {}", id)))?;
        Ok(state.matches.remove(position))
    }
}

use thiserror::Error;

use crate::domain::fixture::{MatchError, MatchId};
use crate::domain::ranking::RankingError;
use crate::domain::repositories::RepositoryError;
use crate::domain::team::{GroupNumber, TeamError, MAX_TEAMS_PER_GROUP};

/// Everything the championship service can refuse or fail with
#[derive(Debug, Error)]
pub enum ChampionshipError {
    #[error(transparent)]
    InvalidTeam(#[from] TeamError),

    #[error(transparent)]
    InvalidMatch(#[from] MatchError),

    #[error("Group {0} already has {max} teams. No more teams can be added.", max = MAX_TEAMS_PER_GROUP)]
    GroupFull(GroupNumber),

    #[error("Team '{0}' already exists")]
    DuplicateTeam(String),

    #[error("Team not found: {0}")]
    TeamNotFound(String),

    #[error("Team '{0}' not recognized")]
    UnknownTeam(String),

    #[error("No cross-group matches allowed. Teams '{team_a}' and '{team_b}' are in different groups.")]
    CrossGroupMatch { team_a: String, team_b: String },

    #[error("A match between {team_a} and {team_b} already exists.")]
    DuplicateMatch { team_a: String, team_b: String },

    #[error("Match not found: {0}")]
    MatchNotFound(MatchId),

    #[error("Team '{team}' has {matches} recorded match(es) and cannot change group")]
    TeamHasMatches { team: String, matches: usize },

    #[error("Rankings unavailable: {0}")]
    Ranking(#[from] RankingError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ChampionshipResult<T> = Result<T, ChampionshipError>;

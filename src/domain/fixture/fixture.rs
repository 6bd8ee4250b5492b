use super::events::MatchEvent;
use serde::Serialize;
use thiserror::Error;

/// Storage-assigned match identifier
pub type MatchId = i64;

/// Errors raised by Match invariants
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("Team A and Team B must be different.")]
    SameTeam,

    #[error("Team names cannot be empty")]
    EmptyTeamName,

    #[error("Goals must be a non-negative integer, got {0}")]
    InvalidGoals(i64),
}

/// Result of a match seen from the fixture, not from either team
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    TeamAWins,
    TeamBWins,
    Draw,
}

/// A match result that has not been stored yet
///
/// Holds everything a [`Match`] does except the identifier, which the
/// repository assigns on insert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMatch {
    pub team_a: String,
    pub team_b: String,
    pub goals_a: u32,
    pub goals_b: u32,
}

impl NewMatch {
    /// Validates a match result
    ///
    /// Team existence, group membership and pair uniqueness need the rest
    /// of the championship and are checked by the service.
    pub fn new(
        team_a: impl Into<String>,
        team_b: impl Into<String>,
        goals_a: i64,
        goals_b: i64,
    ) -> Result<Self, MatchError> {
        let team_a = team_a.into();
        let team_b = team_b.into();

        if team_a.is_empty() || team_b.is_empty() {
            return Err(MatchError::EmptyTeamName);
        }
        if team_a == team_b {
            return Err(MatchError::SameTeam);
        }

        Ok(Self {
            team_a,
            team_b,
            goals_a: goals(goals_a)?,
            goals_b: goals(goals_b)?,
        })
    }

    /// Attaches the identifier the repository assigned
    pub fn into_match(self, id: MatchId) -> Match {
        Match {
            id,
            team_a: self.team_a,
            team_b: self.team_b,
            goals_a: self.goals_a,
            goals_b: self.goals_b,
        }
    }
}

fn goals(value: i64) -> Result<u32, MatchError> {
    u32::try_from(value).map_err(|_| MatchError::InvalidGoals(value))
}

/// Match aggregate
///
/// A played match between two teams of the same group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    pub id: MatchId,
    pub team_a: String,
    pub team_b: String,
    pub goals_a: u32,
    pub goals_b: u32,
}

impl Match {
    /// Which side, if any, scored more
    pub fn outcome(&self) -> Outcome {
        use std::cmp::Ordering::*;
        match self.goals_a.cmp(&self.goals_b) {
            Greater => Outcome::TeamAWins,
            Less => Outcome::TeamBWins,
            Equal => Outcome::Draw,
        }
    }

    /// True when `team` played in this match
    pub fn involves(&self, team: &str) -> bool {
        self.team_a == team || self.team_b == team
    }

    /// True when this match is between `a` and `b`, in either order
    pub fn is_pairing(&self, a: &str, b: &str) -> bool {
        (self.team_a == a && self.team_b == b) || (self.team_a == b && self.team_b == a)
    }

    /// Replaces teams and score, returning the matching event
    pub fn replace(&mut self, result: NewMatch) -> MatchEvent {
        let previous = self.clone();
        *self = result.into_match(self.id);
        MatchEvent::Updated {
            previous,
            current: self.clone(),
        }
    }

    /// Points every reference to `old` at `new`
    pub fn rename_team(&mut self, old: &str, new: &str) {
        if self.team_a == old {
            self.team_a = new.to_string();
        }
        if self.team_b == old {
            self.team_b = new.to_string();
        }
    }
}

use super::fixture::{Match, MatchId};
use serde::Serialize;

/// Domain events that occur within the Match aggregate
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MatchEvent {
    /// Fired when a match result is stored
    Recorded {
        #[serde(rename = "match")]
        result: Match,
    },
    /// Fired when teams or score of a match change
    Updated { previous: Match, current: Match },
    /// Fired when a match is deleted
    Removed {
        #[serde(rename = "match")]
        result: Match,
    },
}

impl MatchEvent {
    /// Returns the id of the match this event concerns
    pub fn match_id(&self) -> MatchId {
        match self {
            MatchEvent::Recorded { result } => result.id,
            MatchEvent::Updated { current, .. } => current.id,
            MatchEvent::Removed { result } => result.id,
        }
    }
}

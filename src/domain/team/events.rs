use super::value_objects::GroupNumber;
use serde::Serialize;

/// Domain events that occur within the Team aggregate
///
/// Feed the audit trail; never read back by the ranking engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TeamEvent {
    /// Fired when a team is registered
    Registered {
        name: String,
        registration_date: String,
        group: GroupNumber,
    },
    /// Fired when any field of a team changes, including its name
    Updated {
        previous_name: String,
        name: String,
        registration_date: String,
        group: GroupNumber,
    },
    /// Fired when a team is removed together with its matches
    Removed { name: String, matches_removed: usize },
}

impl TeamEvent {
    /// Returns the (current) team name this event concerns
    pub fn team_name(&self) -> &str {
        match self {
            TeamEvent::Registered { name, .. } => name,
            TeamEvent::Updated { name, .. } => name,
            TeamEvent::Removed { name, .. } => name,
        }
    }
}

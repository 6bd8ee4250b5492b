//! Audit trail of championship mutations
//!
//! The championship service emits one [`AuditRecord`] per successful
//! mutation to an [`AuditSink`]. Sinks live in the infrastructure layer;
//! the ranking engine never touches them.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::fixture::MatchEvent;
use crate::domain::team::TeamEvent;

/// What changed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "aggregate", rename_all = "snake_case")]
pub enum AuditEvent {
    Team(TeamEvent),
    Match(MatchEvent),
    Cleared {
        teams_removed: usize,
        matches_removed: usize,
    },
}

impl From<TeamEvent> for AuditEvent {
    fn from(event: TeamEvent) -> Self {
        AuditEvent::Team(event)
    }
}

impl From<MatchEvent> for AuditEvent {
    fn from(event: MatchEvent) -> Self {
        AuditEvent::Match(event)
    }
}

/// A single entry in the audit trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuditRecord {
    pub id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub event: AuditEvent,
}

impl AuditRecord {
    /// Stamps an event with a fresh id and the current time
    pub fn now(event: impl Into<AuditEvent>) -> Self {
        Self {
            id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            event: event.into(),
        }
    }
}

/// Destination for audit records
pub trait AuditSink: Send + Sync {
    /// Accept one record; must not fail the mutation that produced it
    fn record(&self, record: AuditRecord);

    /// Most recent records, oldest first, when the sink retains any
    fn recent(&self, _limit: usize) -> Vec<AuditRecord> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::team::GroupNumber;

    #[test]
    fn record_wraps_team_event() {
        let record = AuditRecord::now(TeamEvent::Removed {
            name: "Lions".to_string(),
            matches_removed: 0,
        });

        assert!(matches!(record.event, AuditEvent::Team(_)));
    }

    #[test]
    fn nested_tags_serialize_flat() {
        let record = AuditRecord::now(TeamEvent::Registered {
            name: "Lions".to_string(),
            registration_date: "01/01".to_string(),
            group: GroupNumber::One,
        });

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["event"]["aggregate"], "team");
        assert_eq!(json["event"]["kind"], "registered");
        assert_eq!(json["event"]["name"], "Lions");
        assert_eq!(json["event"]["group"], 1);
    }
}

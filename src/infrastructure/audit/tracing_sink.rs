use crate::domain::audit::{AuditEvent, AuditRecord, AuditSink};

/// Writes each audit record as a structured `info` event under target `audit`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAuditSink;

impl AuditSink for TracingAuditSink {
    fn record(&self, record: AuditRecord) {
        let kind = match &record.event {
            AuditEvent::Team(event) => format!("team:{}", event.team_name()),
            AuditEvent::Match(event) => format!("match:{}", event.match_id()),
            AuditEvent::Cleared { .. } => "championship".to_string(),
        };
        let detail = serde_json::to_string(&record.event).unwrap_or_default();

        tracing::info!(
            target: "audit",
            audit_id = %record.id,
            occurred_at = %record.occurred_at,
            subject = %kind,
            event = %detail,
            "Championship changed"
        );
    }
}

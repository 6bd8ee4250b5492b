// Audit sinks
// Destinations for the records the championship service emits

pub mod memory_log;
pub mod tracing_sink;

pub use memory_log::MemoryAuditLog;
pub use tracing_sink::TracingAuditSink;

use std::sync::Arc;

use crate::domain::audit::{AuditRecord, AuditSink};

/// Forwards every record to each inner sink
///
/// `recent` is answered by the first sink that retains records.
pub struct FanOutAuditSink {
    sinks: Vec<Arc<dyn AuditSink>>,
}

impl FanOutAuditSink {
    pub fn new(sinks: Vec<Arc<dyn AuditSink>>) -> Self {
        Self { sinks }
    }
}

impl AuditSink for FanOutAuditSink {
    fn record(&self, record: AuditRecord) {
        for sink in &self.sinks {
            sink.record(record.clone());
        }
    }

    fn recent(&self, limit: usize) -> Vec<AuditRecord> {
        self.sinks
            .iter()
            .map(|sink| sink.recent(limit))
            .find(|records| !records.is_empty())
            .unwrap_or_default()
    }
}

use std::collections::VecDeque;
use std::sync::{Mutex, PoisonError};

use crate::domain::audit::{AuditRecord, AuditSink};

/// Bounded in-memory audit log
///
/// Keeps the newest `capacity` records; older ones are dropped.
#[derive(Debug)]
pub struct MemoryAuditLog {
    capacity: usize,
    records: Mutex<VecDeque<AuditRecord>>,
}

impl MemoryAuditLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            records: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }
}

impl AuditSink for MemoryAuditLog {
    fn record(&self, record: AuditRecord) {
        if self.capacity == 0 {
            return;
        }
        let mut records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        if records.len() == self.capacity {
            records.pop_front();
        }
        records.push_back(record);
    }

    fn recent(&self, limit: usize) -> Vec<AuditRecord> {
        let records = self.records.lock().unwrap_or_else(PoisonError::into_inner);
        let skip = records.len().saturating_sub(limit);
        records.iter().skip(skip).cloned().collect()
    }
}

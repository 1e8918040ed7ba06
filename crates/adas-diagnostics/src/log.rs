//! Append-only diagnostic record store.

use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};

use crate::code::{FaultCode, Severity};

/// A single diagnostic event. Never mutated after being recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticRecord {
    /// Which fault occurred.
    pub code: FaultCode,
    /// How critical it is.
    pub severity: Severity,
    /// When it was reported, in milliseconds since start.
    pub timestamp_ms: u64,
    /// Human-readable description.
    pub message: String,
}

/// Collects diagnostic records reported by the feature policies.
///
/// Append-only within a run: a feature's earlier record for a code stays in
/// the log until that code is explicitly cleared. `report` is total — it
/// cannot fail and never filters duplicates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticLog {
    records: Vec<DiagnosticRecord>,
}

impl DiagnosticLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    fn emit(record: &DiagnosticRecord) {
        let code = record.code.code();
        let timestamp_ms = record.timestamp_ms;
        match record.severity {
            Severity::Info => info!(code, timestamp_ms, "{}", record.message),
            Severity::Warning => warn!(code, timestamp_ms, "{}", record.message),
            Severity::Critical => error!(code, timestamp_ms, "{}", record.message),
        }
    }

    /// Record a fault event.
    ///
    /// Appends unconditionally and mirrors the record to `tracing` at the
    /// level matching its severity.
    pub fn report(
        &mut self,
        code: FaultCode,
        severity: Severity,
        message: impl Into<String>,
        timestamp_ms: u64,
    ) {
        let record = DiagnosticRecord {
            code,
            severity,
            timestamp_ms,
            message: message.into(),
        };
        Self::emit(&record);
        self.records.push(record);
    }

    /// Remove every record with the given code.
    pub fn clear(&mut self, code: FaultCode) {
        self.records.retain(|r| r.code != code);
    }

    /// True if at least one record with the given code exists.
    pub fn has_active(&self, code: FaultCode) -> bool {
        self.records.iter().any(|r| r.code == code)
    }

    /// Number of records carrying the given code.
    pub fn count(&self, code: FaultCode) -> usize {
        self.records.iter().filter(|r| r.code == code).count()
    }

    /// All records in the order they were reported.
    pub fn records(&self) -> &[DiagnosticRecord] {
        &self.records
    }

    /// Total number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no record has been reported.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Re-emit the whole log through `tracing` for audit, each record at
    /// the level matching its severity, as `report` did originally.
    pub fn dump(&self) {
        for record in &self.records {
            Self::emit(record);
        }
    }
}

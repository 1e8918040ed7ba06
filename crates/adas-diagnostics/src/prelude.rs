//! Convenience re-exports for diagnostic reporting.

pub use crate::code::{FaultCode, Severity};
pub use crate::log::{DiagnosticLog, DiagnosticRecord};

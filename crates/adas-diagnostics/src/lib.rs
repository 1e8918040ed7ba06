//! Diagnostic fault recording for the ADAS decision core.
//!
//! Features report fault conditions as immutable [`DiagnosticRecord`]s —
//! a stable [`FaultCode`], a [`Severity`], a timestamp and a free-text
//! message — into an append-only [`DiagnosticLog`]. Repeated faults produce
//! repeated records on purpose: frequency is itself diagnostic signal.
//!
//! The log is the boundary to an external diagnostics subsystem (warning
//! lamps, service scheduling). Nothing in the decision core ever fails
//! because of a fault; faults are recorded, commands are withheld, and the
//! cycle continues.
//!
//! ```
//! use adas_diagnostics::{DiagnosticLog, FaultCode, Severity};
//!
//! let mut log = DiagnosticLog::new();
//! log.report(
//!     FaultCode::BrakingSensorFault,
//!     Severity::Warning,
//!     "collision braking: sensor not ready",
//!     1_000,
//! );
//! assert!(log.has_active(FaultCode::BrakingSensorFault));
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod code;
pub mod log;
pub mod prelude;

pub use code::{FaultCode, Severity};
pub use log::{DiagnosticLog, DiagnosticRecord};

//! Sensor measurement wrapper and validity states.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Validity state of a sensor signal.
///
/// Every [`Signal`] carries exactly one of these states so that downstream
/// features can decide whether to act on the data or fall back to an
/// inactive state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SignalStatus {
    /// Fresh, in-range and above the confidence floor.
    Valid,
    /// No new data received within the allowed time window.
    Timeout,
    /// Value outside the physical limits configured for this signal.
    OutOfRange,
    /// Sensor is reporting data but with insufficient certainty.
    LowConfidence,
    /// No measurement has been validated yet.
    Initializing,
}

impl SignalStatus {
    /// True when the signal may be consumed by a feature.
    pub fn is_usable(self) -> bool {
        matches!(self, SignalStatus::Valid)
    }
}

impl fmt::Display for SignalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignalStatus::Valid => write!(f, "valid"),
            SignalStatus::Timeout => write!(f, "timeout"),
            SignalStatus::OutOfRange => write!(f, "out of range"),
            SignalStatus::LowConfidence => write!(f, "low confidence"),
            SignalStatus::Initializing => write!(f, "initializing"),
        }
    }
}

/// A sensor measurement bundled with the metadata validation needs.
///
/// Timing is expressed in milliseconds since system start; the signal itself
/// carries its acquisition time while the current time is supplied by the
/// caller at validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Signal<T> {
    /// Measured sensor value.
    pub value: T,
    /// Acquisition time in milliseconds.
    pub timestamp_ms: u64,
    /// Sensor certainty in `[0.0, 1.0]`.
    pub confidence: f32,
    /// Current validity state.
    pub status: SignalStatus,
}

impl<T> Signal<T> {
    /// Create a signal in the [`SignalStatus::Initializing`] state.
    pub fn new(value: T, timestamp_ms: u64, confidence: f32) -> Self {
        Self {
            value,
            timestamp_ms,
            confidence,
            status: SignalStatus::Initializing,
        }
    }
}

impl<T: Default> Default for Signal<T> {
    fn default() -> Self {
        Self::new(T::default(), 0, 0.0)
    }
}

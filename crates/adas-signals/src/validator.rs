//! Stateless per-signal validation rules.

use crate::signal::{Signal, SignalStatus};

/// Validates a [`Signal<f32>`] against configured physical limits and timing
/// constraints.
///
/// Each instance is configured once for a specific sensor channel (radar
/// range, ego speed, lane offset, …) and applied to every reading of that
/// channel. Validation is a pure function of the signal and the current
/// time; the only effect is writing the resulting status back onto the
/// signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignalValidator {
    min_value: f32,
    max_value: f32,
    min_confidence: f32,
    timeout_ms: u64,
}

impl SignalValidator {
    /// Configure a validator with the physical and timing limits for one
    /// sensor channel.
    pub fn new(min_value: f32, max_value: f32, min_confidence: f32, timeout_ms: u64) -> Self {
        Self {
            min_value,
            max_value,
            min_confidence,
            timeout_ms,
        }
    }

    /// Preset for the forward radar range channel: 0–200 m, confidence
    /// floor 0.6, 200 ms staleness window.
    pub fn radar_range() -> Self {
        Self::new(0.0, 200.0, 0.6, 200)
    }

    /// Preset for the ego speed channel: 0–70 m/s, confidence floor 0.6,
    /// 200 ms staleness window.
    pub fn ego_speed() -> Self {
        Self::new(0.0, 70.0, 0.6, 200)
    }

    /// Preset for the lane offset channel: ±5 m, confidence floor 0.6,
    /// 200 ms staleness window.
    pub fn lane_offset() -> Self {
        Self::new(-5.0, 5.0, 0.6, 200)
    }

    /// Classify a reading without touching a signal.
    ///
    /// Checks are applied in fixed precedence order — age, then range, then
    /// confidence — and the first failing check wins. Staleness dominates
    /// because a stale reading says nothing about the present, whatever its
    /// range or confidence. Total over all inputs; garbage values fall
    /// through to whichever rule they match.
    pub fn classify(
        &self,
        value: f32,
        timestamp_ms: u64,
        confidence: f32,
        current_time_ms: u64,
    ) -> SignalStatus {
        let age_ms = current_time_ms.saturating_sub(timestamp_ms);
        if age_ms > self.timeout_ms {
            return SignalStatus::Timeout;
        }

        if value < self.min_value || value > self.max_value {
            return SignalStatus::OutOfRange;
        }

        if confidence < self.min_confidence {
            return SignalStatus::LowConfidence;
        }

        SignalStatus::Valid
    }

    /// Evaluate the signal and write the resulting status back in place.
    pub fn validate(&self, signal: &mut Signal<f32>, current_time_ms: u64) {
        signal.status = self.classify(
            signal.value,
            signal.timestamp_ms,
            signal.confidence,
            current_time_ms,
        );
    }
}

//! Lane centering policy.

use adas_diagnostics::{DiagnosticLog, FaultCode, Severity};
use adas_events::SensorEvent;

use crate::config::LaneCenteringConfig;
use crate::feature::AdasFeature;
use crate::state::VehicleState;

/// Applies a proportional steering correction when the vehicle drifts
/// beyond a deadband from the lane centre.
///
/// Inside the deadband the existing steering command is left untouched
/// rather than zeroed: the baseline the driver supplied stands.
#[derive(Debug)]
pub struct LaneCentering {
    config: LaneCenteringConfig,
    lateral_offset_m: f32,
    confidence: f32,
}

impl LaneCentering {
    /// Create the policy with the given thresholds.
    pub fn new(config: LaneCenteringConfig) -> Self {
        Self {
            config,
            lateral_offset_m: 0.0,
            confidence: 0.0,
        }
    }
}

impl AdasFeature for LaneCentering {
    fn name(&self) -> &'static str {
        "lane-centering"
    }

    fn receive(&mut self, event: &SensorEvent) {
        if let SensorEvent::Lane(l) = event {
            self.lateral_offset_m = l.lateral_offset_m;
            self.confidence = l.confidence;
        }
    }

    fn decide(&mut self, state: &mut VehicleState, log: &mut DiagnosticLog, now_ms: u64) {
        if self.confidence < self.config.min_confidence {
            log.report(
                FaultCode::LaneLowConfidence,
                Severity::Warning,
                "lane centering: camera confidence too low",
                now_ms,
            );
            return;
        }

        if self.lateral_offset_m.abs() > self.config.deadband_m {
            let correction = -self.lateral_offset_m * self.config.steering_gain;
            state.steering_cmd_rad = correction
                .clamp(-self.config.max_steering_rad, self.config.max_steering_rad);
        }
    }
}

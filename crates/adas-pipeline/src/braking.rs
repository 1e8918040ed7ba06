//! Collision braking policy.

use adas_diagnostics::{DiagnosticLog, FaultCode, Severity};
use adas_events::SensorEvent;

use crate::config::BrakingConfig;
use crate::feature::AdasFeature;
use crate::state::{VehicleState, NO_TARGET_RANGE_M};

/// Commands full or partial braking when the time-to-collision with the
/// target ahead drops below safe thresholds.
///
/// The one feature where acting aggressively on trusted data is itself the
/// safety behavior: below the full-brake TTC threshold it commands maximum
/// intensity unconditionally.
#[derive(Debug)]
pub struct CollisionBraking {
    config: BrakingConfig,
    range_m: f32,
    target_speed_mps: f32,
    radar_confidence: f32,
    ego_speed_mps: f32,
    speed_received: bool,
}

impl CollisionBraking {
    /// Create the policy with the given thresholds.
    pub fn new(config: BrakingConfig) -> Self {
        Self {
            config,
            range_m: NO_TARGET_RANGE_M,
            target_speed_mps: 0.0,
            radar_confidence: 0.0,
            ego_speed_mps: 0.0,
            speed_received: false,
        }
    }
}

impl AdasFeature for CollisionBraking {
    fn name(&self) -> &'static str {
        "collision-braking"
    }

    fn receive(&mut self, event: &SensorEvent) {
        match event {
            SensorEvent::Radar(r) => {
                self.range_m = r.range_m;
                self.target_speed_mps = r.target_speed_mps;
                self.radar_confidence = r.confidence;
            }
            SensorEvent::Speed(s) => {
                self.ego_speed_mps = s.speed_mps;
                self.speed_received = true;
            }
            _ => {}
        }
    }

    fn decide(&mut self, state: &mut VehicleState, log: &mut DiagnosticLog, now_ms: u64) {
        // Cannot brake safely without trusted speed and radar data.
        if !self.speed_received || self.radar_confidence < self.config.min_confidence {
            log.report(
                FaultCode::BrakingSensorFault,
                Severity::Warning,
                "collision braking: sensor not ready",
                now_ms,
            );
            return;
        }

        let closing_speed = self.ego_speed_mps - self.target_speed_mps;
        if closing_speed <= 0.0 {
            // Target moving away or faster; no collision course.
            return;
        }

        let ttc_s = self.range_m / closing_speed;

        if ttc_s < self.config.full_brake_ttc_s {
            state.brake_requested = true;
            state.brake_intensity = 1.0;
            log.report(
                FaultCode::BrakingActivated,
                Severity::Info,
                "collision braking: full emergency brake",
                now_ms,
            );
        } else if ttc_s < self.config.partial_brake_ttc_s {
            state.brake_requested = true;
            state.brake_intensity = (self.config.partial_brake_ttc_s - ttc_s)
                / (self.config.partial_brake_ttc_s - self.config.full_brake_ttc_s);
        }
    }
}

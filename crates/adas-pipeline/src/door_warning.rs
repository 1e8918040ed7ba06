//! Door proximity warning policy.

use adas_diagnostics::{DiagnosticLog, FaultCode, Severity};
use adas_events::SensorEvent;

use crate::config::DoorWarningConfig;
use crate::feature::AdasFeature;
use crate::state::{VehicleState, NO_TARGET_RANGE_M};

/// Warns when a moving target approaches while a door is open, e.g. a
/// cyclist passing a parked car.
///
/// Unlike the command features this one recomputes its flag from scratch:
/// the warning is reset at the start of every cycle and only re-raised while
/// the hazard persists.
#[derive(Debug)]
pub struct DoorWarning {
    config: DoorWarningConfig,
    range_m: f32,
    target_speed_mps: f32,
    radar_confidence: f32,
    door_open: bool,
}

impl DoorWarning {
    /// Create the policy with the given thresholds.
    pub fn new(config: DoorWarningConfig) -> Self {
        Self {
            config,
            range_m: NO_TARGET_RANGE_M,
            target_speed_mps: 0.0,
            radar_confidence: 0.0,
            door_open: false,
        }
    }
}

impl AdasFeature for DoorWarning {
    fn name(&self) -> &'static str {
        "door-warning"
    }

    fn receive(&mut self, event: &SensorEvent) {
        match event {
            SensorEvent::Radar(r) => {
                self.range_m = r.range_m;
                self.target_speed_mps = r.target_speed_mps;
                self.radar_confidence = r.confidence;
            }
            SensorEvent::Door(d) => {
                self.door_open = d.is_open;
            }
            _ => {}
        }
    }

    fn decide(&mut self, state: &mut VehicleState, log: &mut DiagnosticLog, now_ms: u64) {
        state.door_warning = false;

        if !self.door_open {
            return;
        }

        if self.radar_confidence < self.config.min_confidence {
            log.report(
                FaultCode::DoorWarningSensorFault,
                Severity::Warning,
                "door warning: radar not reliable with door open",
                now_ms,
            );
            return;
        }

        if self.range_m < self.config.warning_range_m
            && self.target_speed_mps > self.config.min_target_speed_mps
        {
            state.door_warning = true;
            log.report(
                FaultCode::DoorWarningActive,
                Severity::Warning,
                "door warning: vehicle approaching open door",
                now_ms,
            );
        }
    }
}

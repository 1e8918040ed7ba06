//! Adaptive speed/gap control policy.

use adas_diagnostics::{DiagnosticLog, FaultCode, Severity};
use adas_events::SensorEvent;

use crate::config::SpeedControlConfig;
use crate::feature::AdasFeature;
use crate::state::{VehicleState, NO_TARGET_RANGE_M};

/// Holds the driver's set speed on a clear road and adjusts to keep a safe
/// gap behind a confident target within following range.
#[derive(Debug)]
pub struct SpeedControl {
    config: SpeedControlConfig,
    ego_speed_mps: f32,
    range_m: f32,
    target_speed_mps: f32,
    radar_confidence: f32,
    speed_received: bool,
}

impl SpeedControl {
    /// Create the policy with the given thresholds.
    pub fn new(config: SpeedControlConfig) -> Self {
        Self {
            config,
            ego_speed_mps: 0.0,
            range_m: NO_TARGET_RANGE_M,
            target_speed_mps: 0.0,
            radar_confidence: 0.0,
            speed_received: false,
        }
    }

    /// Desired speed given the current target picture.
    fn desired_speed(&self) -> f32 {
        let confident_target = self.radar_confidence >= self.config.min_confidence
            && self.range_m < self.config.follow_range_m;
        if !confident_target {
            // Free cruise at the driver's set speed.
            return self.config.set_speed_mps;
        }

        let gap_error_m = self.range_m - self.config.min_gap_m;
        if gap_error_m < 0.0 {
            // Inside the minimum gap: match the target, never reverse.
            self.target_speed_mps.max(0.0)
        } else {
            // Close the gap proportionally, capped at the set speed.
            self.config
                .set_speed_mps
                .min(self.target_speed_mps + gap_error_m * self.config.gap_gain)
        }
    }
}

impl AdasFeature for SpeedControl {
    fn name(&self) -> &'static str {
        "speed-control"
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
        if !self.speed_received {
            log.report(
                FaultCode::SpeedControlSensorFault,
                Severity::Warning,
                "speed control: speed signal not ready",
                now_ms,
            );
            return;
        }

        let raw_accel = (self.desired_speed() - self.ego_speed_mps) * self.config.speed_gain;
        state.accel_cmd_mps2 = raw_accel.clamp(-self.config.max_decel_mps2, self.config.max_accel_mps2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adas_events::{RadarReading, SpeedReading};
    use approx::assert_relative_eq;

    fn control() -> SpeedControl {
        SpeedControl::new(SpeedControlConfig::default())
    }

    fn feed(acc: &mut SpeedControl, ego_mps: f32, range_m: f32, target_mps: f32, conf: f32) {
        acc.receive(&SensorEvent::Speed(SpeedReading { speed_mps: ego_mps }));
        acc.receive(&SensorEvent::Radar(RadarReading {
            range_m,
            target_speed_mps: target_mps,
            confidence: conf,
        }));
    }

    #[test]
    fn accelerates_on_clear_road() {
        let mut acc = control();
        // Ego below set speed, no car ahead.
        feed(&mut acc, 20.0, NO_TARGET_RANGE_M, 0.0, 0.9);

        let mut state = VehicleState::default();
        let mut log = DiagnosticLog::new();
        acc.decide(&mut state, &mut log, 0);

        assert!(state.accel_cmd_mps2 > 0.0);
        assert!(log.is_empty());
    }

    #[test]
    fn acceleration_is_clamped_at_maximum() {
        let mut acc = control();
        // Enormous speed deficit: raw command far exceeds the clamp.
        feed(&mut acc, 0.0, NO_TARGET_RANGE_M, 0.0, 0.9);

        let mut state = VehicleState::default();
        let mut log = DiagnosticLog::new();
        acc.decide(&mut state, &mut log, 0);

        assert_relative_eq!(state.accel_cmd_mps2, 2.0);
    }

    #[test]
    fn decelerates_when_inside_minimum_gap() {
        let mut acc = control();
        // 10 m gap at 30 m/s behind a 5 m/s target.
        feed(&mut acc, 30.0, 10.0, 5.0, 0.9);

        let mut state = VehicleState::default();
        let mut log = DiagnosticLog::new();
        acc.decide(&mut state, &mut log, 0);

        assert!(state.accel_cmd_mps2 < 0.0);
    }

    #[test]
    fn deceleration_is_clamped_at_maximum() {
        let mut acc = control();
        // Stopped target right ahead while cruising fast.
        feed(&mut acc, 33.0, 5.0, 0.0, 0.9);

        let mut state = VehicleState::default();
        let mut log = DiagnosticLog::new();
        acc.decide(&mut state, &mut log, 0);

        assert_relative_eq!(state.accel_cmd_mps2, -3.0);
    }

    #[test]
    fn follows_target_below_set_speed() {
        let mut acc = control();
        // Target at 100 m doing 20 m/s: gap error 70 m, desired =
        // min(33.33, 20 + 70 × 0.5) = set speed; ego already there.
        feed(&mut acc, 33.33, 100.0, 20.0, 0.9);

        let mut state = VehicleState::default();
        let mut log = DiagnosticLog::new();
        acc.decide(&mut state, &mut log, 0);

        assert_relative_eq!(state.accel_cmd_mps2, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn unconfident_target_means_free_cruise() {
        let mut acc = control();
        // Radar sees something close but is not trusted: hold set speed.
        feed(&mut acc, 33.33, 40.0, 5.0, 0.2);

        let mut state = VehicleState::default();
        let mut log = DiagnosticLog::new();
        acc.decide(&mut state, &mut log, 0);

        assert_relative_eq!(state.accel_cmd_mps2, 0.0, epsilon = 1e-5);
        assert!(log.is_empty());
    }

    proptest::proptest! {
        #[test]
        fn command_is_always_within_actuator_limits(
            ego in 0.0_f32..70.0,
            range in 0.0_f32..999.0,
            target in 0.0_f32..70.0,
            conf in 0.0_f32..1.0,
        ) {
            let mut acc = control();
            feed(&mut acc, ego, range, target, conf);

            let mut state = VehicleState::default();
            let mut log = DiagnosticLog::new();
            acc.decide(&mut state, &mut log, 0);

            proptest::prop_assert!(state.accel_cmd_mps2 >= -3.0);
            proptest::prop_assert!(state.accel_cmd_mps2 <= 2.0);
        }
    }

    #[test]
    fn abstains_before_first_speed_reading() {
        let mut acc = control();
        acc.receive(&SensorEvent::Radar(RadarReading {
            range_m: 50.0,
            target_speed_mps: 10.0,
            confidence: 0.9,
        }));

        let mut state = VehicleState::default();
        let mut log = DiagnosticLog::new();
        acc.decide(&mut state, &mut log, 500);

        assert_eq!(state.accel_cmd_mps2, 0.0);
        assert_eq!(log.count(FaultCode::SpeedControlSensorFault), 1);
    }
}

//! Integration test suite for the ADAS decision core
//!
//! Drives the full input flow the way a production cycle driver would:
//! raw sensor readings are screened by the signal validators first, and
//! only usable readings are published to the decision coordinator. The
//! tests in `tests/` exercise end-to-end scenarios (emergency braking,
//! gap keeping, lane departure, door hazards) plus the gating behavior
//! for stale, out-of-range and low-confidence inputs.

#![deny(rust_2018_idioms)]
#![deny(warnings)]
#![deny(unused_must_use)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::print_stdout)]

use adas_events::{DoorReading, LaneReading, RadarReading, SensorEvent, SpeedReading};
use adas_pipeline::{DecisionCoordinator, VehicleState};
use adas_signals::{SignalStatus, SignalValidator};
use tracing::debug;

/// Install a test-writer subscriber. Safe to call from every test; only
/// the first call in the process takes effect.
pub fn init_tracing() {
    let _init = tracing_subscriber::fmt().with_test_writer().try_init();
}

/// A cycle driver wired the way the production loop is: per-sensor
/// validators in front of the coordinator, publishing only readings the
/// validators accept.
pub struct SensorRig {
    radar_validator: SignalValidator,
    speed_validator: SignalValidator,
    lane_validator: SignalValidator,
    coordinator: DecisionCoordinator,
}

impl Default for SensorRig {
    fn default() -> Self {
        Self {
            radar_validator: SignalValidator::radar_range(),
            speed_validator: SignalValidator::ego_speed(),
            lane_validator: SignalValidator::lane_offset(),
            coordinator: DecisionCoordinator::default(),
        }
    }
}

impl SensorRig {
    /// Screen and publish a radar reading. Returns the validator verdict;
    /// the reading reaches the features only when it is usable.
    pub fn radar(
        &mut self,
        now_ms: u64,
        timestamp_ms: u64,
        range_m: f32,
        target_speed_mps: f32,
        confidence: f32,
    ) -> SignalStatus {
        let status = self
            .radar_validator
            .classify(range_m, timestamp_ms, confidence, now_ms);
        if status.is_usable() {
            self.coordinator.publish(&SensorEvent::Radar(RadarReading {
                range_m,
                target_speed_mps,
                confidence,
            }));
        } else {
            debug!(%status, range_m, "radar reading rejected");
        }
        status
    }

    /// Screen and publish an ego-speed reading.
    pub fn speed(&mut self, now_ms: u64, timestamp_ms: u64, speed_mps: f32) -> SignalStatus {
        // Wheel-speed readings carry full confidence by construction.
        let status = self.speed_validator.classify(speed_mps, timestamp_ms, 1.0, now_ms);
        if status.is_usable() {
            self.coordinator
                .publish(&SensorEvent::Speed(SpeedReading { speed_mps }));
        } else {
            debug!(%status, speed_mps, "speed reading rejected");
        }
        status
    }

    /// Screen and publish a lane-offset reading.
    pub fn lane(
        &mut self,
        now_ms: u64,
        timestamp_ms: u64,
        lateral_offset_m: f32,
        confidence: f32,
    ) -> SignalStatus {
        let status = self
            .lane_validator
            .classify(lateral_offset_m, timestamp_ms, confidence, now_ms);
        if status.is_usable() {
            self.coordinator.publish(&SensorEvent::Lane(LaneReading {
                lateral_offset_m,
                confidence,
            }));
        } else {
            debug!(%status, lateral_offset_m, "lane reading rejected");
        }
        status
    }

    /// Publish a door state change. Discrete inputs bypass validation.
    pub fn door(&mut self, is_open: bool) {
        self.coordinator
            .publish(&SensorEvent::Door(DoorReading { is_open }));
    }

    /// Run one decision cycle against `state`.
    pub fn cycle(&mut self, state: &mut VehicleState, now_ms: u64) {
        self.coordinator.execute(state, now_ms);
    }

    /// The coordinator under test.
    pub fn coordinator(&self) -> &DecisionCoordinator {
        &self.coordinator
    }

    /// Mutable access, e.g. for clearing diagnostic codes between phases.
    pub fn coordinator_mut(&mut self) -> &mut DecisionCoordinator {
        &mut self.coordinator
    }
}

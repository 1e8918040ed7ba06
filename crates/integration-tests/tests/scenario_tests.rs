//! End-to-end driving scenarios.
//!
//! Each test replays one situation through the full validate-then-publish
//! flow and checks the consolidated vehicle output after the cycle.

use adas_integration_tests::{init_tracing, SensorRig};
use adas_pipeline::prelude::*;
use approx::assert_relative_eq;

#[test]
fn stopped_obstacle_triggers_emergency_brake() {
    init_tracing();
    let mut rig = SensorRig::default();

    // Ego at 30 m/s, stopped obstacle 20 m ahead: TTC ≈ 0.67 s.
    let now = 1_000;
    assert!(rig.speed(now, now, 30.0).is_usable());
    assert!(rig.radar(now, now, 20.0, 0.0, 0.95).is_usable());

    let mut state = VehicleState {
        ego_speed_mps: 30.0,
        ..VehicleState::default()
    };
    rig.cycle(&mut state, now);

    assert!(state.brake_requested);
    assert_relative_eq!(state.brake_intensity, 1.0);
    assert!(rig.coordinator().diagnostics().has_active(FaultCode::BrakingActivated));
}

#[test]
fn slower_lead_vehicle_gets_partial_brake() {
    init_tracing();
    let mut rig = SensorRig::default();

    // Ego 30 m/s, lead at 10 m/s 40 m ahead: closing 20 m/s, TTC 2.0 s.
    let now = 1_000;
    rig.speed(now, now, 30.0);
    rig.radar(now, now, 40.0, 10.0, 0.9);

    let mut state = VehicleState::default();
    rig.cycle(&mut state, now);

    assert!(state.brake_requested);
    assert!(state.brake_intensity > 0.0);
    assert!(state.brake_intensity < 1.0);
    // Partial braking is precautionary, not an activation event.
    assert!(!rig.coordinator().diagnostics().has_active(FaultCode::BrakingActivated));
}

#[test]
fn clear_road_accelerates_toward_set_speed() {
    init_tracing();
    let mut rig = SensorRig::default();

    let now = 1_000;
    rig.speed(now, now, 20.0);
    // Radar reports nothing within following range.
    rig.radar(now, now, 180.0, 0.0, 0.9);

    let mut state = VehicleState::default();
    rig.cycle(&mut state, now);

    assert!(state.accel_cmd_mps2 > 0.0);
    assert!(!state.brake_requested);
}

#[test]
fn tailgating_decelerates_without_emergency_braking() {
    init_tracing();
    let mut rig = SensorRig::default();

    // 25 m behind a lead doing 28 m/s at ego 30 m/s: inside the minimum
    // gap but closing only 2 m/s, so TTC stays comfortable.
    let now = 1_000;
    rig.speed(now, now, 30.0);
    rig.radar(now, now, 25.0, 28.0, 0.9);

    let mut state = VehicleState::default();
    rig.cycle(&mut state, now);

    assert!(state.accel_cmd_mps2 < 0.0);
    assert!(!state.brake_requested);
}

#[test]
fn lane_drift_is_steered_back() {
    init_tracing();
    let mut rig = SensorRig::default();

    let now = 1_000;
    rig.speed(now, now, 25.0);
    rig.radar(now, now, 180.0, 0.0, 0.9);
    assert!(rig.lane(now, now, 0.5, 0.9).is_usable());

    let mut state = VehicleState::default();
    rig.cycle(&mut state, now);

    // Drifted 0.5 m right: steer left.
    assert_relative_eq!(state.steering_cmd_rad, -0.25);
}

#[test]
fn cyclist_approaching_open_door_raises_warning() {
    init_tracing();
    let mut rig = SensorRig::default();

    // Parked with the door open, cyclist 8 m away doing 5 m/s.
    let now = 1_000;
    rig.speed(now, now, 0.0);
    rig.door(true);
    rig.radar(now, now, 8.0, 5.0, 0.9);

    let mut state = VehicleState::default();
    rig.cycle(&mut state, now);

    assert!(state.door_warning);
    assert!(rig.coordinator().diagnostics().has_active(FaultCode::DoorWarningActive));
    // Stationary ego, stationary-ego radar picture: no brake.
    assert!(!state.brake_requested);

    // The cyclist passes; the warning clears on the next cycle.
    let later = now + 100;
    rig.radar(later, later, 180.0, 0.0, 0.9);
    rig.cycle(&mut state, later);
    assert!(!state.door_warning);
}

//! Shared per-cycle vehicle output.

use serde::{Deserialize, Serialize};

/// Sentinel range meaning "no target in view".
///
/// Beyond every follow and warning threshold, so a state carrying it is
/// inert for all features. The pass-through field mirrors the last radar
/// reading rather than wrapping it in an `Option`.
pub const NO_TARGET_RANGE_M: f32 = 999.0;

/// Shared output written by the feature policies each decision cycle.
///
/// The external driver owns this record and passes it by mutable reference
/// into each cycle, pre-populated with whatever baseline it wants preserved.
/// Command fields (`accel_cmd_mps2`, `steering_cmd_rad`, the brake pair,
/// `door_warning`) are only ever written by features, never read back from
/// a prior cycle; pass-through fields reflect the latest known sensor
/// values.
///
/// `brake_intensity` is meaningful only while `brake_requested` is true.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VehicleState {
    /// Current ego speed in m/s (pass-through).
    pub ego_speed_mps: f32,
    /// Commanded acceleration in m/s²; negative = decelerate.
    pub accel_cmd_mps2: f32,
    /// Commanded steering correction in radians; positive = right.
    pub steering_cmd_rad: f32,

    /// Range to the nearest target ahead in metres (pass-through).
    pub target_range_m: f32,
    /// Speed of the nearest target ahead in m/s (pass-through).
    pub target_speed_mps: f32,
    /// Offset from lane centre in metres (pass-through).
    pub lateral_offset_m: f32,
    /// Physical door state (pass-through).
    pub door_open: bool,

    /// Any feature is requesting braking this cycle.
    pub brake_requested: bool,
    /// Brake force in `[0.0, 1.0]`; only meaningful while `brake_requested`.
    pub brake_intensity: f32,
    /// Door proximity warning active this cycle.
    pub door_warning: bool,
}

impl Default for VehicleState {
    fn default() -> Self {
        Self {
            ego_speed_mps: 0.0,
            accel_cmd_mps2: 0.0,
            steering_cmd_rad: 0.0,
            target_range_m: NO_TARGET_RANGE_M,
            target_speed_mps: 0.0,
            lateral_offset_m: 0.0,
            door_open: false,
            brake_requested: false,
            brake_intensity: 0.0,
            door_warning: false,
        }
    }
}

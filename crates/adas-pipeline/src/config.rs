//! Feature thresholds and gains.
//!
//! Every tunable of the four feature policies lives here rather than as a
//! magic number in the policy code. Defaults are the calibrated production
//! values; `validate` rejects configurations outside safe operating ranges
//! before a coordinator is built around them.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { field, value })
    }
}

fn confidence(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ConfidenceOutOfRange { field, value })
    }
}

/// Collision braking thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrakingConfig {
    /// Time-to-collision below which full braking is commanded, in seconds.
    pub full_brake_ttc_s: f32,
    /// Time-to-collision below which partial braking ramps in, in seconds.
    pub partial_brake_ttc_s: f32,
    /// Radar confidence floor for acting at all.
    pub min_confidence: f32,
}

impl Default for BrakingConfig {
    fn default() -> Self {
        Self {
            full_brake_ttc_s: 1.5,
            partial_brake_ttc_s: 3.0,
            min_confidence: 0.6,
        }
    }
}

impl BrakingConfig {
    /// Reject thresholds outside safe operating ranges.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("full_brake_ttc_s", self.full_brake_ttc_s)?;
        positive("partial_brake_ttc_s", self.partial_brake_ttc_s)?;
        if self.full_brake_ttc_s >= self.partial_brake_ttc_s {
            return Err(ConfigError::InvertedBounds {
                lower: "full_brake_ttc_s",
                lower_value: self.full_brake_ttc_s,
                upper: "partial_brake_ttc_s",
                upper_value: self.partial_brake_ttc_s,
            });
        }
        confidence("min_confidence", self.min_confidence)
    }
}

/// Adaptive speed/gap control thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpeedControlConfig {
    /// Driver-selected cruise speed in m/s.
    pub set_speed_mps: f32,
    /// Minimum gap to the target ahead in metres.
    pub min_gap_m: f32,
    /// Range within which a confident target is followed, in metres.
    pub follow_range_m: f32,
    /// Maximum commanded acceleration in m/s².
    pub max_accel_mps2: f32,
    /// Maximum commanded deceleration in m/s² (magnitude).
    pub max_decel_mps2: f32,
    /// Proportional gain from gap error to desired speed, in 1/s.
    pub gap_gain: f32,
    /// Proportional gain from speed error to acceleration, in 1/s.
    pub speed_gain: f32,
    /// Radar confidence floor for following a target.
    pub min_confidence: f32,
}

impl Default for SpeedControlConfig {
    fn default() -> Self {
        Self {
            // 120 km/h
            set_speed_mps: 33.33,
            min_gap_m: 30.0,
            follow_range_m: 150.0,
            max_accel_mps2: 2.0,
            max_decel_mps2: 3.0,
            gap_gain: 0.5,
            speed_gain: 0.3,
            min_confidence: 0.6,
        }
    }
}

impl SpeedControlConfig {
    /// Reject thresholds outside safe operating ranges.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("set_speed_mps", self.set_speed_mps)?;
        positive("min_gap_m", self.min_gap_m)?;
        positive("follow_range_m", self.follow_range_m)?;
        if self.min_gap_m >= self.follow_range_m {
            return Err(ConfigError::InvertedBounds {
                lower: "min_gap_m",
                lower_value: self.min_gap_m,
                upper: "follow_range_m",
                upper_value: self.follow_range_m,
            });
        }
        positive("max_accel_mps2", self.max_accel_mps2)?;
        positive("max_decel_mps2", self.max_decel_mps2)?;
        positive("gap_gain", self.gap_gain)?;
        positive("speed_gain", self.speed_gain)?;
        confidence("min_confidence", self.min_confidence)
    }
}

/// Lane centering thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LaneCenteringConfig {
    /// Offset magnitude below which no correction is issued, in metres.
    pub deadband_m: f32,
    /// Proportional gain from offset to steering, in rad/m.
    pub steering_gain: f32,
    /// Steering correction clamp, in radians.
    pub max_steering_rad: f32,
    /// Camera confidence floor for acting at all.
    pub min_confidence: f32,
}

impl Default for LaneCenteringConfig {
    fn default() -> Self {
        Self {
            deadband_m: 0.3,
            steering_gain: 0.5,
            max_steering_rad: 0.5,
            min_confidence: 0.6,
        }
    }
}

impl LaneCenteringConfig {
    /// Reject thresholds outside safe operating ranges.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("deadband_m", self.deadband_m)?;
        positive("steering_gain", self.steering_gain)?;
        positive("max_steering_rad", self.max_steering_rad)?;
        confidence("min_confidence", self.min_confidence)
    }
}

/// Door proximity warning thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DoorWarningConfig {
    /// Range below which an approaching target raises the warning, in metres.
    pub warning_range_m: f32,
    /// Target speed above which it counts as approaching, in m/s.
    /// Filters out stationary objects.
    pub min_target_speed_mps: f32,
    /// Radar confidence floor for acting at all.
    pub min_confidence: f32,
}

impl Default for DoorWarningConfig {
    fn default() -> Self {
        Self {
            warning_range_m: 15.0,
            min_target_speed_mps: 0.5,
            min_confidence: 0.6,
        }
    }
}

impl DoorWarningConfig {
    /// Reject thresholds outside safe operating ranges.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("warning_range_m", self.warning_range_m)?;
        positive("min_target_speed_mps", self.min_target_speed_mps)?;
        confidence("min_confidence", self.min_confidence)
    }
}

/// Aggregate configuration for the whole decision pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Collision braking thresholds.
    pub braking: BrakingConfig,
    /// Adaptive speed/gap control thresholds.
    pub speed_control: SpeedControlConfig,
    /// Lane centering thresholds.
    pub lane_centering: LaneCenteringConfig,
    /// Door proximity warning thresholds.
    pub door_warning: DoorWarningConfig,
}

impl PipelineConfig {
    /// Validate every feature's thresholds.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint across all features.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.braking.validate()?;
        self.speed_control.validate()?;
        self.lane_centering.validate()?;
        self.door_warning.validate()
    }
}

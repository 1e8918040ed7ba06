//! Convenience re-exports for driving the decision pipeline.

pub use crate::config::{
    BrakingConfig, DoorWarningConfig, LaneCenteringConfig, PipelineConfig, SpeedControlConfig,
};
pub use crate::coordinator::DecisionCoordinator;
pub use crate::error::ConfigError;
pub use crate::feature::AdasFeature;
pub use crate::state::{VehicleState, NO_TARGET_RANGE_M};

pub use adas_diagnostics::{DiagnosticLog, DiagnosticRecord, FaultCode, Severity};
pub use adas_events::{
    DoorReading, EventCategory, LaneReading, RadarReading, SensorEvent, SpeedReading,
};
pub use adas_signals::prelude::*;

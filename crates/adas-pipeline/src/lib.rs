//! Per-cycle decision pipeline for the ADAS feature suite.
//!
//! This crate is the core of a fixed-rate driver-assistance control loop.
//! Once per tick, an external driver publishes fresh sensor events, runs one
//! decision cycle, and reads back a consolidated [`VehicleState`] plus the
//! diagnostic log:
//!
//! ```text
//! publish(event)* ──► EventBus fan-out ──► per-feature caches
//! execute(state, t) ─► braking ─► speed control ─► lane centering ─► door warning
//!                       │           │                 │                │
//!                       └───────────┴── VehicleState ─┴────────────────┘
//!                                        DiagnosticLog
//! ```
//!
//! Features run sequentially in a fixed registration order; later features
//! may layer over earlier writes to the shared output, so that order is a
//! contract, not an accident. Every doubtful input degrades to
//! *fail-inactive*: the feature withholds its command and reports a
//! diagnostic record instead. Nothing in the cycle path panics or returns
//! an error.
//!
//! # Example
//!
//! ```
//! use adas_pipeline::prelude::*;
//!
//! let mut coordinator = DecisionCoordinator::new(PipelineConfig::default())?;
//! let mut state = VehicleState {
//!     ego_speed_mps: 30.0,
//!     ..VehicleState::default()
//! };
//!
//! // Stopped obstacle 30 m ahead at 30 m/s: TTC = 1.0 s.
//! coordinator.publish(&SensorEvent::Speed(SpeedReading { speed_mps: 30.0 }));
//! coordinator.publish(&SensorEvent::Radar(RadarReading {
//!     range_m: 30.0,
//!     target_speed_mps: 0.0,
//!     confidence: 0.95,
//! }));
//! coordinator.execute(&mut state, 1_000);
//!
//! assert!(state.brake_requested);
//! assert!((state.brake_intensity - 1.0).abs() < f32::EPSILON);
//! # Ok::<(), adas_pipeline::ConfigError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod braking;
pub mod config;
pub mod coordinator;
pub mod door_warning;
pub mod error;
pub mod feature;
pub mod lane_centering;
pub mod prelude;
pub mod speed_control;
pub mod state;

pub use braking::CollisionBraking;
pub use config::{
    BrakingConfig, DoorWarningConfig, LaneCenteringConfig, PipelineConfig, SpeedControlConfig,
};
pub use coordinator::DecisionCoordinator;
pub use door_warning::DoorWarning;
pub use error::ConfigError;
pub use feature::AdasFeature;
pub use lane_centering::LaneCentering;
pub use speed_control::SpeedControl;
pub use state::{VehicleState, NO_TARGET_RANGE_M};

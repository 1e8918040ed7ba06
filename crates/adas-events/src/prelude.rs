//! Convenience re-exports for event publishing and routing.

pub use crate::bus::{EventBus, SubscriberId};
pub use crate::event::{
    DoorReading, EventCategory, LaneReading, RadarReading, SensorEvent, SpeedReading,
};

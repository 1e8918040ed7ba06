//! Sensor event payloads and routing categories.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Classification of a sensor event, used for bus routing.
///
/// Publishers tag nothing explicitly; the category is derived from the
/// event's variant via [`SensorEvent::category`]. Subscribers register per
/// category to receive only what they need.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    /// Range and speed of the nearest target ahead.
    Radar,
    /// Ego vehicle speed.
    Speed,
    /// Lateral offset from the lane centre.
    Lane,
    /// Door open/closed state.
    Door,
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventCategory::Radar => write!(f, "radar"),
            EventCategory::Speed => write!(f, "speed"),
            EventCategory::Lane => write!(f, "lane"),
            EventCategory::Door => write!(f, "door"),
        }
    }
}

/// Radar measurement of the nearest target ahead.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RadarReading {
    /// Range to the target in metres.
    pub range_m: f32,
    /// Target speed in m/s.
    pub target_speed_mps: f32,
    /// Sensor certainty in `[0.0, 1.0]`.
    pub confidence: f32,
}

/// Ego vehicle speed measurement.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SpeedReading {
    /// Ego speed in m/s.
    pub speed_mps: f32,
}

/// Camera measurement of the lateral offset from the lane centre.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LaneReading {
    /// Offset from lane centre in metres; positive = right, negative = left.
    pub lateral_offset_m: f32,
    /// Camera certainty in `[0.0, 1.0]`.
    pub confidence: f32,
}

/// Door open/closed state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DoorReading {
    /// True while any door is open.
    pub is_open: bool,
}

/// One sensor reading, published on the bus.
///
/// Immutable once published. Carries no timestamp of its own — timing is
/// supplied by the decision cycle call, not the event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SensorEvent {
    /// New radar measurement.
    Radar(RadarReading),
    /// New ego speed measurement.
    Speed(SpeedReading),
    /// New lane offset measurement.
    Lane(LaneReading),
    /// Door state changed.
    Door(DoorReading),
}

impl SensorEvent {
    /// The routing category of this event.
    pub fn category(&self) -> EventCategory {
        match self {
            SensorEvent::Radar(_) => EventCategory::Radar,
            SensorEvent::Speed(_) => EventCategory::Speed,
            SensorEvent::Lane(_) => EventCategory::Lane,
            SensorEvent::Door(_) => EventCategory::Door,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_matches_variant() {
        let radar = SensorEvent::Radar(RadarReading {
            range_m: 30.0,
            target_speed_mps: 0.0,
            confidence: 0.9,
        });
        assert_eq!(radar.category(), EventCategory::Radar);

        let speed = SensorEvent::Speed(SpeedReading { speed_mps: 20.0 });
        assert_eq!(speed.category(), EventCategory::Speed);

        let lane = SensorEvent::Lane(LaneReading {
            lateral_offset_m: 0.5,
            confidence: 0.9,
        });
        assert_eq!(lane.category(), EventCategory::Lane);

        let door = SensorEvent::Door(DoorReading { is_open: true });
        assert_eq!(door.category(), EventCategory::Door);
    }

    #[test]
    fn category_display() {
        assert_eq!(EventCategory::Radar.to_string(), "radar");
        assert_eq!(EventCategory::Door.to_string(), "door");
    }
}

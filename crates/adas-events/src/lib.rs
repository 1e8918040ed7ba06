//! In-process sensor event distribution for the ADAS decision core.
//!
//! Sensor readings enter the pipeline as [`SensorEvent`] values — a closed
//! tagged union over the four sensor channels — and are routed by the
//! [`EventBus`] to every subscriber registered for the event's
//! [`EventCategory`], synchronously and in registration order.
//!
//! The bus never owns or references subscribers. It stores opaque
//! [`SubscriberId`] handles; the component that owns the subscribers (the
//! decision coordinator) supplies delivery through a closure at publish
//! time. This keeps ownership in one place and leaves room for an
//! unsubscribe path without changing the interface.
//!
//! ```
//! use adas_events::{EventBus, EventCategory, SensorEvent, SpeedReading, SubscriberId};
//!
//! let mut bus = EventBus::new();
//! bus.subscribe(EventCategory::Speed, SubscriberId(0));
//!
//! let event = SensorEvent::Speed(SpeedReading { speed_mps: 27.5 });
//! let mut delivered = Vec::new();
//! bus.publish(&event, |id, _event| delivered.push(id));
//! assert_eq!(delivered, vec![SubscriberId(0)]);
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod bus;
pub mod event;
pub mod prelude;

pub use bus::{EventBus, SubscriberId};
pub use event::{
    DoorReading, EventCategory, LaneReading, RadarReading, SensorEvent, SpeedReading,
};

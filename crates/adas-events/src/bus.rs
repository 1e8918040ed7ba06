//! Synchronous publish/subscribe routing keyed by event category.

use std::collections::HashMap;

use tracing::trace;

use crate::event::{EventCategory, SensorEvent};

/// Opaque handle to a subscriber owned elsewhere.
///
/// The bus never holds subscriber references; the owning component maps
/// handles back to subscribers at delivery time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriberId(pub usize);

/// Routes published events to every subscriber registered for the event's
/// category, synchronously and in registration order.
///
/// There is no queue and no replay: delivery happens entirely inside
/// [`EventBus::publish`], at most once per subscriber per call.
#[derive(Debug, Default)]
pub struct EventBus {
    routes: HashMap<EventCategory, Vec<SubscriberId>>,
}

impl EventBus {
    /// Create an empty bus.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a subscriber for one event category.
    ///
    /// Delivery order follows registration order within a category.
    pub fn subscribe(&mut self, category: EventCategory, id: SubscriberId) {
        self.routes.entry(category).or_default().push(id);
    }

    /// Subscribers registered for a category, in registration order.
    /// Empty when no subscriber has registered.
    pub fn subscribers(&self, category: EventCategory) -> &[SubscriberId] {
        self.routes.get(&category).map_or(&[], Vec::as_slice)
    }

    /// Deliver an event to every subscriber of its category and return.
    ///
    /// The owning component supplies delivery through `deliver`; the bus
    /// only decides who receives the event and in what order. Publishing to
    /// a category with no subscribers is a no-op, not an error. Payloads
    /// are forwarded by shared reference and never mutated.
    pub fn publish<F>(&self, event: &SensorEvent, mut deliver: F)
    where
        F: FnMut(SubscriberId, &SensorEvent),
    {
        let category = event.category();
        let subscribers = self.subscribers(category);
        trace!(%category, count = subscribers.len(), "publishing sensor event");
        for &id in subscribers {
            deliver(id, event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::{RadarReading, SpeedReading};

    fn radar_event() -> SensorEvent {
        SensorEvent::Radar(RadarReading {
            range_m: 30.0,
            target_speed_mps: 0.0,
            confidence: 0.9,
        })
    }

    #[test]
    fn subscriber_receives_matching_event() {
        let mut bus = EventBus::new();
        bus.subscribe(EventCategory::Radar, SubscriberId(7));

        let mut delivered = Vec::new();
        bus.publish(&radar_event(), |id, event| {
            delivered.push((id, event.category()));
        });

        assert_eq!(delivered, vec![(SubscriberId(7), EventCategory::Radar)]);
    }

    #[test]
    fn subscriber_never_receives_other_categories() {
        let mut bus = EventBus::new();
        bus.subscribe(EventCategory::Speed, SubscriberId(0));

        let mut delivered = 0;
        bus.publish(&radar_event(), |_, _| delivered += 1);

        assert_eq!(delivered, 0);
    }

    #[test]
    fn all_subscribers_receive_once_in_registration_order() {
        let mut bus = EventBus::new();
        bus.subscribe(EventCategory::Radar, SubscriberId(2));
        bus.subscribe(EventCategory::Radar, SubscriberId(0));
        bus.subscribe(EventCategory::Radar, SubscriberId(1));

        let mut order = Vec::new();
        bus.publish(&radar_event(), |id, _| order.push(id));

        assert_eq!(order, vec![SubscriberId(2), SubscriberId(0), SubscriberId(1)]);
    }

    #[test]
    fn publish_without_subscribers_is_a_noop() {
        let bus = EventBus::new();
        let mut delivered = 0;
        bus.publish(
            &SensorEvent::Speed(SpeedReading { speed_mps: 10.0 }),
            |_, _| delivered += 1,
        );
        assert_eq!(delivered, 0);
    }

    #[test]
    fn one_subscriber_may_listen_to_several_categories() {
        let mut bus = EventBus::new();
        bus.subscribe(EventCategory::Radar, SubscriberId(0));
        bus.subscribe(EventCategory::Speed, SubscriberId(0));

        assert_eq!(bus.subscribers(EventCategory::Radar), &[SubscriberId(0)]);
        assert_eq!(bus.subscribers(EventCategory::Speed), &[SubscriberId(0)]);
        assert!(bus.subscribers(EventCategory::Lane).is_empty());
    }
}

//! Ownership and per-cycle orchestration of the feature set.

use adas_diagnostics::DiagnosticLog;
use adas_events::{EventBus, EventCategory, SensorEvent, SubscriberId};
use tracing::debug_span;

use crate::braking::CollisionBraking;
use crate::config::PipelineConfig;
use crate::door_warning::DoorWarning;
use crate::error::ConfigError;
use crate::feature::AdasFeature;
use crate::lane_centering::LaneCentering;
use crate::speed_control::SpeedControl;
use crate::state::VehicleState;

// Subscriber handles double as indices into the feature list; the
// construction order below defines both.
const BRAKING: SubscriberId = SubscriberId(0);
const SPEED_CONTROL: SubscriberId = SubscriberId(1);
const LANE_CENTERING: SubscriberId = SubscriberId(2);
const DOOR_WARNING: SubscriberId = SubscriberId(3);

/// Owns the event bus, the diagnostic log and the four feature policies,
/// and exposes the two operations of the per-cycle interface: publish a
/// sensor event, run one decision cycle.
///
/// Features execute in fixed registration order — collision braking, speed
/// control, lane centering, door warning — and later features may layer
/// over earlier writes to the shared output. That order is part of the
/// contract.
#[derive(Debug)]
pub struct DecisionCoordinator {
    bus: EventBus,
    log: DiagnosticLog,
    features: Vec<Box<dyn AdasFeature>>,
}

impl DecisionCoordinator {
    /// Build the coordinator after validating the configuration.
    ///
    /// # Errors
    ///
    /// Returns the first threshold constraint the configuration violates.
    pub fn new(config: PipelineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: PipelineConfig) -> Self {
        let features: Vec<Box<dyn AdasFeature>> = vec![
            Box::new(CollisionBraking::new(config.braking)),
            Box::new(SpeedControl::new(config.speed_control)),
            Box::new(LaneCentering::new(config.lane_centering)),
            Box::new(DoorWarning::new(config.door_warning)),
        ];

        let mut bus = EventBus::new();
        bus.subscribe(EventCategory::Radar, BRAKING);
        bus.subscribe(EventCategory::Radar, SPEED_CONTROL);
        bus.subscribe(EventCategory::Radar, DOOR_WARNING);
        bus.subscribe(EventCategory::Speed, BRAKING);
        bus.subscribe(EventCategory::Speed, SPEED_CONTROL);
        bus.subscribe(EventCategory::Lane, LANE_CENTERING);
        bus.subscribe(EventCategory::Door, DOOR_WARNING);

        Self {
            bus,
            log: DiagnosticLog::new(),
            features,
        }
    }

    /// Publish one sensor event to every feature subscribed to its
    /// category, synchronously and in registration order.
    pub fn publish(&mut self, event: &SensorEvent) {
        let features = &mut self.features;
        self.bus.publish(event, |id, event| {
            if let Some(feature) = features.get_mut(id.0) {
                feature.receive(event);
            }
        });
    }

    /// Run one decision cycle: every feature's `decide`, once, in fixed
    /// order, against the same output and log.
    ///
    /// The caller supplies the baseline output; command fields not touched
    /// by any feature retain their input value.
    pub fn execute(&mut self, state: &mut VehicleState, now_ms: u64) {
        let span = debug_span!("decision_cycle", now_ms);
        let _enter = span.enter();
        for feature in &mut self.features {
            feature.decide(state, &mut self.log, now_ms);
        }
    }

    /// The diagnostic log, for retrieval after a cycle.
    pub fn diagnostics(&self) -> &DiagnosticLog {
        &self.log
    }

    /// Mutable access to the diagnostic log, e.g. for clearing a code once
    /// the external diagnostics subsystem has consumed it.
    pub fn diagnostics_mut(&mut self) -> &mut DiagnosticLog {
        &mut self.log
    }

    /// Feature names in execution order.
    pub fn feature_names(&self) -> Vec<&'static str> {
        self.features.iter().map(|f| f.name()).collect()
    }
}

impl Default for DecisionCoordinator {
    fn default() -> Self {
        // Default thresholds are valid by construction.
        Self::build(PipelineConfig::default())
    }
}

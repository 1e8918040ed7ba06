//! The capability set shared by all feature policies.

use adas_diagnostics::DiagnosticLog;
use adas_events::SensorEvent;

use crate::state::VehicleState;

/// A single decision unit producing part of the vehicle command output.
///
/// The set of implementations is closed and known at build time: collision
/// braking, speed/gap control, lane centering and the door proximity
/// warning. Each one keeps a last-value cache of the sensor categories it
/// subscribes to and evaluates its policy once per cycle.
pub trait AdasFeature: std::fmt::Debug {
    /// Short name used in logs and for pinning the execution order in tests.
    fn name(&self) -> &'static str;

    /// Update the feature's cached sensor state from a delivered event.
    ///
    /// Never fails and never touches the shared output. A later event of
    /// the same category overwrites the cached value — there is no queue.
    fn receive(&mut self, event: &SensorEvent);

    /// Evaluate the policy against the cached state.
    ///
    /// Called exactly once per cycle, after all of that cycle's `receive`
    /// calls. May write command fields of `state` and append to `log`. On
    /// any doubt about its inputs the feature withholds its command and
    /// reports a diagnostic record instead (fail-inactive).
    fn decide(&mut self, state: &mut VehicleState, log: &mut DiagnosticLog, now_ms: u64);
}

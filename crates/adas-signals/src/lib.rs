//! Sensor signal validity classification for the ADAS decision core.
//!
//! Every raw sensor reading enters the system as a [`Signal`]: the measured
//! value bundled with its acquisition time and the sensor's own confidence.
//! A [`SignalValidator`] classifies one signal per call against configured
//! physical limits and timing constraints, writing the resulting
//! [`SignalStatus`] back onto the signal.
//!
//! # Precedence
//!
//! Checks run in a fixed order and the first failure wins:
//!
//! 1. **Age** — stale data invalidates everything else
//! 2. **Range** — physically impossible values indicate a sensor fault
//! 3. **Confidence** — present but untrusted data must not be acted on
//!
//! A signal that is simultaneously stale, out of range and low-confidence is
//! always reported as [`SignalStatus::Timeout`].
//!
//! # Example
//!
//! ```
//! use adas_signals::{Signal, SignalStatus, SignalValidator};
//!
//! let validator = SignalValidator::new(0.0, 200.0, 0.6, 200);
//! let mut range = Signal::new(50.0_f32, 100, 0.9);
//!
//! validator.validate(&mut range, 150);
//! assert_eq!(range.status, SignalStatus::Valid);
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod prelude;
pub mod signal;
pub mod validator;

pub use signal::{Signal, SignalStatus};
pub use validator::SignalValidator;

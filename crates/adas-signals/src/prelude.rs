//! Convenience re-exports for signal validation.
//!
//! ```
//! use adas_signals::prelude::*;
//!
//! let v = SignalValidator::ego_speed();
//! let mut s = Signal::new(22.0_f32, 0, 0.95);
//! v.validate(&mut s, 50);
//! assert_eq!(s.status, SignalStatus::Valid);
//! ```

pub use crate::signal::{Signal, SignalStatus};
pub use crate::validator::SignalValidator;

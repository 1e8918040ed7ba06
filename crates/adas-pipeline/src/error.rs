//! Configuration validation errors.
//!
//! The decision cycle itself is total and never returns an error; the only
//! fallible path in this crate is validating a [`crate::PipelineConfig`]
//! before any cycle runs.

use thiserror::Error;

/// A threshold or gain outside its safe operating range.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// A parameter that must be strictly positive was not.
    #[error("{field} must be positive (got {value})")]
    NonPositive {
        /// Offending parameter.
        field: &'static str,
        /// Supplied value.
        value: f32,
    },

    /// A confidence floor outside `[0.0, 1.0]`.
    #[error("{field} must be within [0.0, 1.0] (got {value})")]
    ConfidenceOutOfRange {
        /// Offending parameter.
        field: &'static str,
        /// Supplied value.
        value: f32,
    },

    /// A pair of thresholds whose required ordering is violated.
    #[error("{lower} ({lower_value}) must be below {upper} ({upper_value})")]
    InvertedBounds {
        /// Parameter required to be the smaller one.
        lower: &'static str,
        /// Its supplied value.
        lower_value: f32,
        /// Parameter required to be the larger one.
        upper: &'static str,
        /// Its supplied value.
        upper_value: f32,
    },
}

//! Error types for spline construction and evaluation.

use thiserror::Error;

/// Errors that can occur while building or evaluating splines.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SplineError {
    /// Malformed construction input (bad degree, length mismatch, unordered
    /// or non-finite knots).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Indexed access beyond the bounds of a sequence.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// Length of the sequence that was accessed.
        len: usize,
    },

    /// A parameter is not covered by any half-open knot interval of the domain.
    #[error("parameter {t} lies outside the domain [{start}, {end}]")]
    ParameterOutOfDomain {
        /// The requested parameter.
        t: f64,
        /// Start of the valid domain.
        start: f64,
        /// End of the valid domain.
        end: f64,
    },
}

impl SplineError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        SplineError::InvalidArgument(message.into())
    }

    pub(crate) fn out_of_domain<F: num_traits::Float>(t: F, start: F, end: F) -> Self {
        SplineError::ParameterOutOfDomain {
            t: t.to_f64().unwrap_or(f64::NAN),
            start: start.to_f64().unwrap_or(f64::NAN),
            end: end.to_f64().unwrap_or(f64::NAN),
        }
    }
}

//! B-spline curves, knot vectors and basis functions.

mod basis;
mod bspline;
mod knots;

pub use basis::{b_spline, basis_count, sample_basis};
pub use bspline::{SampleOptions, SplineCurve};
pub use knots::KnotVector;

use crate::error::SplineError;
use num_traits::Float;

/// Distance by which a curve's domain end is pulled below its last knot, so
/// the half-open interval search still finds a span at the domain end.
pub const DOMAIN_EPSILON: f64 = 1e-13;

/// Returns a value strictly below `value`.
///
/// Uses [`DOMAIN_EPSILON`], widened to one relative epsilon when the float
/// spacing at `value` is coarser than that.
pub(crate) fn nudge_below<F: Float>(value: F) -> F {
    let eps = F::from(DOMAIN_EPSILON).unwrap_or_else(F::epsilon);
    value - eps.max(value.abs() * F::epsilon())
}

/// `numerator / denominator`, or zero when the denominator is exactly zero.
///
/// Repeated knots produce zero-width spans; the term they weight vanishes.
#[inline]
pub(crate) fn ratio<F: Float>(numerator: F, denominator: F) -> F {
    if denominator == F::zero() {
        F::zero()
    } else {
        numerator / denominator
    }
}

/// Converts a count or index to the float type.
pub(crate) fn to_float<F: Float>(value: usize) -> Result<F, SplineError> {
    F::from(value)
        .ok_or_else(|| SplineError::invalid(format!("{} is not representable as a float", value)))
}

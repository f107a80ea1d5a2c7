//! Cox–de Boor B-spline basis functions.
//!
//! The basis functions are evaluated directly from a [`KnotVector`] and do
//! not need a curve, which makes them usable for plotting basis shapes on
//! their own.
//!
//! The knot layout drops the outermost knot on each side (see
//! [`KnotVector`]), so the leftmost and rightmost basis functions only blend
//! the lower-order function that lies inside the vector. Zero denominators,
//! which appear wherever knots repeat, zero the matching coefficient instead
//! of dividing.
//!
//! # Example
//!
//! ```
//! use splinekit::curves::{b_spline, basis_count, KnotVector};
//!
//! let knots: KnotVector<f64> = KnotVector::open_uniform(3, 5).unwrap();
//! let sum: f64 = (0..basis_count(knots.len(), 3))
//!     .map(|j| b_spline(&knots, 3, j, 0.7).unwrap())
//!     .sum();
//! assert!((sum - 1.0).abs() < 1e-12);
//! ```

use super::knots::KnotVector;
use super::{nudge_below, ratio, to_float};
use crate::error::SplineError;
use crate::primitives::Interval;
use num_traits::Float;

/// Number of basis functions of the given degree over a knot vector of
/// `knot_len` values.
#[inline]
pub fn basis_count(knot_len: usize, degree: usize) -> usize {
    (knot_len + 1).saturating_sub(degree)
}

/// Evaluates the `index`-th basis function of order `order` at `t`.
///
/// `index` runs over `0..=knots.len() - order`. Outside
/// `[knots[0], knots[len - 1])` every basis function evaluates to zero.
///
/// # Errors
///
/// - [`SplineError::InvalidArgument`] if `order >= knots.len()`
/// - [`SplineError::IndexOutOfRange`] if `index > knots.len() - order`
pub fn b_spline<F: Float>(
    knots: &KnotVector<F>,
    order: usize,
    index: usize,
    t: F,
) -> Result<F, SplineError> {
    let len = knots.len();
    if order >= len {
        return Err(SplineError::invalid(format!(
            "basis order {} needs more than {} knots",
            order, len
        )));
    }
    let count = basis_count(len, order);
    if index >= count {
        return Err(SplineError::IndexOutOfRange { index, len: count });
    }
    Ok(cox_de_boor(knots.as_slice(), order, index, t))
}

/// Samples one basis function across the full range of `knots`.
///
/// Returns `count` evenly spaced `(t, value)` pairs. The final sample sits
/// just below the last knot, where the half-open order-0 intervals would
/// otherwise report zero.
pub fn sample_basis<F: Float>(
    knots: &KnotVector<F>,
    degree: usize,
    index: usize,
    count: usize,
) -> Result<Vec<(F, F)>, SplineError> {
    if count < 2 {
        return Err(SplineError::invalid("basis sampling needs at least 2 samples"));
    }
    let range = knots.range();
    let end = nudge_below(range.end()).max(range.start());
    let span = Interval::from_ordered(range.start(), end);
    let last = to_float::<F>(count - 1)?;

    (0..count)
        .map(|i| {
            let t = span.lerp(to_float::<F>(i)? / last);
            Ok((t, b_spline(knots, degree, index, t)?))
        })
        .collect()
}

/// Cox–de Boor recursion. `k` is the order, `j` the 0-based control index;
/// knot `j - 1` is the left end of the support of function `j`.
fn cox_de_boor<F: Float>(knots: &[F], k: usize, j: usize, t: F) -> F {
    let len = knots.len();

    // Leftmost function: the left term would need a knot before knots[0].
    if j == 0 {
        if k == 0 {
            return F::zero();
        }
        let coeff = ratio(knots[j + k] - t, knots[j + k] - knots[j]);
        return coeff * cox_de_boor(knots, k - 1, j + 1, t);
    }

    // Rightmost function: the right term would need a knot past the end.
    if j == len - k {
        if k == 0 {
            return F::zero();
        }
        let coeff = ratio(t - knots[j - 1], knots[j + k - 1] - knots[j - 1]);
        return coeff * cox_de_boor(knots, k - 1, j, t);
    }

    if k == 0 {
        return if knots[j - 1] <= t && t < knots[j] {
            F::one()
        } else {
            F::zero()
        };
    }

    let coeff1 = ratio(t - knots[j - 1], knots[j + k - 1] - knots[j - 1]);
    let coeff2 = ratio(knots[j + k] - t, knots[j + k] - knots[j]);

    coeff1 * cox_de_boor(knots, k - 1, j, t) + coeff2 * cox_de_boor(knots, k - 1, j + 1, t)
}

//! Knot vectors for B-spline curves.
//!
//! A knot vector is a non-decreasing sequence of finite parameter values. It
//! partitions the parameter line into the intervals over which each basis
//! function is a polynomial piece, and repeated knots lower the continuity of
//! the curve at that parameter.
//!
//! Knot vectors here hold `control_points + degree - 1` values: the two
//! outermost knots of the textbook `n + p + 1` layout never influence the
//! curve on its domain and are left out.
//!
//! # Example
//!
//! ```
//! use splinekit::curves::KnotVector;
//!
//! let clamped: KnotVector<f64> = KnotVector::open_uniform(3, 5).unwrap();
//! assert_eq!(clamped.to_vec(), vec![0.0, 0.0, 0.0, 1.0, 2.0, 2.0, 2.0]);
//!
//! let mut refined = clamped.clone();
//! refined.add(0.5).unwrap();
//! assert_eq!(refined.len(), 8);
//! ```

use super::to_float;
use crate::error::SplineError;
use crate::primitives::Interval;
use num_traits::Float;
use std::fmt;

/// A non-decreasing, non-empty sequence of finite knot values.
#[derive(Debug, Clone, PartialEq)]
pub struct KnotVector<F> {
    values: Vec<F>,
}

impl<F: Float> KnotVector<F> {
    /// Creates a knot vector from explicit values.
    ///
    /// Fails with [`SplineError::InvalidArgument`] if the list is empty,
    /// contains NaN or infinite values, or is not non-decreasing.
    pub fn new(values: Vec<F>) -> Result<Self, SplineError> {
        if values.is_empty() {
            return Err(SplineError::invalid("knot vector must not be empty"));
        }
        for (i, &value) in values.iter().enumerate() {
            validate_value(value)?;
            if i > 0 && value < values[i - 1] {
                return Err(SplineError::invalid(format!(
                    "knots must be in ascending order (index {} is smaller than its predecessor)",
                    i
                )));
            }
        }
        Ok(Self { values })
    }

    /// Creates a uniform knot vector `0, 1, 2, ...` with
    /// `control_point_count + degree - 1` values.
    pub fn uniform(degree: usize, control_point_count: usize) -> Result<Self, SplineError> {
        let len = knot_count(degree, control_point_count)?;
        let values = (0..len).map(to_float).collect::<Result<Vec<F>, _>>()?;
        Self::new(values)
    }

    /// Creates an open uniform (clamped) knot vector.
    ///
    /// The first `degree` values are zero, the interior counts up by one and
    /// the last `degree` values repeat the final interior value plus one, so a
    /// curve built on it interpolates its first and last control points.
    ///
    /// With `control_point_count <= degree` the trailing run overlaps the
    /// leading zeros: `open_uniform(3, 3)` is `[0, 0, 1, 1, 1]`. Fails when
    /// no value precedes the trailing run.
    pub fn open_uniform(degree: usize, control_point_count: usize) -> Result<Self, SplineError> {
        let len = knot_count(degree, control_point_count)?;
        if len <= degree {
            return Err(SplineError::invalid(format!(
                "open uniform knots of degree {} need at least 2 control points",
                degree
            )));
        }

        let tail_start = len - degree;
        // Value just before the trailing run: a leading zero or the last ramp step.
        let before_tail = if tail_start - 1 < degree {
            0
        } else {
            tail_start - degree
        };
        let values = (0..len)
            .map(|i| {
                if i >= tail_start {
                    to_float(before_tail + 1)
                } else if i < degree {
                    to_float(0)
                } else {
                    to_float(i + 1 - degree)
                }
            })
            .collect::<Result<Vec<F>, _>>()?;
        Self::new(values)
    }

    /// Returns the knot at `index`.
    pub fn get(&self, index: usize) -> Result<F, SplineError> {
        self.values
            .get(index)
            .copied()
            .ok_or(SplineError::IndexOutOfRange {
                index,
                len: self.values.len(),
            })
    }

    /// Returns the number of knots.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false`; a knot vector holds at least one value.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns `[first knot, last knot]`.
    pub fn range(&self) -> Interval<F> {
        Interval::from_ordered(self.values[0], self.values[self.values.len() - 1])
    }

    /// Inserts `value`, keeping the sequence ordered.
    ///
    /// A value equal to existing knots is placed after them.
    pub fn add(&mut self, value: F) -> Result<(), SplineError> {
        validate_value(value)?;
        let position = self.values.partition_point(|&k| k <= value);
        self.values.insert(position, value);
        Ok(())
    }

    /// Removes the first knot equal to `value`.
    ///
    /// Returns `Ok(false)` and leaves the vector untouched if no knot matches.
    /// Fails if removing the knot would leave the vector empty.
    pub fn remove(&mut self, value: F) -> Result<bool, SplineError> {
        let Some(position) = self.values.iter().position(|&k| k == value) else {
            return Ok(false);
        };
        if self.values.len() == 1 {
            return Err(SplineError::invalid(
                "cannot remove the last remaining knot",
            ));
        }
        self.values.remove(position);
        Ok(true)
    }

    /// Returns the knots as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[F] {
        &self.values
    }

    /// Returns an independent copy of the knot values.
    pub fn to_vec(&self) -> Vec<F> {
        self.values.clone()
    }

    /// Iterates over the knot values.
    pub fn iter(&self) -> impl Iterator<Item = F> + '_ {
        self.values.iter().copied()
    }
}

impl<F: Float> TryFrom<Vec<F>> for KnotVector<F> {
    type Error = SplineError;

    fn try_from(values: Vec<F>) -> Result<Self, Self::Error> {
        Self::new(values)
    }
}

impl<F: Float + fmt::Display> fmt::Display for KnotVector<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, "]")
    }
}

fn validate_value<F: Float>(value: F) -> Result<(), SplineError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SplineError::invalid(
            "knot values must not be infinite or NaN",
        ))
    }
}

fn knot_count(degree: usize, control_point_count: usize) -> Result<usize, SplineError> {
    if degree < 1 {
        return Err(SplineError::invalid("degree must be at least 1"));
    }
    if control_point_count < 1 {
        return Err(SplineError::invalid(
            "at least one control point is required",
        ));
    }
    control_point_count
        .checked_add(degree - 1)
        .ok_or_else(|| SplineError::invalid(format!("degree {} is too large", degree)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_repeats() {
        let knots: KnotVector<f64> = KnotVector::new(vec![0.0, 0.0, 1.0, 1.0]).unwrap();
        assert_eq!(knots.len(), 4);
        assert_eq!(knots.get(2), Ok(1.0));
    }

    #[test]
    fn test_new_rejects_unordered() {
        let result = KnotVector::new(vec![0.0_f64, 2.0, 1.0]);
        assert!(matches!(result, Err(SplineError::InvalidArgument(_))));
    }

    #[test]
    fn test_new_rejects_non_finite() {
        assert!(KnotVector::new(vec![0.0, f64::NAN]).is_err());
        assert!(KnotVector::new(vec![0.0, f64::INFINITY]).is_err());
        assert!(KnotVector::new(vec![f64::NEG_INFINITY, 0.0]).is_err());
    }

    #[test]
    fn test_new_rejects_empty() {
        assert!(KnotVector::<f64>::new(Vec::new()).is_err());
    }

    #[test]
    fn test_ordering_invariant_holds() {
        let knots: KnotVector<f64> = KnotVector::new(vec![-1.0, 0.0, 0.0, 0.5, 3.0]).unwrap();
        for pair in knots.as_slice().windows(2) {
            assert!(pair[0] <= pair[1]);
        }
    }

    #[test]
    fn test_uniform() {
        let knots: KnotVector<f64> = KnotVector::uniform(3, 5).unwrap();
        assert_eq!(knots.to_vec(), vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }

    #[test]
    fn test_uniform_single_knot() {
        let knots: KnotVector<f64> = KnotVector::uniform(1, 1).unwrap();
        assert_eq!(knots.to_vec(), vec![0.0]);
    }

    #[test]
    fn test_open_uniform() {
        let knots: KnotVector<f64> = KnotVector::open_uniform(3, 5).unwrap();
        assert_eq!(knots.to_vec(), vec![0.0, 0.0, 0.0, 1.0, 2.0, 2.0, 2.0]);
    }

    #[test]
    fn test_open_uniform_minimal() {
        // Bezier-like: no interior knots.
        let knots: KnotVector<f64> = KnotVector::open_uniform(3, 4).unwrap();
        assert_eq!(knots.to_vec(), vec![0.0, 0.0, 0.0, 1.0, 1.0, 1.0]);

        let linear: KnotVector<f64> = KnotVector::open_uniform(1, 3).unwrap();
        assert_eq!(linear.to_vec(), vec![0.0, 1.0, 2.0]);
    }

    #[test]
    fn test_generators_reject_bad_input() {
        assert!(KnotVector::<f64>::uniform(0, 5).is_err());
        assert!(KnotVector::<f64>::uniform(3, 0).is_err());
        assert!(KnotVector::<f64>::open_uniform(0, 3).is_err());
        assert!(KnotVector::<f64>::open_uniform(3, 1).is_err());
        assert!(KnotVector::<f64>::open_uniform(1, 1).is_err());
    }

    #[test]
    fn test_open_uniform_few_control_points() {
        let knots: KnotVector<f64> = KnotVector::open_uniform(3, 3).unwrap();
        assert_eq!(knots.to_vec(), vec![0.0, 0.0, 1.0, 1.0, 1.0]);

        let knots: KnotVector<f64> = KnotVector::open_uniform(3, 2).unwrap();
        assert_eq!(knots.to_vec(), vec![0.0, 1.0, 1.0, 1.0]);

        let knots: KnotVector<f64> = KnotVector::open_uniform(2, 2).unwrap();
        assert_eq!(knots.to_vec(), vec![0.0, 1.0, 1.0]);
    }

    #[test]
    fn test_generators_reject_overflowing_degree() {
        let result = KnotVector::<f64>::uniform(usize::MAX, 2);
        assert!(matches!(result, Err(SplineError::InvalidArgument(_))));
        assert!(KnotVector::<f64>::open_uniform(usize::MAX, 2).is_err());
    }

    #[test]
    fn test_iter() {
        let knots: KnotVector<f64> = KnotVector::new(vec![0.0, 0.5, 2.0]).unwrap();
        assert_eq!(knots.iter().sum::<f64>(), 2.5);
        assert_eq!(knots.iter().collect::<Vec<_>>(), knots.to_vec());
    }

    #[test]
    fn test_get_out_of_range() {
        let knots: KnotVector<f64> = KnotVector::uniform(2, 2).unwrap();
        assert_eq!(
            knots.get(3),
            Err(SplineError::IndexOutOfRange { index: 3, len: 3 })
        );
    }

    #[test]
    fn test_range() {
        let knots: KnotVector<f64> = KnotVector::new(vec![0.5, 1.0, 4.0]).unwrap();
        let range = knots.range();
        assert_eq!(range.start(), 0.5);
        assert_eq!(range.end(), 4.0);
    }

    #[test]
    fn test_add_keeps_order() {
        let mut knots: KnotVector<f64> = KnotVector::new(vec![0.0, 1.0, 2.0]).unwrap();
        knots.add(1.5).unwrap();
        knots.add(-1.0).unwrap();
        knots.add(5.0).unwrap();
        assert_eq!(knots.to_vec(), vec![-1.0, 0.0, 1.0, 1.5, 2.0, 5.0]);
    }

    #[test]
    fn test_add_after_equal_values() {
        let mut knots: KnotVector<f64> = KnotVector::new(vec![0.0, 1.0, 1.0, 2.0]).unwrap();
        knots.add(1.0).unwrap();
        assert_eq!(knots.to_vec(), vec![0.0, 1.0, 1.0, 1.0, 2.0]);
    }

    #[test]
    fn test_add_rejects_non_finite() {
        let mut knots: KnotVector<f64> = KnotVector::new(vec![0.0, 1.0]).unwrap();
        assert!(knots.add(f64::NAN).is_err());
        assert_eq!(knots.len(), 2);
    }

    #[test]
    fn test_remove() {
        let mut knots: KnotVector<f64> = KnotVector::new(vec![0.0, 1.0, 1.0, 2.0]).unwrap();
        assert_eq!(knots.remove(1.0), Ok(true));
        assert_eq!(knots.to_vec(), vec![0.0, 1.0, 2.0]);
        assert_eq!(knots.remove(7.0), Ok(false));
        assert_eq!(knots.len(), 3);
    }

    #[test]
    fn test_remove_last_knot_fails() {
        let mut knots: KnotVector<f64> = KnotVector::new(vec![3.0]).unwrap();
        assert!(knots.remove(3.0).is_err());
        assert_eq!(knots.len(), 1);
    }

    #[test]
    fn test_copies_are_independent() {
        let original: KnotVector<f64> = KnotVector::uniform(2, 3).unwrap();
        let mut copy = original.clone();
        copy.add(0.5).unwrap();
        assert_ne!(original, copy);
        assert_eq!(original.len(), 4);

        let mut values = original.to_vec();
        values[0] = 99.0;
        assert_eq!(original.get(0), Ok(0.0));
    }

    #[test]
    fn test_exact_equality() {
        let a: KnotVector<f64> = KnotVector::new(vec![0.0, 0.1 + 0.2]).unwrap();
        let b: KnotVector<f64> = KnotVector::new(vec![0.0, 0.3]).unwrap();
        assert_ne!(a, b);
        assert_eq!(a, a.clone());
    }

    #[test]
    fn test_try_from_and_display() {
        let knots: KnotVector<f64> = vec![0.0, 0.5, 1.0].try_into().unwrap();
        assert_eq!(knots.to_string(), "[0, 0.5, 1]");
    }
}

//! Closed parameter interval on the real line.

use crate::error::SplineError;
use num_traits::Float;
use std::fmt;

/// An ordered interval `[start, end]` with `start <= end`.
///
/// Used both as the span of a knot vector and as the evaluation domain of a
/// spline curve. Degenerate intervals (`start == end`) are allowed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval<F> {
    start: F,
    end: F,
}

impl<F: Float> Interval<F> {
    /// Creates a new interval.
    ///
    /// Fails with [`SplineError::InvalidArgument`] if either bound is NaN or
    /// `start > end`.
    pub fn new(start: F, end: F) -> Result<Self, SplineError> {
        if start.is_nan() || end.is_nan() {
            return Err(SplineError::invalid("interval bounds must not be NaN"));
        }
        if start > end {
            return Err(SplineError::invalid(
                "interval start must not exceed its end",
            ));
        }
        Ok(Self { start, end })
    }

    /// Builds an interval from bounds already known to be ordered.
    #[inline]
    pub(crate) fn from_ordered(start: F, end: F) -> Self {
        debug_assert!(start <= end);
        Self { start, end }
    }

    #[inline]
    pub fn start(&self) -> F {
        self.start
    }

    #[inline]
    pub fn end(&self) -> F {
        self.end
    }

    /// Returns `end - start`.
    #[inline]
    pub fn length(&self) -> F {
        self.end - self.start
    }

    /// Returns `true` if `t` lies in `[start, end]`.
    #[inline]
    pub fn contains(&self, t: F) -> bool {
        self.start <= t && t <= self.end
    }

    /// Returns the parameter at fraction `s` of the interval.
    #[inline]
    pub fn lerp(&self, s: F) -> F {
        self.start + (self.end - self.start) * s
    }
}

impl<F: Float + fmt::Display> fmt::Display for Interval<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

//! B-spline curves with arbitrary degree and knot vectors.
//!
//! B-splines provide local control over the curve shape: a control point only
//! influences the span of parameters covered by its basis function, which the
//! knot vector determines.
//!
//! A curve of degree `d` with `n` control points uses `n + d - 1` knots (see
//! [`KnotVector`]). Its domain runs from `knots[d - 1]` to just below
//! `knots[n - 1]`.
//!
//! # Example
//!
//! ```
//! use splinekit::{Point2, curves::{KnotVector, SplineCurve}};
//!
//! let control_points = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 2.0),
//!     Point2::new(2.0, 2.0),
//!     Point2::new(3.0, 0.0),
//!     Point2::new(4.0, 1.0),
//! ];
//! let knots = KnotVector::open_uniform(3, control_points.len()).unwrap();
//! let curve = SplineCurve::new(3, control_points, knots).unwrap();
//!
//! let start = curve.evaluate(curve.domain().start()).unwrap();
//! assert_eq!(start, Point2::new(0.0, 0.0));
//!
//! // Refining the control polygon keeps the shape.
//! let refined = curve.knot_inserted(0.5).unwrap();
//! assert_eq!(refined.control_points().len(), 6);
//! ```

use super::basis::b_spline;
use super::knots::KnotVector;
use super::{nudge_below, ratio, to_float};
use crate::error::SplineError;
use crate::primitives::{Interval, Point2};
use log::{debug, trace};
use num_traits::Float;
use std::fmt;

/// Options for adaptive polyline sampling.
#[derive(Debug, Clone, Copy)]
pub struct SampleOptions<F> {
    /// Maximum distance between a span's midpoint on the curve and the chord.
    pub tolerance: F,
    /// Subdivisions always performed, so symmetric spans are not mistaken
    /// for straight ones.
    pub min_depth: usize,
    /// Maximum recursion depth.
    pub max_depth: usize,
}

impl<F: Float> Default for SampleOptions<F> {
    fn default() -> Self {
        Self {
            tolerance: F::from(0.01).unwrap_or_else(F::epsilon),
            min_depth: 2,
            max_depth: 16,
        }
    }
}

impl<F: Float> SampleOptions<F> {
    /// Creates options with the specified tolerance.
    pub fn with_tolerance(tolerance: F) -> Self {
        Self {
            tolerance,
            ..Default::default()
        }
    }
}

/// A B-spline curve in 2D.
///
/// Immutable once built: refinement through [`SplineCurve::knot_inserted`]
/// produces a new curve.
#[derive(Debug, Clone, PartialEq)]
pub struct SplineCurve<F> {
    degree: usize,
    control_points: Vec<Point2<F>>,
    knots: KnotVector<F>,
    domain: Interval<F>,
}

impl<F: Float> SplineCurve<F> {
    /// Creates a curve from a degree, control points and a knot vector.
    ///
    /// # Errors
    ///
    /// [`SplineError::InvalidArgument`] if:
    /// - `degree < 1`
    /// - `control_points` is empty
    /// - `knots.len() != control_points.len() + degree - 1`
    /// - the knots leave an empty domain
    pub fn new(
        degree: usize,
        control_points: Vec<Point2<F>>,
        knots: KnotVector<F>,
    ) -> Result<Self, SplineError> {
        if degree < 1 {
            return Err(SplineError::invalid("degree must be at least 1"));
        }
        let n = control_points.len();
        if n == 0 {
            return Err(SplineError::invalid(
                "at least one control point is required",
            ));
        }
        let expected = n
            .checked_add(degree - 1)
            .ok_or_else(|| SplineError::invalid(format!("degree {} is too large", degree)))?;
        if knots.len() != expected {
            return Err(SplineError::invalid(format!(
                "expected {} knots for {} control points of degree {}, got {}",
                expected,
                n,
                degree,
                knots.len()
            )));
        }

        let values = knots.as_slice();
        let start = values[degree - 1];
        let end = nudge_below(values[n - 1]);
        if end < start {
            return Err(SplineError::invalid(format!(
                "knots {:?} leave an empty domain for degree {}",
                values.iter().map(|k| k.to_f64().unwrap_or(f64::NAN)).collect::<Vec<_>>(),
                degree
            )));
        }
        let domain = Interval::from_ordered(start, end);

        debug!(
            "spline curve: degree {}, {} control points, {} knots, domain [{:?}, {:?}]",
            degree,
            n,
            knots.len(),
            start.to_f64(),
            end.to_f64()
        );

        Ok(Self {
            degree,
            control_points,
            knots,
            domain,
        })
    }

    /// Creates a curve over a uniform knot vector `0, 1, 2, ...`.
    pub fn with_uniform_knots(
        control_points: Vec<Point2<F>>,
        degree: usize,
    ) -> Result<Self, SplineError> {
        let knots = KnotVector::uniform(degree, control_points.len())?;
        Self::new(degree, control_points, knots)
    }

    /// Creates a curve over an open uniform (clamped) knot vector.
    ///
    /// The curve passes through its first and last control points.
    pub fn with_open_uniform_knots(
        control_points: Vec<Point2<F>>,
        degree: usize,
    ) -> Result<Self, SplineError> {
        let knots = KnotVector::open_uniform(degree, control_points.len())?;
        Self::new(degree, control_points, knots)
    }

    #[inline]
    pub fn degree(&self) -> usize {
        self.degree
    }

    #[inline]
    pub fn control_points(&self) -> &[Point2<F>] {
        &self.control_points
    }

    /// Returns the knot vector. Clone it to edit a copy.
    #[inline]
    pub fn knots(&self) -> &KnotVector<F> {
        &self.knots
    }

    /// Returns the valid parameter range of the curve.
    #[inline]
    pub fn domain(&self) -> Interval<F> {
        self.domain
    }

    /// Finds the first `i` with `knots[i] <= t < knots[i + 1]`.
    pub fn knot_interval_index(&self, t: F) -> Result<usize, SplineError> {
        let knots = self.knots.as_slice();
        if let Some(i) = knots.windows(2).position(|w| w[0] <= t && t < w[1]) {
            return Ok(i);
        }

        trace!("no knot interval contains {:?}", t.to_f64());
        let range = self.knots.range();
        Err(SplineError::out_of_domain(t, range.start(), range.end()))
    }

    /// Evaluates the curve at `t` using de Boor's algorithm.
    ///
    /// The returned point is tagged with `t`.
    pub fn evaluate(&self, t: F) -> Result<Point2<F>, SplineError> {
        if !self.domain.contains(t) {
            return Err(SplineError::out_of_domain(
                t,
                self.domain.start(),
                self.domain.end(),
            ));
        }
        let k = self.knot_interval_index(t)?;
        Ok(self.blend(self.degree, k + 1, t).tagged(t))
    }

    /// Evaluates the de Boor point of level `r` and index `i` at `t`.
    ///
    /// Level 0 is the control polygon; `de_boor(degree, k + 1, t)` is the curve
    /// point when `t` lies in knot interval `k`.
    ///
    /// # Errors
    ///
    /// - [`SplineError::InvalidArgument`] if `r > degree`
    /// - [`SplineError::IndexOutOfRange`] if `i < r` or `i >= control_points.len()`
    pub fn de_boor(&self, r: usize, i: usize, t: F) -> Result<Point2<F>, SplineError> {
        if r > self.degree {
            return Err(SplineError::invalid(format!(
                "de Boor level {} exceeds degree {}",
                r, self.degree
            )));
        }
        if i < r || i >= self.control_points.len() {
            return Err(SplineError::IndexOutOfRange {
                index: i,
                len: self.control_points.len(),
            });
        }
        Ok(self.blend(r, i, t))
    }

    // Requires r <= degree and r <= i < n.
    fn blend(&self, r: usize, i: usize, t: F) -> Point2<F> {
        if r == 0 {
            return self.control_points[i];
        }

        let knots = self.knots.as_slice();
        let right = knots[i + self.degree - r];
        let w = ratio(right - t, right - knots[i - 1]);

        let lower = self.blend(r - 1, i - 1, t);
        let upper = self.blend(r - 1, i, t);
        lower.internal_division(upper, w, F::one() - w)
    }

    /// Evaluates every basis function of the curve at `t`.
    ///
    /// Entry `j` weights control point `j`.
    pub fn basis_values(&self, t: F) -> Result<Vec<F>, SplineError> {
        (0..self.control_points.len())
            .map(|j| b_spline(&self.knots, self.degree, j, t))
            .collect()
    }

    /// Inserts a knot at `value`, returning a new curve with one more control
    /// point and the same shape (Boehm's algorithm).
    pub fn knot_inserted(&self, value: F) -> Result<Self, SplineError> {
        if !self.domain.contains(value) {
            return Err(SplineError::out_of_domain(
                value,
                self.domain.start(),
                self.domain.end(),
            ));
        }

        let p = self.degree;
        let n = self.control_points.len();
        let old = self.knots.as_slice();
        let cps = &self.control_points;

        // value lies in old knot interval k; control points k + 1 - p ..= k + 1
        // span it.
        let s = self.knot_interval_index(value)? + 1;

        let mut knots = self.knots.clone();
        knots.add(value)?;

        let control_points = (0..=n)
            .map(|i| {
                if i + p <= s {
                    cps[i]
                } else if i > s {
                    cps[i - 1]
                } else {
                    let alpha = ratio(value - old[i - 1], old[i + p - 1] - old[i - 1]);
                    cps[i].internal_division(cps[i - 1], alpha, F::one() - alpha)
                }
            })
            .collect();

        debug!(
            "inserted knot {:?} into interval {}: {} -> {} control points",
            value.to_f64(),
            s - 1,
            n,
            n + 1
        );

        Self::new(p, control_points, knots)
    }

    /// Evaluates `count` evenly spaced points from the start to the end of
    /// the domain, both included.
    pub fn sample(&self, count: usize) -> Result<Vec<Point2<F>>, SplineError> {
        if count < 2 {
            return Err(SplineError::invalid("sampling needs at least 2 points"));
        }
        let last = to_float::<F>(count - 1)?;
        let end = self.domain.end();

        (0..count)
            .map(|i| {
                let t = if i + 1 == count {
                    end
                } else {
                    self.domain.lerp(to_float::<F>(i)? / last).min(end)
                };
                self.evaluate(t)
            })
            .collect()
    }

    /// Converts the curve to a polyline using adaptive sampling.
    ///
    /// Spans are split until the curve midpoint lies within
    /// `options.tolerance` of the chord or `options.max_depth` is reached.
    pub fn to_polyline(&self, options: &SampleOptions<F>) -> Result<Vec<Point2<F>>, SplineError> {
        let t0 = self.domain.start();
        let t1 = self.domain.end();
        let p0 = self.evaluate(t0)?;
        let p1 = self.evaluate(t1)?;

        let mut points = vec![p0];
        self.subdivide(t0, p0, t1, p1, options, 0, &mut points)?;
        Ok(points)
    }

    #[allow(clippy::too_many_arguments)]
    fn subdivide(
        &self,
        t0: F,
        p0: Point2<F>,
        t1: F,
        p1: Point2<F>,
        options: &SampleOptions<F>,
        depth: usize,
        points: &mut Vec<Point2<F>>,
    ) -> Result<(), SplineError> {
        let two = F::one() + F::one();
        let t_mid = (t0 + t1) / two;
        let p_mid = self.evaluate(t_mid)?;

        let flat = p_mid.distance(p0.midpoint(p1)) <= options.tolerance;
        if depth >= options.max_depth || (depth >= options.min_depth && flat) {
            points.push(p1);
            return Ok(());
        }

        self.subdivide(t0, p0, t_mid, p_mid, options, depth + 1, points)?;
        self.subdivide(t_mid, p_mid, t1, p1, options, depth + 1, points)
    }
}

impl<F: Float + fmt::Display> fmt::Display for SplineCurve<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "degree {} spline, control points [", self.degree)?;
        for (i, p) in self.control_points.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "({}, {})", p.x, p.y)?;
        }
        write!(f, "], knots {}, domain {}", self.knots, self.domain)
    }
}

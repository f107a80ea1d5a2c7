//! 2D point type with an optional curve-parameter tag.

use num_traits::Float;
use std::fmt;

/// A 2D point with x and y coordinates.
///
/// Points produced by curve evaluation carry the parameter `t` they were
/// evaluated at. The tag is informational and does not take part in equality.
///
/// Generic over floating-point types (`f32` or `f64`).
#[derive(Debug, Clone, Copy)]
pub struct Point2<F> {
    pub x: F,
    pub y: F,
    /// Parameter value at which this point was evaluated, if any.
    pub t: Option<F>,
}

impl<F: Float> Point2<F> {
    /// Creates a new untagged point.
    #[inline]
    pub fn new(x: F, y: F) -> Self {
        Self { x, y, t: None }
    }

    /// Creates a point tagged with the parameter it was evaluated at.
    #[inline]
    pub fn with_param(x: F, y: F, t: F) -> Self {
        Self { x, y, t: Some(t) }
    }

    /// Creates a point at the origin (0, 0).
    #[inline]
    pub fn origin() -> Self {
        Self::new(F::zero(), F::zero())
    }

    /// Returns the parameter tag, if any.
    #[inline]
    pub fn param(self) -> Option<F> {
        self.t
    }

    /// Returns a copy of this point tagged with `t`.
    #[inline]
    pub fn tagged(self, t: F) -> Self {
        Self::with_param(self.x, self.y, t)
    }

    /// Weighted affine combination `w_self * self + w_other * other`.
    ///
    /// The weights are not normalized. The result is untagged.
    #[inline]
    pub fn internal_division(self, other: Self, w_self: F, w_other: F) -> Self {
        Self::new(
            w_self * self.x + w_other * other.x,
            w_self * self.y + w_other * other.y,
        )
    }

    /// Computes the squared distance to another point.
    #[inline]
    pub fn distance_squared(self, other: Self) -> F {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        dx * dx + dy * dy
    }

    /// Computes the Euclidean distance to another point.
    #[inline]
    pub fn distance(self, other: Self) -> F {
        self.distance_squared(other).sqrt()
    }

    /// Returns the midpoint between `self` and `other`.
    #[inline]
    pub fn midpoint(self, other: Self) -> Self {
        let half = F::from(0.5).unwrap_or_else(|| F::one() / (F::one() + F::one()));
        self.internal_division(other, half, half)
    }
}

// Geometry only; the parameter tag is ignored.
impl<F: PartialEq> PartialEq for Point2<F> {
    fn eq(&self, other: &Self) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl<F: Float> Default for Point2<F> {
    fn default() -> Self {
        Self::origin()
    }
}

impl<F: Float> From<(F, F)> for Point2<F> {
    fn from((x, y): (F, F)) -> Self {
        Self::new(x, y)
    }
}

impl<F: Float + fmt::Display> fmt::Display for Point2<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.t {
            Some(t) => write!(f, "({}, {}; t={})", self.x, self.y, t),
            None => write!(f, "({}, {})", self.x, self.y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let p: Point2<f64> = Point2::new(1.0, 2.0);
        assert_eq!(p.x, 1.0);
        assert_eq!(p.y, 2.0);
        assert_eq!(p.param(), None);
    }

    #[test]
    fn test_with_param() {
        let p: Point2<f64> = Point2::with_param(1.0, 2.0, 0.25);
        assert_eq!(p.param(), Some(0.25));
        assert_eq!(Point2::new(1.0, 2.0).tagged(0.25).param(), Some(0.25));
    }

    #[test]
    fn test_equality_ignores_tag() {
        let a: Point2<f64> = Point2::with_param(1.0, 2.0, 0.5);
        let b = Point2::new(1.0, 2.0);
        assert_eq!(a, b);
        assert_ne!(a, Point2::new(1.0, 2.5));
    }

    #[test]
    fn test_internal_division() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(10.0, 20.0);

        let p = a.internal_division(b, 0.75, 0.25);
        assert_eq!(p.x, 2.5);
        assert_eq!(p.y, 5.0);

        // Weights are used as given, not normalized.
        let q = b.internal_division(b, 2.0, 1.0);
        assert_eq!(q, Point2::new(30.0, 60.0));
    }

    #[test]
    fn test_internal_division_drops_tag() {
        let a: Point2<f64> = Point2::with_param(0.0, 0.0, 1.0);
        let b = Point2::with_param(2.0, 2.0, 2.0);
        assert_eq!(a.internal_division(b, 0.5, 0.5).param(), None);
    }

    #[test]
    fn test_distance() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 4.0);
        assert_eq!(a.distance_squared(b), 25.0);
        assert_eq!(a.distance(b), 5.0);
    }

    #[test]
    fn test_midpoint() {
        let a: Point2<f64> = Point2::new(0.0, 0.0);
        let b = Point2::new(10.0, 20.0);
        assert_eq!(a.midpoint(b), Point2::new(5.0, 10.0));
    }

    #[test]
    fn test_from_tuple() {
        let p: Point2<f64> = (3.0, -1.5).into();
        assert_eq!(p, Point2::new(3.0, -1.5));
        assert_eq!(p.param(), None);
    }

    #[test]
    fn test_display() {
        let p: Point2<f64> = Point2::new(1.5, -2.0);
        assert_eq!(p.to_string(), "(1.5, -2)");
        assert_eq!(p.tagged(0.5).to_string(), "(1.5, -2; t=0.5)");
    }
}

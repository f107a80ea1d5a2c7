//! splinekit - B-spline curve kernel
//!
//! Knot vectors, de Boor point evaluation, Cox–de Boor basis functions and
//! Boehm knot insertion for interactive spline editors. The host supplies
//! control points and draws the evaluated points; this crate does the math.

pub mod curves;
pub mod error;
pub mod primitives;

pub use curves::{b_spline, KnotVector, SampleOptions, SplineCurve};
pub use error::SplineError;
pub use primitives::{Interval, Point2};

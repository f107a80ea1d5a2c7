//! Floating-point geometric primitives.

mod interval;
mod point2;

pub use interval::Interval;
pub use point2::Point2;

//! Basic geometry primitives.

mod point3;

pub use point3::{Axis, Point3};

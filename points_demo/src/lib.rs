//! Three-coordinate point value type.
//!
//! [`geometry::Point3`] holds `x`, `y` and `z`, can be reset to the origin
//! and renders as `Point(x, y, z)` with six decimals per coordinate. The
//! `points_demo_python` crate exposes it to Python as `point.Point`.

pub mod error;
pub mod geometry;
pub mod logging;

pub use error::{PointError, PointResult};
pub use geometry::{Axis, Point3};

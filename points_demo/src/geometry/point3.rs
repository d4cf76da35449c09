//! Basic 3D point type used throughout the crate.

use std::fmt;

/// Name of one of the three coordinates of a [`Point3`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// All axes in `x, y, z` order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Lower-case attribute name of the axis.
    pub fn name(self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }

    /// Looks up an axis by its attribute name.
    pub fn from_name(name: &str) -> Option<Axis> {
        Axis::ALL.into_iter().find(|axis| axis.name() == name)
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Representation of a 3D point.
///
/// Every coordinate defaults to `0.0` and any `f64`, finite or not, is a
/// legal value.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    /// The point at `(0.0, 0.0, 0.0)`.
    pub const ORIGIN: Point3 = Point3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Creates a point from any subset of coordinates, missing ones are `0.0`.
    pub fn from_optional(x: Option<f64>, y: Option<f64>, z: Option<f64>) -> Self {
        let p = Self {
            x: x.unwrap_or_default(),
            y: y.unwrap_or_default(),
            z: z.unwrap_or_default(),
        };
        log::trace!("constructed {p}");
        p
    }

    pub fn with_x(mut self, x: f64) -> Self {
        self.x = x;
        self
    }

    pub fn with_y(mut self, y: f64) -> Self {
        self.y = y;
        self
    }

    pub fn with_z(mut self, z: f64) -> Self {
        self.z = z;
        self
    }

    /// Returns the coordinate along `axis`.
    pub fn get(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
            Axis::Z => self.z,
        }
    }

    /// Overwrites the coordinate along `axis`.
    pub fn set(&mut self, axis: Axis, value: f64) {
        log::trace!("set {axis} = {value}");
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
            Axis::Z => self.z = value,
        }
    }

    /// Resets all coordinates to `0.0`.
    pub fn clear(&mut self) {
        log::trace!("clearing {self}");
        *self = Self::ORIGIN;
    }

    /// Returns the point as `Point(x, y, z)` with six decimals per coordinate.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

/// Fixed-point coordinate matching C's `%f`.
struct Fixed(f64);

impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let v = self.0;
        if v.is_nan() {
            f.write_str(if v.is_sign_negative() { "-nan" } else { "nan" })
        } else if v.is_infinite() {
            f.write_str(if v > 0.0 { "inf" } else { "-inf" })
        } else {
            write!(f, "{v:.6}")
        }
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Point({}, {}, {})",
            Fixed(self.x),
            Fixed(self.y),
            Fixed(self.z)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_origin() {
        assert_eq!(Point3::default(), Point3::ORIGIN);
    }

    #[test]
    fn renders_non_finite_like_printf() {
        let p = Point3::new(f64::NAN.copysign(1.0), f64::INFINITY, f64::NEG_INFINITY);
        assert_eq!(p.render(), "Point(nan, inf, -inf)");

        let p = Point3::new(f64::NAN.copysign(-1.0), 0.0, 0.0);
        assert_eq!(p.render(), "Point(-nan, 0.000000, 0.000000)");
    }

    #[test]
    fn renders_negative_zero_with_sign() {
        assert_eq!(
            Point3::new(-0.0, 0.0, 0.0).render(),
            "Point(-0.000000, 0.000000, 0.000000)"
        );
    }

    #[test]
    fn rounds_to_six_decimals() {
        let p = Point3::new(1.0 / 3.0, 2.5e-7, 1234567.0);
        assert_eq!(p.render(), "Point(0.333333, 0.000000, 1234567.000000)");
    }

    #[test]
    fn get_and_set_by_axis() {
        let mut p = Point3::default();
        for (i, axis) in Axis::ALL.into_iter().enumerate() {
            p.set(axis, i as f64 + 1.0);
        }
        assert_eq!(p, Point3::new(1.0, 2.0, 3.0));
        assert_eq!(p.get(Axis::Y), 2.0);
    }

    #[test]
    fn axis_lookup_by_name() {
        assert_eq!(Axis::from_name("z"), Some(Axis::Z));
        assert_eq!(Axis::from_name("X"), None);
    }
}

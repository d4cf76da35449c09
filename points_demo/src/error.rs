//! Error types for point construction.

use thiserror::Error;

use crate::geometry::Axis;

/// Result type alias for point operations.
pub type PointResult<T> = Result<T, PointError>;

/// Errors that can occur while building a point from untyped input.
#[derive(Debug, Error, PartialEq)]
pub enum PointError {
    /// A coordinate value could not be interpreted as an `f64`.
    #[error("cannot convert {axis} coordinate to float: {detail}")]
    Conversion { axis: Axis, detail: String },
}

impl PointError {
    /// Create a conversion error for `axis`.
    #[must_use]
    pub fn conversion(axis: Axis, detail: impl Into<String>) -> Self {
        let err = Self::Conversion {
            axis,
            detail: detail.into(),
        };
        log::debug!("{err}");
        err
    }
}

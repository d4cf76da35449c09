use points_demo::{Axis, Point3, PointError, PointResult};
use pyo3::create_exception;
use pyo3::exceptions::PyTypeError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

create_exception!(
    point,
    ConversionError,
    PyTypeError,
    "Raised when a coordinate value cannot be converted to float."
);

fn to_py_err(err: PointError) -> PyErr {
    ConversionError::new_err(err.to_string())
}

/// Converts `value` with the interpreter's float conversion, so ints, bools
/// and objects defining `__float__` or `__index__` are accepted.
fn coordinate(axis: Axis, value: &Bound<'_, PyAny>) -> PointResult<f64> {
    value
        .extract::<f64>()
        .map_err(|e| PointError::conversion(axis, e.value_bound(value.py()).to_string()))
}

/// Point with mutable x, y and z coordinates.
///
/// Examples
/// --------
/// Create a point.
///
/// >>> from point import Point
/// >>> point = Point()
/// >>> point
/// Point(0.000000, 0.000000, 0.000000)
///
/// Modify the x coordinate.
///
/// >>> point.x = 2.0
/// >>> point.x
/// 2.0
///
/// Initialize with non-default coordinates.
///
/// >>> point = Point(x=2.0, y=-1.0, z=4.0)
/// >>> point
/// Point(2.000000, -1.000000, 4.000000)
///
/// Clear the point.
///
/// >>> point.clear()
/// >>> point
/// Point(0.000000, 0.000000, 0.000000)
#[pyclass(name = "Point", module = "point", subclass)]
#[derive(Clone)]
struct Point {
    inner: Point3,
}

#[pymethods]
impl Point {
    #[new]
    #[pyo3(signature = (**kwargs), text_signature = "(*, x=0.0, y=0.0, z=0.0)")]
    fn new(kwargs: Option<&Bound<'_, PyDict>>) -> PyResult<Self> {
        let mut inner = Point3::ORIGIN;
        if let Some(kwargs) = kwargs {
            for (key, value) in kwargs.iter() {
                let name: String = key.extract()?;
                let axis = Axis::from_name(&name).ok_or_else(|| {
                    PyTypeError::new_err(format!(
                        "'{name}' is an invalid keyword argument for Point()"
                    ))
                })?;
                inner.set(axis, coordinate(axis, &value).map_err(to_py_err)?);
            }
        }
        Ok(Self { inner })
    }

    /// X Position.
    #[getter]
    fn x(&self) -> f64 {
        self.inner.x
    }

    #[setter]
    fn set_x(&mut self, value: Option<&Bound<'_, PyAny>>) -> PyResult<()> {
        self.assign(Axis::X, value)
    }

    /// Y Position.
    #[getter]
    fn y(&self) -> f64 {
        self.inner.y
    }

    #[setter]
    fn set_y(&mut self, value: Option<&Bound<'_, PyAny>>) -> PyResult<()> {
        self.assign(Axis::Y, value)
    }

    /// Z Position.
    #[getter]
    fn z(&self) -> f64 {
        self.inner.z
    }

    #[setter]
    fn set_z(&mut self, value: Option<&Bound<'_, PyAny>>) -> PyResult<()> {
        self.assign(Axis::Z, value)
    }

    /// Clear the point, effectively setting it to (0.0, 0.0, 0.0).
    fn clear(&mut self) {
        self.inner.clear();
    }

    fn __repr__(&self) -> String {
        self.inner.render()
    }
}

impl Point {
    /// `None` is attribute deletion, which a plain double member refuses.
    fn assign(&mut self, axis: Axis, value: Option<&Bound<'_, PyAny>>) -> PyResult<()> {
        let value =
            value.ok_or_else(|| PyTypeError::new_err("can't delete numeric/char attribute"))?;
        let v = coordinate(axis, value).map_err(to_py_err)?;
        self.inner.set(axis, v);
        Ok(())
    }
}

/// Example point module that contains the Point class.
#[pymodule]
fn point(m: &Bound<'_, PyModule>) -> PyResult<()> {
    points_demo::logging::init();
    log::debug!("initialising module point");
    m.add_class::<Point>()?;
    m.add("ConversionError", m.py().get_type_bound::<ConversionError>())?;
    Ok(())
}

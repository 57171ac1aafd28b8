//! Axes that translate between scene positions and plotted values.

use std::sync::Arc;

use psurf_core::Result;
use psurf_math::Point3;
use psurf_scale::{LinearBase, ScaleFunction};

/// What value-based coloring needs from a set of axes.
pub trait ValueAxis {
    /// `(min, max)` of the values shown along the z axis.
    fn z_range(&self) -> (f64, f64);

    /// Value coordinates of a scene position.
    fn point_to_coords(&self, point: Point3) -> Point3;
}

/// One axis: a plotted range laid out `unit_size` scene units per step, with
/// an optional non-linear scale.
///
/// `range` is in plotted (pre-scale) units. Plotted coordinate 0 sits at the
/// axes origin whatever the range, so value 0 on a linear axis (and value 1 on
/// a log axis) maps to the origin. Positions map back to values through
/// [`ScaleFunction::function`].
#[derive(Debug, Clone)]
pub struct NumberAxis {
    pub range: (f64, f64),
    pub unit_size: f64,
    scaling: Arc<dyn ScaleFunction>,
}

impl NumberAxis {
    pub fn new(range: (f64, f64), unit_size: f64) -> Self {
        Self {
            range,
            unit_size,
            scaling: Arc::new(LinearBase::default()),
        }
    }

    pub fn with_scaling(self, scaling: impl ScaleFunction + 'static) -> Self {
        Self {
            scaling: Arc::new(scaling),
            ..self
        }
    }

    pub fn scaling(&self) -> &dyn ScaleFunction {
        self.scaling.as_ref()
    }

    /// Offset from the origin, in scene units, of `value`.
    pub fn number_to_offset(&self, value: f64) -> Result<f64> {
        Ok(self.scaling.inverse_function(value)? * self.unit_size)
    }

    /// Value at `offset` scene units from the origin.
    pub fn offset_to_number(&self, offset: f64) -> f64 {
        self.scaling.function(offset / self.unit_size)
    }

    /// `(min, max)` in value units.
    pub fn value_range(&self) -> (f64, f64) {
        (self.scaling.function(self.range.0), self.scaling.function(self.range.1))
    }
}

/// Three perpendicular axes crossing at `origin`.
#[derive(Debug, Clone)]
pub struct Axes3 {
    pub origin: Point3,
    pub x: NumberAxis,
    pub y: NumberAxis,
    pub z: NumberAxis,
}

impl Axes3 {
    pub fn new(origin: Point3, x: NumberAxis, y: NumberAxis, z: NumberAxis) -> Self {
        Self { origin, x, y, z }
    }

    /// Scene position of value coordinates.
    pub fn coords_to_point(&self, coords: Point3) -> Result<Point3> {
        Ok(self.origin
            + Point3::new(
                self.x.number_to_offset(coords.x)?,
                self.y.number_to_offset(coords.y)?,
                self.z.number_to_offset(coords.z)?,
            ))
    }
}

impl ValueAxis for Axes3 {
    fn z_range(&self) -> (f64, f64) {
        self.z.value_range()
    }

    fn point_to_coords(&self, point: Point3) -> Point3 {
        let offset = point - self.origin;
        Point3::new(
            self.x.offset_to_number(offset.x),
            self.y.offset_to_number(offset.y),
            self.z.offset_to_number(offset.z),
        )
    }
}

//! Shared, immutable storage for a surface's point buffer.

use std::sync::Arc;

use psurf_core::{PsurfError, Result};
use psurf_math::Point3;

/// Base points followed by the u-nudged and v-nudged points, three equal
/// thirds laid out row-major over `(u, v)`.
///
/// Clones share storage and the buffer is never mutated in place; operations
/// that change points build a new buffer.
#[derive(Debug, Clone, Default)]
pub struct PointBuffer {
    data: Arc<Vec<Point3>>,
}

impl PointBuffer {
    /// Fails if `points` cannot be split into three equal arrays.
    pub fn new(points: Vec<Point3>) -> Result<Self> {
        if points.len() % 3 != 0 {
            return Err(PsurfError::InvalidOperation(format!(
                "point buffer length {} is not a multiple of 3",
                points.len()
            )));
        }
        Ok(Self {
            data: Arc::new(points),
        })
    }

    /// Concatenate base, u-nudged and v-nudged arrays.
    pub fn from_parts(base: &[Point3], du: &[Point3], dv: &[Point3]) -> Result<Self> {
        for nudged in [du, dv] {
            if nudged.len() != base.len() {
                return Err(PsurfError::ShapeMismatch {
                    expected: base.len(),
                    actual: nudged.len(),
                });
            }
        }
        let mut points = Vec::with_capacity(base.len() * 3);
        points.extend_from_slice(base);
        points.extend_from_slice(du);
        points.extend_from_slice(dv);
        Ok(Self {
            data: Arc::new(points),
        })
    }

    pub fn as_slice(&self) -> &[Point3] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of base-grid vertices (one third of the buffer).
    pub fn vertex_count(&self) -> usize {
        self.data.len() / 3
    }

    /// `(base, u_nudged, v_nudged)`.
    pub fn split(&self) -> (&[Point3], &[Point3], &[Point3]) {
        let k = self.vertex_count();
        (&self.data[..k], &self.data[k..2 * k], &self.data[2 * k..])
    }

    pub fn surface_points(&self) -> &[Point3] {
        self.split().0
    }

    /// Whether both buffers refer to the same allocation.
    pub fn shares_storage(&self, other: &PointBuffer) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}

//! Geometry shared by plain and textured surfaces.

use std::sync::Arc;

use log::debug;
use psurf_core::{PsurfError, Result, Tolerance, Validate};
use psurf_math::{Aabb3, Point3, Vector3};

use crate::buffer::PointBuffer;
use crate::config::{Axis, Resolution};
use crate::depth_sort::sort_faces_back_to_front;
use crate::function::SurfaceDefinition;
use crate::normals::unit_normals;
use crate::partial::{check_interval, is_full_interval, partial_points};
use crate::sample::sample_grid;
use crate::triangulate::{check_index_range, triangle_indices};

/// Sampled grid, triangle indices and the definition they came from.
///
/// Instead of normals, the point buffer keeps the nudged samples alongside the
/// base samples, so normals stay recoverable after any manipulation of the
/// points.
#[derive(Debug, Clone)]
pub struct SurfaceCore {
    definition: Arc<SurfaceDefinition>,
    points: PointBuffer,
    triangle_indices: Vec<u32>,
    preferred_creation_axis: Axis,
    tolerance: Tolerance,
    points_locked: bool,
}

impl SurfaceCore {
    /// Sample `definition` and triangulate its grid.
    pub fn sample(
        definition: SurfaceDefinition,
        preferred_creation_axis: Axis,
        tolerance: Tolerance,
    ) -> Result<Self> {
        check_index_range(definition.resolution)?;
        let points = PointBuffer::new(sample_grid(&definition)?)?;
        Ok(Self {
            triangle_indices: triangle_indices(definition.resolution),
            definition: Arc::new(definition),
            points,
            preferred_creation_axis,
            tolerance,
            points_locked: false,
        })
    }

    /// A core referring to `other`'s definition and points without copying them.
    pub fn sharing(other: &SurfaceCore) -> Self {
        Self {
            definition: Arc::clone(&other.definition),
            points: other.points.clone(),
            triangle_indices: triangle_indices(other.resolution()),
            preferred_creation_axis: other.preferred_creation_axis,
            tolerance: other.tolerance,
            points_locked: false,
        }
    }

    pub fn definition(&self) -> &Arc<SurfaceDefinition> {
        &self.definition
    }

    pub fn resolution(&self) -> Resolution {
        self.definition.resolution
    }

    pub fn u_range(&self) -> (f64, f64) {
        self.definition.u_range
    }

    pub fn v_range(&self) -> (f64, f64) {
        self.definition.v_range
    }

    pub fn epsilon(&self) -> f64 {
        self.definition.epsilon
    }

    pub fn vertex_count(&self) -> usize {
        self.resolution().vertex_count()
    }

    /// Resample the grid at a new resolution and rebuild the triangle indices.
    pub fn set_resolution(&mut self, resolution: Resolution) -> Result<()> {
        check_index_range(resolution)?;
        let mut definition = SurfaceDefinition::clone(&self.definition);
        definition.resolution = resolution;
        let points = PointBuffer::new(sample_grid(&definition)?)?;

        debug!(
            "resolution changed {:?} -> {:?}",
            self.definition.resolution, resolution
        );
        self.definition = Arc::new(definition);
        self.points = points;
        self.triangle_indices = triangle_indices(resolution);
        Ok(())
    }

    pub fn points(&self) -> &PointBuffer {
        &self.points
    }

    /// Replace the point buffer; it must hold three grids of this resolution.
    pub fn set_points(&mut self, points: PointBuffer) -> Result<()> {
        let expected = 3 * self.vertex_count();
        if points.len() != expected {
            return Err(PsurfError::ShapeMismatch {
                expected,
                actual: points.len(),
            });
        }
        self.points = points;
        Ok(())
    }

    /// Share `other`'s points without copying.
    pub fn match_points(&mut self, other: &SurfaceCore) -> Result<()> {
        self.set_points(other.points.clone())
    }

    /// `(base, u_nudged, v_nudged)` point arrays.
    pub fn surface_points_and_nudged_points(&self) -> (&[Point3], &[Point3], &[Point3]) {
        self.points.split()
    }

    pub fn unit_normals(&self) -> Vec<Vector3> {
        let (base, du, dv) = self.points.split();
        unit_normals(base, du, dv, self.epsilon(), self.tolerance)
    }

    pub fn triangle_indices(&self) -> &[u32] {
        &self.triangle_indices
    }

    /// Restore the row-major triangulation, undoing any depth sort.
    pub fn compute_triangle_indices(&mut self) {
        self.triangle_indices = triangle_indices(self.resolution());
    }

    /// Reorder triangles by ascending depth along `direction`.
    pub fn sort_faces_back_to_front(&mut self, direction: Vector3) -> Result<()> {
        sort_faces_back_to_front(&mut self.triangle_indices, self.points.as_slice(), direction)
    }

    /// Become the `[a, b]` portion of `source` along `axis` (or the preferred
    /// creation axis). `source` is never modified.
    pub fn become_partial(
        &mut self,
        source: &SurfaceCore,
        a: f64,
        b: f64,
        axis: Option<Axis>,
    ) -> Result<()> {
        check_interval(a, b)?;
        if source.resolution() != self.resolution() {
            return Err(PsurfError::ShapeMismatch {
                expected: self.vertex_count(),
                actual: source.vertex_count(),
            });
        }
        if is_full_interval(a, b) {
            return self.match_points(source);
        }
        let axis = axis.unwrap_or(self.preferred_creation_axis);
        let points = partial_points(&source.points, source.resolution(), a, b, axis)?;
        self.set_points(points)
    }

    pub fn preferred_creation_axis(&self) -> Axis {
        self.preferred_creation_axis
    }

    pub fn set_preferred_creation_axis(&mut self, axis: Axis) {
        self.preferred_creation_axis = axis;
    }

    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// Mark the points as unchanged so renderers can skip re-uploading them.
    pub fn lock_points(&mut self) {
        self.points_locked = true;
    }

    pub fn unlock_points(&mut self) {
        self.points_locked = false;
    }

    pub fn points_locked(&self) -> bool {
        self.points_locked
    }

    /// Bounding box of the base points.
    pub fn bounding_box(&self) -> Option<Aabb3> {
        Aabb3::from_points(self.points.surface_points())
    }

    /// Center of the bounding box of the base points.
    pub fn midpoint(&self) -> Option<Point3> {
        self.bounding_box().map(|bb| bb.center())
    }
}

impl Validate for SurfaceCore {
    fn validate(&self) -> Result<()> {
        let expected = 3 * self.vertex_count();
        if self.points.len() != expected {
            return Err(PsurfError::ShapeMismatch {
                expected,
                actual: self.points.len(),
            });
        }
        let index_count = 6 * self.resolution().cell_count();
        if self.triangle_indices.len() != index_count {
            return Err(PsurfError::ShapeMismatch {
                expected: index_count,
                actual: self.triangle_indices.len(),
            });
        }
        Ok(())
    }
}

//! Back-to-front ordering of triangles for alpha blending.

use log::trace;
use psurf_core::{PsurfError, Result};
use psurf_math::{Point3, Vector3};

/// Reorder whole triangles by ascending `dot(first vertex, direction)`.
///
/// Each triangle keeps its internal vertex order. The sort is stable, so
/// triangles with equal keys keep their relative order.
pub fn sort_faces_back_to_front(
    indices: &mut [u32],
    points: &[Point3],
    direction: Vector3,
) -> Result<()> {
    let mut keyed = Vec::with_capacity(indices.len() / 3);
    for tri in indices.chunks_exact(3) {
        let first = points.get(tri[0] as usize).ok_or(PsurfError::ShapeMismatch {
            expected: tri[0] as usize + 1,
            actual: points.len(),
        })?;
        keyed.push((first.dot(direction), [tri[0], tri[1], tri[2]]));
    }
    keyed.sort_by(|a, b| a.0.total_cmp(&b.0));

    for (slot, (_, tri)) in indices.chunks_exact_mut(3).zip(&keyed) {
        slot.copy_from_slice(tri);
    }
    trace!("depth sorted {} triangles along {:?}", keyed.len(), direction);
    Ok(())
}

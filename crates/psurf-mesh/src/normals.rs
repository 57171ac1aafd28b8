//! Finite-difference normals from nudged point grids.

use log::warn;
use psurf_core::Tolerance;
use psurf_math::{Point3, Vector3};

/// Unit normal per vertex:
/// `normalize(((du - p) / epsilon) x ((dv - p) / epsilon))`.
///
/// Where the cross product is degenerate the normal is the zero vector.
/// Extra entries in a longer nudged array are ignored.
pub fn unit_normals(
    points: &[Point3],
    du_points: &[Point3],
    dv_points: &[Point3],
    epsilon: f64,
    tolerance: Tolerance,
) -> Vec<Vector3> {
    let mut degenerate = 0usize;
    let normals: Vec<Vector3> = points
        .iter()
        .zip(du_points)
        .zip(dv_points)
        .map(|((&p, &du), &dv)| {
            let tangent_u = (du - p) / epsilon;
            let tangent_v = (dv - p) / epsilon;
            let n = tangent_u.cross(tangent_v);
            let len = n.length();
            if tolerance.is_degenerate(len) {
                degenerate += 1;
                Vector3::ZERO
            } else {
                n / len
            }
        })
        .collect();

    if degenerate > 0 {
        warn!(
            "{} of {} surface normals are degenerate",
            degenerate,
            normals.len()
        );
    }
    normals
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_grid_normals() {
        let eps = 1e-3;
        let p = [Point3::new(0.0, 0.0, 2.0), Point3::new(3.0, -1.0, 2.0)];
        let du: Vec<Point3> = p.iter().map(|&q| q + Vector3::new(eps, 0.0, 0.0)).collect();
        let dv: Vec<Point3> = p.iter().map(|&q| q + Vector3::new(0.0, eps, 0.0)).collect();
        let normals = unit_normals(&p, &du, &dv, eps, Tolerance::default());
        for n in normals {
            assert!((n - Vector3::Z).length() < 1e-9, "got {n:?}");
        }
    }

    #[test]
    fn test_swapped_tangents_flip_normal() {
        let p = [Point3::ZERO];
        let du = [Point3::new(0.0, 0.1, 0.0)];
        let dv = [Point3::new(0.1, 0.0, 0.0)];
        let normals = unit_normals(&p, &du, &dv, 0.1, Tolerance::default());
        assert!((normals[0] - Vector3::NEG_Z).length() < 1e-12);
    }

    #[test]
    fn test_degenerate_normal_is_zero() {
        let p = [Point3::ONE];
        let normals = unit_normals(&p, &p, &p, 1e-5, Tolerance::default());
        assert_eq!(normals, vec![Vector3::ZERO]);
    }
}

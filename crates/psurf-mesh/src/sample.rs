//! Grid sampling of a parametric function.

use log::debug;
use psurf_core::{PsurfError, Result};
use psurf_math::{linspace, Point3};

use crate::function::SurfaceDefinition;

/// Evaluate the definition on its `(nu, nv)` grid three times: at `(u, v)`,
/// at `(u + epsilon, v)` and at `(u, v + epsilon)`.
///
/// Returns the three grids concatenated in that order, each row-major with `u`
/// as the outer axis. Fails with [`PsurfError::InvalidSample`] at the first
/// sample where the function is undefined.
pub fn sample_grid(definition: &SurfaceDefinition) -> Result<Vec<Point3>> {
    let res = definition.resolution;
    let us = linspace(definition.u_range.0, definition.u_range.1, res.nu);
    let vs = linspace(definition.v_range.0, definition.v_range.1, res.nv);
    let eps = definition.epsilon;

    let mut points = Vec::with_capacity(3 * res.vertex_count());
    for (du, dv) in [(0.0, 0.0), (eps, 0.0), (0.0, eps)] {
        for &u in &us {
            for &v in &vs {
                let (su, sv) = (u + du, v + dv);
                let p = definition.point_at(su, sv);
                if !p.is_finite() {
                    return Err(PsurfError::InvalidSample { u: su, v: sv });
                }
                points.push(p);
            }
        }
    }

    debug!(
        "sampled {}x{} grid ({} points incl. nudged)",
        res.nu,
        res.nv,
        points.len()
    );
    Ok(points)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::config::Resolution;
    use crate::function::IdentityPlane;

    fn definition(res: Resolution) -> SurfaceDefinition {
        SurfaceDefinition::new(Arc::new(IdentityPlane), (0.0, 1.0), (0.0, 2.0), res, 0.25)
    }

    #[test]
    fn test_sample_layout() {
        let points = sample_grid(&definition(Resolution::new(2, 3))).unwrap();
        assert_eq!(points.len(), 18);

        // u outer, v inner
        assert_eq!(points[0], Point3::new(0.0, 0.0, 0.0));
        assert_eq!(points[1], Point3::new(0.0, 1.0, 0.0));
        assert_eq!(points[2], Point3::new(0.0, 2.0, 0.0));
        assert_eq!(points[3], Point3::new(1.0, 0.0, 0.0));

        // u-nudged third
        assert_eq!(points[6], Point3::new(0.25, 0.0, 0.0));
        assert_eq!(points[11], Point3::new(1.25, 2.0, 0.0));

        // v-nudged third
        assert_eq!(points[12], Point3::new(0.0, 0.25, 0.0));
        assert_eq!(points[17], Point3::new(1.0, 2.25, 0.0));
    }

    #[test]
    fn test_empty_resolution() {
        let points = sample_grid(&definition(Resolution::new(0, 5))).unwrap();
        assert!(points.is_empty());
    }

    #[test]
    fn test_undefined_sample_propagates() {
        let def = SurfaceDefinition::new(
            Arc::new(|u: f64, v: f64| Point3::new(u, v, (u - 0.5).ln())),
            (0.0, 1.0),
            (0.0, 1.0),
            Resolution::new(3, 3),
            1e-5,
        );
        match sample_grid(&def) {
            Err(PsurfError::InvalidSample { u, v }) => {
                assert_eq!(u, 0.0);
                assert_eq!(v, 0.0);
            }
            other => panic!("expected InvalidSample, got {other:?}"),
        }
    }
}

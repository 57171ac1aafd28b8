//! The parametric function behind a surface and the definition that pairs it
//! with its sampling domain.

use std::fmt;
use std::sync::Arc;

use psurf_math::Point3;

use crate::config::Resolution;

/// A map from parameter space `(u, v)` to 3D space.
///
/// Any `Fn(f64, f64) -> Point3` closure qualifies. A sample whose coordinates
/// are not finite is treated as undefined.
pub trait UvFunction: Send + Sync {
    fn point_at(&self, u: f64, v: f64) -> Point3;
}

impl<F> UvFunction for F
where
    F: Fn(f64, f64) -> Point3 + Send + Sync,
{
    fn point_at(&self, u: f64, v: f64) -> Point3 {
        self(u, v)
    }
}

/// The flat `(u, v, 0)` map used when no function is supplied.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityPlane;

impl UvFunction for IdentityPlane {
    fn point_at(&self, u: f64, v: f64) -> Point3 {
        Point3::new(u, v, 0.0)
    }
}

/// Everything needed to (re)sample a surface grid.
///
/// Textured surfaces hold the same `Arc<SurfaceDefinition>` as their base.
#[derive(Clone)]
pub struct SurfaceDefinition {
    pub(crate) uv_func: Arc<dyn UvFunction>,
    pub u_range: (f64, f64),
    pub v_range: (f64, f64),
    pub resolution: Resolution,
    pub epsilon: f64,
}

impl SurfaceDefinition {
    pub fn new(
        uv_func: Arc<dyn UvFunction>,
        u_range: (f64, f64),
        v_range: (f64, f64),
        resolution: Resolution,
        epsilon: f64,
    ) -> Self {
        Self {
            uv_func,
            u_range,
            v_range,
            resolution,
            epsilon,
        }
    }

    pub fn uv_func(&self) -> &Arc<dyn UvFunction> {
        &self.uv_func
    }

    pub fn point_at(&self, u: f64, v: f64) -> Point3 {
        self.uv_func.point_at(u, v)
    }
}

impl fmt::Debug for SurfaceDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SurfaceDefinition")
            .field("u_range", &self.u_range)
            .field("v_range", &self.v_range)
            .field("resolution", &self.resolution)
            .field("epsilon", &self.epsilon)
            .finish_non_exhaustive()
    }
}

//! Construction-time configuration for surfaces.

use psurf_core::Tolerance;
use psurf_math::Rgba;
use serde::{Deserialize, Serialize};

/// Sample counts `(nu, nv)` along each parameter axis.
///
/// Each count is one more than the number of mesh cells along that axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Resolution {
    pub nu: usize,
    pub nv: usize,
}

impl Resolution {
    pub const EMPTY: Resolution = Resolution { nu: 0, nv: 0 };

    pub const fn new(nu: usize, nv: usize) -> Self {
        Self { nu, nv }
    }

    /// Number of base-grid vertices.
    pub fn vertex_count(self) -> usize {
        self.nu * self.nv
    }

    /// Number of quads in the mesh.
    pub fn cell_count(self) -> usize {
        self.nu.saturating_sub(1) * self.nv.saturating_sub(1)
    }

    pub fn is_empty(self) -> bool {
        self.nu == 0 || self.nv == 0
    }

    /// Sample count along `axis`.
    pub fn along(self, axis: Axis) -> usize {
        match axis {
            Axis::U => self.nu,
            Axis::V => self.nv,
        }
    }
}

impl From<(usize, usize)> for Resolution {
    fn from((nu, nv): (usize, usize)) -> Self {
        Self::new(nu, nv)
    }
}

impl Default for Resolution {
    fn default() -> Self {
        Self::new(101, 101)
    }
}

/// A parameter axis of the surface grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    U,
    V,
}

/// Parameters shared by every parametric surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceConfig {
    pub u_range: (f64, f64),
    pub v_range: (f64, f64),
    pub resolution: Resolution,
    /// Parameter step for the nudged grids. Much smaller and numerical error
    /// shows up in the shaded normals.
    pub epsilon: f64,
    pub color: Rgba,
    pub opacity: f64,
    pub gloss: f64,
    pub shadow: f64,
    pub preferred_creation_axis: Axis,
    pub tolerance: Tolerance,
}

impl SurfaceConfig {
    pub fn with_ranges(self, u_range: (f64, f64), v_range: (f64, f64)) -> Self {
        Self {
            u_range,
            v_range,
            ..self
        }
    }

    pub fn with_resolution(self, resolution: impl Into<Resolution>) -> Self {
        Self {
            resolution: resolution.into(),
            ..self
        }
    }

    pub fn with_color(self, color: Rgba) -> Self {
        Self { color, ..self }
    }

    pub fn with_opacity(self, opacity: f64) -> Self {
        Self { opacity, ..self }
    }
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            u_range: (0.0, 1.0),
            v_range: (0.0, 1.0),
            resolution: Resolution::default(),
            epsilon: 1e-5,
            color: Rgba::GREY,
            opacity: 1.0,
            gloss: 0.3,
            shadow: 0.4,
            preferred_creation_axis: Axis::V,
            tolerance: Tolerance::default(),
        }
    }
}

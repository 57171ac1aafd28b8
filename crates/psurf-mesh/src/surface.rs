//! Plain parametric surfaces with per-vertex color.

use std::sync::Arc;

use psurf_core::{Result, Validate};
use psurf_math::{Rgba, Vector3};

use crate::attributes::{check_attribute_len, Opacity};
use crate::config::{Axis, Resolution, SurfaceConfig};
use crate::geometry::SurfaceCore;
use crate::function::{IdentityPlane, SurfaceDefinition, UvFunction};

/// A mesh sampled from a parametric function, colored per vertex.
#[derive(Debug, Clone)]
pub struct ParametricSurface {
    core: SurfaceCore,
    rgbas: Vec<Rgba>,
    gloss: f64,
    shadow: f64,
}

impl ParametricSurface {
    /// Sample `uv_func` according to `config`.
    pub fn new(uv_func: impl UvFunction + 'static, config: SurfaceConfig) -> Result<Self> {
        Self::from_shared(Arc::new(uv_func), config)
    }

    /// The flat `(u, v, 0)` surface over the configured ranges.
    pub fn plane(config: SurfaceConfig) -> Result<Self> {
        Self::new(IdentityPlane, config)
    }

    /// Like [`ParametricSurface::new`] for a function that is already shared.
    pub fn from_shared(uv_func: Arc<dyn UvFunction>, config: SurfaceConfig) -> Result<Self> {
        let definition = SurfaceDefinition::new(
            uv_func,
            config.u_range,
            config.v_range,
            config.resolution,
            config.epsilon,
        );
        Ok(Self {
            core: SurfaceCore::sample(definition, config.preferred_creation_axis, config.tolerance)?,
            rgbas: vec![config.color.with_alpha(config.opacity)],
            gloss: config.gloss,
            shadow: config.shadow,
        })
    }

    pub fn core(&self) -> &SurfaceCore {
        &self.core
    }

    /// Mark the points as unchanged since the last upload.
    pub fn lock_points(&mut self) {
        self.core.lock_points();
    }

    pub fn unlock_points(&mut self) {
        self.core.unlock_points();
    }

    pub fn sort_faces_back_to_front(&mut self, direction: Vector3) -> Result<()> {
        self.core.sort_faces_back_to_front(direction)
    }

    pub fn resolution(&self) -> Resolution {
        self.core.resolution()
    }

    pub fn vertex_count(&self) -> usize {
        self.core.vertex_count()
    }

    pub fn triangle_indices(&self) -> &[u32] {
        self.core.triangle_indices()
    }

    pub fn unit_normals(&self) -> Vec<Vector3> {
        self.core.unit_normals()
    }

    /// Resample at a new resolution.
    ///
    /// Per-vertex colors no longer line up with the new grid, so they collapse
    /// to the first color.
    pub fn set_resolution(&mut self, resolution: impl Into<Resolution>) -> Result<()> {
        self.core.set_resolution(resolution.into())?;
        self.rgbas.truncate(1);
        Ok(())
    }

    /// Become the `[a, b]` portion of `source`; see [`SurfaceCore::become_partial`].
    pub fn become_partial(
        &mut self,
        source: &ParametricSurface,
        a: f64,
        b: f64,
        axis: Option<Axis>,
    ) -> Result<()> {
        self.core.become_partial(&source.core, a, b, axis)
    }

    pub fn rgbas(&self) -> &[Rgba] {
        &self.rgbas
    }

    /// Set colors, either one broadcast color or one per vertex.
    pub fn set_rgbas(&mut self, rgbas: Vec<Rgba>) -> Result<()> {
        check_attribute_len(rgbas.len(), self.vertex_count())?;
        self.rgbas = rgbas;
        Ok(())
    }

    /// Recolor every vertex, keeping each vertex's opacity.
    pub fn set_color(&mut self, color: Rgba) {
        for rgba in &mut self.rgbas {
            *rgba = color.with_alpha(rgba.a);
        }
    }

    /// Alpha channel of the stored colors.
    pub fn opacities(&self) -> Vec<f64> {
        self.rgbas.iter().map(|c| c.a).collect()
    }

    pub fn set_opacity(&mut self, opacity: &Opacity) -> Result<()> {
        let alphas = opacity.resolve(self.vertex_count())?;
        self.rgbas = match (self.rgbas.as_slice(), alphas.as_slice()) {
            ([color], _) => alphas.iter().map(|&a| color.with_alpha(a)).collect(),
            (colors, [alpha]) => colors.iter().map(|c| c.with_alpha(*alpha)).collect(),
            (colors, per_vertex) => colors
                .iter()
                .zip(per_vertex)
                .map(|(c, &a)| c.with_alpha(a))
                .collect(),
        };
        Ok(())
    }

    pub fn gloss(&self) -> f64 {
        self.gloss
    }

    pub fn shadow(&self) -> f64 {
        self.shadow
    }
}

impl Validate for ParametricSurface {
    fn validate(&self) -> Result<()> {
        self.core.validate()?;
        check_attribute_len(self.rgbas.len(), self.vertex_count())
    }
}

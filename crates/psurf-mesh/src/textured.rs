//! Image-textured surfaces layered over a plain parametric surface.

use std::path::PathBuf;

use log::debug;
use psurf_core::{PsurfError, Result, Validate};
use psurf_math::{linspace, Point2, Vector3};

use crate::attributes::{check_attribute_len, Opacity};
use crate::config::{Axis, Resolution};
use crate::geometry::SurfaceCore;
use crate::family::Surface;
use crate::image::ImageResolver;
use crate::partial::{check_interval, is_full_interval, partial_grid};
use crate::surface::ParametricSurface;

/// Resolved image files for the lit and unlit sides of a surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TexturePaths {
    pub light: PathBuf,
    pub dark: PathBuf,
}

/// A surface drawn with an image instead of vertex colors.
///
/// The geometry refers to the base surface's definition and point buffer; the
/// texture coordinates and per-vertex opacity belong to this surface alone.
#[derive(Debug, Clone)]
pub struct TexturedSurface {
    core: SurfaceCore,
    im_coords: Vec<Point2>,
    opacity: Vec<f64>,
    textures: TexturePaths,
    num_textures: u32,
    gloss: f64,
    shadow: f64,
}

impl TexturedSurface {
    /// Texture `uv_surface` with `image`, and optionally a separate image for
    /// the dark side.
    ///
    /// Fails with [`PsurfError::TypeMismatch`] unless `uv_surface` is a plain
    /// parametric surface.
    pub fn new(
        uv_surface: &Surface,
        image: &str,
        dark_image: Option<&str>,
        resolver: &dyn ImageResolver,
    ) -> Result<Self> {
        match uv_surface {
            Surface::Plain(base) => Self::from_plain(base, image, dark_image, resolver),
            other => Err(PsurfError::TypeMismatch(format!(
                "uv_surface must be a parametric surface, got {}",
                other.kind_name()
            ))),
        }
    }

    pub fn from_plain(
        base: &ParametricSurface,
        image: &str,
        dark_image: Option<&str>,
        resolver: &dyn ImageResolver,
    ) -> Result<Self> {
        let light = resolver.resolve(image)?;
        let (dark, num_textures) = match dark_image {
            Some(name) => (resolver.resolve(name)?, 2),
            None => (light.clone(), 1),
        };
        debug!(
            "texturing surface with {} (dark: {})",
            light.display(),
            dark.display()
        );

        let core = SurfaceCore::sharing(base.core());
        Ok(Self {
            im_coords: texture_coordinates(core.resolution()),
            core,
            opacity: base.opacities(),
            textures: TexturePaths { light, dark },
            num_textures,
            gloss: base.gloss(),
            shadow: base.shadow(),
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

    /// Resample at a new resolution, regenerating texture coordinates and
    /// collapsing per-vertex opacity to the first value.
    pub fn set_resolution(&mut self, resolution: impl Into<Resolution>) -> Result<()> {
        self.core.set_resolution(resolution.into())?;
        self.im_coords = texture_coordinates(self.core.resolution());
        self.opacity.truncate(1);
        Ok(())
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

    /// Texture coordinate per base-grid vertex.
    pub fn im_coords(&self) -> &[Point2] {
        &self.im_coords
    }

    /// One broadcast opacity or one per vertex.
    pub fn opacity(&self) -> &[f64] {
        &self.opacity
    }

    pub fn set_opacity(&mut self, opacity: &Opacity) -> Result<()> {
        self.opacity = opacity.resolve(self.vertex_count())?;
        Ok(())
    }

    pub fn textures(&self) -> &TexturePaths {
        &self.textures
    }

    /// 1 when light and dark sides share an image, 2 otherwise.
    pub fn num_textures(&self) -> u32 {
        self.num_textures
    }

    pub fn gloss(&self) -> f64 {
        self.gloss
    }

    pub fn shadow(&self) -> f64 {
        self.shadow
    }

    /// Become the `[a, b]` portion of `source`, revealing geometry and texture
    /// coordinates along the same axis so the image stays pinned to the mesh.
    pub fn become_partial(
        &mut self,
        source: &TexturedSurface,
        a: f64,
        b: f64,
        axis: Option<Axis>,
    ) -> Result<()> {
        check_interval(a, b)?;
        let axis = axis.unwrap_or(self.core.preferred_creation_axis());
        self.core.become_partial(&source.core, a, b, Some(axis))?;
        if is_full_interval(a, b) {
            self.im_coords = source.im_coords.clone();
            return Ok(());
        }
        self.im_coords = partial_grid(&source.im_coords, source.resolution(), a, b, axis)?;
        Ok(())
    }
}

impl Validate for TexturedSurface {
    fn validate(&self) -> Result<()> {
        self.core.validate()?;
        if self.im_coords.len() != self.vertex_count() {
            return Err(PsurfError::ShapeMismatch {
                expected: self.vertex_count(),
                actual: self.im_coords.len(),
            });
        }
        check_attribute_len(self.opacity.len(), self.vertex_count())
    }
}

/// `u` runs 0 to 1 across rows; `v` runs 1 to 0 across columns so image rows
/// go top to bottom as `v` increases.
pub fn texture_coordinates(resolution: Resolution) -> Vec<Point2> {
    let us = linspace(0.0, 1.0, resolution.nu);
    let vs = linspace(1.0, 0.0, resolution.nv);
    us.iter()
        .flat_map(|&u| vs.iter().map(move |&v| Point2::new(u, v)))
        .collect()
}

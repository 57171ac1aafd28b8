//! Geometry-free containers of surfaces.

use crate::config::Resolution;
use crate::family::Surface;

/// Groups child surfaces. A group has no points of its own; its resolution is
/// always `(0, 0)`.
#[derive(Debug, Clone, Default)]
pub struct SurfaceGroup {
    surfaces: Vec<Surface>,
}

impl SurfaceGroup {
    pub fn new(surfaces: Vec<Surface>) -> Self {
        Self { surfaces }
    }

    pub fn add(&mut self, surface: impl Into<Surface>) {
        self.surfaces.push(surface.into());
    }

    pub fn resolution(&self) -> Resolution {
        Resolution::EMPTY
    }

    pub fn children(&self) -> &[Surface] {
        &self.surfaces
    }

    pub fn children_mut(&mut self) -> &mut [Surface] {
        &mut self.surfaces
    }

    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }
}

impl FromIterator<Surface> for SurfaceGroup {
    fn from_iter<I: IntoIterator<Item = Surface>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

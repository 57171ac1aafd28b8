//! The surface variants and operations over a surface family.

use psurf_core::{PsurfError, Result, Validate};
use psurf_math::{Aabb3, Point3, Rgba, Vector3};

use crate::attributes::Opacity;
use crate::config::{Axis, Resolution};
use crate::group::SurfaceGroup;
use crate::surface::ParametricSurface;
use crate::textured::TexturedSurface;

/// Any surface the renderer can be handed.
#[derive(Debug, Clone)]
pub enum Surface {
    Plain(ParametricSurface),
    Textured(TexturedSurface),
    Group(SurfaceGroup),
}

impl Surface {
    pub fn kind_name(&self) -> &'static str {
        match self {
            Surface::Plain(_) => "parametric surface",
            Surface::Textured(_) => "textured surface",
            Surface::Group(_) => "surface group",
        }
    }

    pub fn resolution(&self) -> Resolution {
        match self {
            Surface::Plain(s) => s.resolution(),
            Surface::Textured(s) => s.resolution(),
            Surface::Group(g) => g.resolution(),
        }
    }

    /// Whether this surface itself (not its children) has points.
    pub fn has_points(&self) -> bool {
        match self {
            Surface::Plain(s) => !s.core().points().is_empty(),
            Surface::Textured(s) => !s.core().points().is_empty(),
            Surface::Group(_) => false,
        }
    }

    /// Depth-first list of this surface and its descendants that have points.
    pub fn family_members_with_points(&self) -> Vec<&Surface> {
        let mut members = Vec::new();
        self.collect_with_points(&mut members);
        members
    }

    fn collect_with_points<'a>(&'a self, out: &mut Vec<&'a Surface>) {
        match self {
            Surface::Group(group) => {
                for child in group.children() {
                    child.collect_with_points(out);
                }
            }
            leaf => {
                if leaf.has_points() {
                    out.push(leaf);
                }
            }
        }
    }

    pub fn family_members_with_points_mut(&mut self) -> Vec<&mut Surface> {
        let mut members = Vec::new();
        self.collect_with_points_mut(&mut members);
        members
    }

    fn collect_with_points_mut<'a>(&'a mut self, out: &mut Vec<&'a mut Surface>) {
        if let Surface::Group(group) = self {
            for child in group.children_mut() {
                child.collect_with_points_mut(out);
            }
        } else if self.has_points() {
            out.push(self);
        }
    }

    /// Recolor every plain surface in the family. Textured surfaces take their
    /// color from the image and are left alone.
    pub fn set_color(&mut self, color: Rgba) {
        match self {
            Surface::Plain(s) => s.set_color(color),
            Surface::Textured(_) => {}
            Surface::Group(g) => g.children_mut().iter_mut().for_each(|c| c.set_color(color)),
        }
    }

    /// Override opacity on this surface and, when `recurse` is set, on every
    /// descendant.
    pub fn set_opacity(&mut self, opacity: &Opacity, recurse: bool) -> Result<()> {
        match self {
            Surface::Plain(s) => s.set_opacity(opacity),
            Surface::Textured(s) => s.set_opacity(opacity),
            Surface::Group(g) if recurse => g
                .children_mut()
                .iter_mut()
                .try_for_each(|c| c.set_opacity(opacity, true)),
            Surface::Group(_) => Ok(()),
        }
    }

    /// Become the `[a, b]` portion of `source`, which must have the same
    /// variant (and, for groups, the same number of children).
    pub fn become_partial(
        &mut self,
        source: &Surface,
        a: f64,
        b: f64,
        axis: Option<Axis>,
    ) -> Result<()> {
        match (self, source) {
            (Surface::Plain(target), Surface::Plain(src)) => target.become_partial(src, a, b, axis),
            (Surface::Textured(target), Surface::Textured(src)) => {
                target.become_partial(src, a, b, axis)
            }
            (Surface::Group(target), Surface::Group(src)) => {
                if target.len() != src.len() {
                    return Err(PsurfError::ShapeMismatch {
                        expected: target.len(),
                        actual: src.len(),
                    });
                }
                target
                    .children_mut()
                    .iter_mut()
                    .zip(src.children())
                    .try_for_each(|(t, s)| t.become_partial(s, a, b, axis))
            }
            (target, src) => Err(PsurfError::TypeMismatch(format!(
                "cannot become part of a {} as a {}",
                src.kind_name(),
                target.kind_name()
            ))),
        }
    }

    /// Depth sort the triangles of every surface in the family.
    pub fn sort_faces_back_to_front(&mut self, direction: Vector3) -> Result<()> {
        for member in self.family_members_with_points_mut() {
            match member {
                Surface::Plain(s) => s.sort_faces_back_to_front(direction)?,
                Surface::Textured(s) => s.sort_faces_back_to_front(direction)?,
                Surface::Group(_) => {}
            }
        }
        Ok(())
    }

    /// Bounding box of the base points of every member.
    pub fn bounding_box(&self) -> Option<Aabb3> {
        self.family_members_with_points()
            .into_iter()
            .filter_map(|member| match member {
                Surface::Plain(s) => s.core().bounding_box(),
                Surface::Textured(s) => s.core().bounding_box(),
                Surface::Group(_) => None,
            })
            .reduce(|acc, bb| acc.merge(&bb))
    }

    pub fn midpoint(&self) -> Option<Point3> {
        self.bounding_box().map(|bb| bb.center())
    }
}

impl Validate for Surface {
    fn validate(&self) -> Result<()> {
        match self {
            Surface::Plain(s) => s.validate(),
            Surface::Textured(s) => s.validate(),
            Surface::Group(g) => g.children().iter().try_for_each(Validate::validate),
        }
    }
}

impl From<ParametricSurface> for Surface {
    fn from(surface: ParametricSurface) -> Self {
        Surface::Plain(surface)
    }
}

impl From<TexturedSurface> for Surface {
    fn from(surface: TexturedSurface) -> Self {
        Surface::Textured(surface)
    }
}

impl From<SurfaceGroup> for Surface {
    fn from(group: SurfaceGroup) -> Self {
        Surface::Group(group)
    }
}

//! psurf surface meshes.
//!
//! A [`ParametricSurface`] samples a function of `(u, v)` on a grid, keeping
//! nudged copies of every sample so normals can be recovered by finite
//! differences. The grid is triangulated once, can be partially revealed along
//! either parameter axis, and can be depth sorted for blending.
//! [`TexturedSurface`] reuses a plain surface's geometry with texture
//! coordinates instead of colors.

pub mod attributes;
pub mod axes;
pub mod buffer;
pub mod config;
pub mod depth_sort;
pub mod family;
pub mod fill;
pub mod function;
pub mod geometry;
pub mod group;
pub mod image;
pub mod normals;
pub mod partial;
pub mod sample;
pub mod shapes;
pub mod surface;
pub mod textured;
pub mod triangulate;

pub use attributes::Opacity;
pub use axes::{Axes3, NumberAxis, ValueAxis};
pub use buffer::PointBuffer;
pub use config::{Axis, Resolution, SurfaceConfig};
pub use geometry::SurfaceCore;
pub use family::Surface;
pub use fill::{value_to_color, ColorScheme};
pub use function::{IdentityPlane, SurfaceDefinition, UvFunction};
pub use group::SurfaceGroup;
pub use image::{AssetDirectories, ImageResolver};
pub use partial::partial_grid;
pub use surface::ParametricSurface;
pub use textured::{TexturePaths, TexturedSurface};
pub use triangulate::triangle_indices;

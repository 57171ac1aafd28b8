//! psurf math primitives.

pub mod aabb;
pub mod color;
pub mod interpolate;

pub use glam::{DVec2, DVec3};
pub use aabb::Aabb3;
pub use color::Rgba;
pub use interpolate::{integer_interpolate, interpolate, linspace, Lerp};

pub type Point2 = DVec2;
pub type Point3 = DVec3;
pub type Vector3 = DVec3;

/// Unit vector pointing out of the screen, the default viewing direction.
pub const OUT: Vector3 = DVec3::Z;
/// Unit vector pointing into the screen.
pub const IN: Vector3 = DVec3::NEG_Z;

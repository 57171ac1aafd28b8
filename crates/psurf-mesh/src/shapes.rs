//! Ready-made parametric functions with their natural parameter domains.

use std::f64::consts::{PI, TAU};

use psurf_math::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::config::SurfaceConfig;
use crate::function::UvFunction;

/// `origin + u * u_axis + v * v_axis`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    pub origin: Point3,
    pub u_axis: Vector3,
    pub v_axis: Vector3,
}

impl Plane {
    pub fn new(origin: Point3, u_axis: Vector3, v_axis: Vector3) -> Self {
        Self {
            origin,
            u_axis,
            v_axis,
        }
    }

    pub fn xy() -> Self {
        Self::new(Point3::ZERO, Vector3::X, Vector3::Y)
    }
}

impl UvFunction for Plane {
    fn point_at(&self, u: f64, v: f64) -> Point3 {
        self.origin + u * self.u_axis + v * self.v_axis
    }
}

/// Sphere swept by longitude `u` in `[0, 2pi]` and polar angle `v` in
/// `[0, pi]`, starting at the south pole.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sphere {
    pub center: Point3,
    pub radius: f64,
}

impl Sphere {
    pub fn new(center: Point3, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Default configuration with the sphere's parameter domain.
    pub fn config(&self) -> SurfaceConfig {
        SurfaceConfig::default().with_ranges((0.0, TAU), (0.0, PI))
    }
}

impl UvFunction for Sphere {
    fn point_at(&self, u: f64, v: f64) -> Point3 {
        self.center
            + self.radius * Vector3::new(u.cos() * v.sin(), u.sin() * v.sin(), -v.cos())
    }
}

/// Torus around the z axis: `u` walks the ring, `v` walks the tube.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Torus {
    pub center: Point3,
    pub major_radius: f64,
    pub minor_radius: f64,
}

impl Torus {
    pub fn new(center: Point3, major_radius: f64, minor_radius: f64) -> Self {
        Self {
            center,
            major_radius,
            minor_radius,
        }
    }

    /// Default configuration with both angles over `[0, 2pi]`.
    pub fn config(&self) -> SurfaceConfig {
        SurfaceConfig::default().with_ranges((0.0, TAU), (0.0, TAU))
    }
}

impl UvFunction for Torus {
    fn point_at(&self, u: f64, v: f64) -> Point3 {
        let radial = Vector3::new(u.cos(), u.sin(), 0.0);
        let tube_center = self.major_radius * radial;
        self.center + tube_center + self.minor_radius * (v.cos() * radial + v.sin() * Vector3::Z)
    }
}

//! RGBA colors as stored per vertex on surfaces.

use serde::{Deserialize, Serialize};

use crate::interpolate::Lerp;

/// Linear RGBA color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Rgba = Rgba::rgb(0.0, 0.0, 0.0);
    pub const GREY: Rgba = Rgba::rgb(0x88 as f64 / 255.0, 0x88 as f64 / 255.0, 0x88 as f64 / 255.0);
    pub const RED: Rgba = Rgba::rgb(0xFC as f64 / 255.0, 0x62 as f64 / 255.0, 0x55 as f64 / 255.0);
    pub const YELLOW: Rgba = Rgba::rgb(1.0, 1.0, 0.0);
    pub const GREEN: Rgba = Rgba::rgb(0x83 as f64 / 255.0, 0xC1 as f64 / 255.0, 0x67 as f64 / 255.0);
    pub const BLUE: Rgba = Rgba::rgb(0x58 as f64 / 255.0, 0xC4 as f64 / 255.0, 0xDD as f64 / 255.0);

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::new(r, g, b, 1.0)
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    pub fn to_f32_array(self) -> [f32; 4] {
        [self.r as f32, self.g as f32, self.b as f32, self.a as f32]
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::WHITE
    }
}

impl Lerp for Rgba {
    fn lerp_to(self, end: Self, alpha: f64) -> Self {
        Self {
            r: self.r.lerp_to(end.r, alpha),
            g: self.g.lerp_to(end.g, alpha),
            b: self.b.lerp_to(end.b, alpha),
            a: self.a.lerp_to(end.a, alpha),
        }
    }
}

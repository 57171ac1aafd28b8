use psurf_core::{PsurfError, Result};
use serde::{Deserialize, Serialize};

use crate::ScaleFunction;

/// `f(x) = k * x`, the default axis scaling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearBase {
    scale_factor: f64,
}

impl LinearBase {
    /// Fails with [`PsurfError::Domain`] unless `scale_factor` is finite and nonzero.
    pub fn new(scale_factor: f64) -> Result<Self> {
        if scale_factor == 0.0 || !scale_factor.is_finite() {
            return Err(PsurfError::Domain(format!(
                "linear scale factor must be finite and nonzero, got {scale_factor}"
            )));
        }
        Ok(Self { scale_factor })
    }

    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }
}

impl Default for LinearBase {
    fn default() -> Self {
        Self { scale_factor: 1.0 }
    }
}

impl ScaleFunction for LinearBase {
    fn function(&self, value: f64) -> f64 {
        self.scale_factor * value
    }

    fn inverse_function(&self, value: f64) -> Result<f64> {
        Ok(value / self.scale_factor)
    }
}

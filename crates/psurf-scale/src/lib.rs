//! Value transforms used to lay out and label graph axes.
//!
//! A [`ScaleFunction`] maps axis values to plotted values and back. Linear
//! scales multiply by a constant; logarithmic scales exponentiate, so equal
//! plotted distances correspond to equal ratios of the underlying value.

mod linear;
mod logarithmic;

use std::fmt;

use psurf_core::{PsurfError, Result};

pub use linear::LinearBase;
pub use logarithmic::LogBase;

/// Forward and inverse mapping between axis values and plotted values.
pub trait ScaleFunction: Send + Sync + fmt::Debug {
    /// Scale a value.
    fn function(&self, value: f64) -> f64;

    /// Undo [`ScaleFunction::function`].
    fn inverse_function(&self, value: f64) -> Result<f64>;

    /// Whether an axis using this scale should draw [`ScaleLabel`]s instead of
    /// plain numbers.
    fn custom_labels(&self) -> bool {
        false
    }

    /// Labels for ticks placed at `values`.
    fn get_custom_labels(&self, values: &[f64]) -> Result<Vec<ScaleLabel>> {
        let _ = values;
        Err(PsurfError::InvalidOperation(format!(
            "{self:?} does not generate custom labels"
        )))
    }
}

/// A `base^{exponent}` tick label, consumed by an external label renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct ScaleLabel {
    pub base: f64,
    pub exponent: String,
}

impl fmt::Display for ScaleLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}^{{{}}}", self.base, self.exponent)
    }
}

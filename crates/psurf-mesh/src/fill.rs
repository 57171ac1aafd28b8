//! Coloring surfaces by a measured value.

use psurf_core::{PsurfError, Result};
use psurf_math::{interpolate, linspace, Rgba};

use crate::axes::ValueAxis;
use crate::family::Surface;

/// Colors ordered from low values to high.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorScheme {
    /// Each color paired with the value at which it applies.
    Pivoted(Vec<(Rgba, f64)>),
    /// Colors spread evenly over the axes' z range.
    Gradient(Vec<Rgba>),
}

impl ColorScheme {
    /// Colors and ascending pivot values.
    pub fn resolve(&self, axes: &dyn ValueAxis) -> Result<(Vec<Rgba>, Vec<f64>)> {
        match self {
            ColorScheme::Pivoted(stops) => Ok(stops.iter().copied().unzip()),
            ColorScheme::Gradient(colors) => {
                if colors.len() < 2 {
                    return Err(PsurfError::InvalidOperation(
                        "a gradient needs at least two colors".into(),
                    ));
                }
                let (lo, hi) = axes.z_range();
                Ok((colors.clone(), linspace(lo, hi, colors.len())))
            }
        }
    }
}

/// Map `value` onto `colors` placed at ascending `pivots`.
///
/// Values at or beyond either end take the end color; values in between blend
/// the two bracketing colors.
pub fn value_to_color(value: f64, pivots: &[f64], colors: &[Rgba]) -> Result<Rgba> {
    if pivots.is_empty() || pivots.len() != colors.len() {
        return Err(PsurfError::InvalidOperation(format!(
            "{} pivots for {} colors",
            pivots.len(),
            colors.len()
        )));
    }
    let last = pivots.len() - 1;
    if value <= pivots[0] {
        return Ok(colors[0]);
    }
    if value >= pivots[last] {
        return Ok(colors[last]);
    }
    let i = pivots
        .iter()
        .position(|&p| p > value)
        .ok_or_else(|| PsurfError::Domain(format!("cannot place {value} among pivots")))?;
    let ratio = ((value - pivots[i - 1]) / (pivots[i] - pivots[i - 1])).clamp(0.0, 1.0);
    Ok(interpolate(colors[i - 1], colors[i], ratio))
}

impl Surface {
    /// Color each member of the family by the z value (in `axes` coordinates)
    /// of its midpoint.
    pub fn set_fill_by_value(&mut self, axes: &dyn ValueAxis, scheme: &ColorScheme) -> Result<()> {
        let (colors, pivots) = scheme.resolve(axes)?;
        for member in self.family_members_with_points_mut() {
            let Some(midpoint) = member.midpoint() else {
                continue;
            };
            let z = axes.point_to_coords(midpoint).z;
            member.set_color(value_to_color(z, &pivots, &colors)?);
        }
        Ok(())
    }
}

//! Partial reveal of a grid along one parameter axis.
//!
//! Rows before the lower bound collapse onto a single interpolated edge, rows
//! past the upper bound collapse onto another, and the rows in between are
//! kept. Animating `b` from 0 to 1 draws the surface progressively.

use log::trace;
use psurf_core::{PsurfError, Result};
use psurf_math::{integer_interpolate, interpolate, Lerp};

use crate::buffer::PointBuffer;
use crate::config::{Axis, Resolution};

/// Whether `[a, b]` covers the whole grid, in which case the source is copied
/// verbatim.
pub fn is_full_interval(a: f64, b: f64) -> bool {
    a <= 0.0 && b >= 1.0
}

/// Rejects non-finite bounds and `a > b`.
pub fn check_interval(a: f64, b: f64) -> Result<()> {
    if a.is_finite() && b.is_finite() && a <= b {
        Ok(())
    } else {
        Err(PsurfError::InvalidInterval { a, b })
    }
}

/// Reveal the fraction `[a, b]` of a per-vertex array laid out row-major on
/// `resolution`, returning a fresh array.
///
/// `values` may hold any attribute that interpolates linearly: points, texture
/// coordinates, colors or scalars.
pub fn partial_grid<T: Lerp>(
    values: &[T],
    resolution: Resolution,
    a: f64,
    b: f64,
    axis: Axis,
) -> Result<Vec<T>> {
    check_interval(a, b)?;
    if values.len() != resolution.vertex_count() {
        return Err(PsurfError::ShapeMismatch {
            expected: resolution.vertex_count(),
            actual: values.len(),
        });
    }

    let mut out = values.to_vec();
    let steps = resolution.along(axis);
    if is_full_interval(a, b) || steps < 2 {
        return Ok(out);
    }

    let max_index = steps - 1;
    let (lower, lower_residue) = integer_interpolate(0, max_index, a);
    let (upper, upper_residue) = integer_interpolate(0, max_index, b);
    trace!(
        "partial reveal [{a}, {b}] along {axis:?}: lower={lower}+{lower_residue:.3} upper={upper}+{upper_residue:.3}"
    );

    // Flat index of the vertex at position `k` along `axis` and `other` across it.
    let nv = resolution.nv;
    let across = match axis {
        Axis::U => resolution.nv,
        Axis::V => resolution.nu,
    };
    let flat = |k: usize, other: usize| match axis {
        Axis::U => k * nv + other,
        Axis::V => other * nv + k,
    };

    for other in 0..across {
        let low_edge = interpolate(
            values[flat(lower, other)],
            values[flat(lower + 1, other)],
            lower_residue,
        );
        for k in 0..lower {
            out[flat(k, other)] = low_edge;
        }

        let high_edge = interpolate(
            values[flat(upper, other)],
            values[flat(upper + 1, other)],
            upper_residue,
        );
        for k in upper + 1..steps {
            out[flat(k, other)] = high_edge;
        }
    }

    Ok(out)
}

/// Apply [`partial_grid`] to each third of a point buffer.
pub fn partial_points(
    source: &PointBuffer,
    resolution: Resolution,
    a: f64,
    b: f64,
    axis: Axis,
) -> Result<PointBuffer> {
    let expected = 3 * resolution.vertex_count();
    if source.len() != expected {
        return Err(PsurfError::ShapeMismatch {
            expected,
            actual: source.len(),
        });
    }
    let (base, du, dv) = source.split();
    PointBuffer::from_parts(
        &partial_grid(base, resolution, a, b, axis)?,
        &partial_grid(du, resolution, a, b, axis)?,
        &partial_grid(dv, resolution, a, b, axis)?,
    )
}

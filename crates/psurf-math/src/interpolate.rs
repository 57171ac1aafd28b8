//! Scalar and vector interpolation helpers shared by the mesh algorithms.

use crate::{DVec2, DVec3};

/// Values that can be linearly blended.
///
/// Implementations use `(1 - alpha) * start + alpha * end`, so `alpha == 0`
/// and `alpha == 1` reproduce the endpoints exactly.
pub trait Lerp: Copy {
    fn lerp_to(self, end: Self, alpha: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp_to(self, end: Self, alpha: f64) -> Self {
        (1.0 - alpha) * self + alpha * end
    }
}

impl Lerp for DVec2 {
    fn lerp_to(self, end: Self, alpha: f64) -> Self {
        (1.0 - alpha) * self + alpha * end
    }
}

impl Lerp for DVec3 {
    fn lerp_to(self, end: Self, alpha: f64) -> Self {
        (1.0 - alpha) * self + alpha * end
    }
}

pub fn interpolate<T: Lerp>(start: T, end: T, alpha: f64) -> T {
    start.lerp_to(end, alpha)
}

/// Split `alpha` of the way from `start` to `end` into an integer index and a
/// residue in `[0, 1)`.
///
/// `alpha <= 0` maps to `(start, 0)`. `alpha >= 1` maps to `(end - 1, 1)`, so
/// the returned index always has a successor inside `start..=end`.
pub fn integer_interpolate(start: usize, end: usize, alpha: f64) -> (usize, f64) {
    if alpha >= 1.0 {
        return (end.saturating_sub(1), 1.0);
    }
    if alpha <= 0.0 {
        return (start, 0.0);
    }
    let span = end.saturating_sub(start) as f64 * alpha;
    let index = (start + span.floor() as usize).min(end);
    (index, span.rem_euclid(1.0))
}

/// `count` evenly spaced samples from `start` to `end`, both inclusive.
pub fn linspace(start: f64, end: f64, count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (count - 1) as f64;
            let mut values: Vec<f64> = (0..count).map(|i| start + step * i as f64).collect();
            values[count - 1] = end;
            values
        }
    }
}

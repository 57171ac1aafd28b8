//! Triangle index buffers for a sampled grid.

use log::debug;
use psurf_core::{PsurfError, Result};

use crate::config::Resolution;

/// Fails when the grid has more vertices than `u32` indices can address.
pub fn check_index_range(resolution: Resolution) -> Result<()> {
    let count = (resolution.nu as u64).checked_mul(resolution.nv as u64);
    match count {
        Some(n) if n <= u64::from(u32::MAX) + 1 => Ok(()),
        _ => Err(PsurfError::InvalidOperation(format!(
            "{}x{} grid exceeds the u32 index range",
            resolution.nu, resolution.nv
        ))),
    }
}

/// Two triangles per grid cell, six indices per cell.
///
/// For the cell whose top-left vertex is `tl`, with `bl` one step along `u`,
/// `tr` one step along `v` and `br` one step along both, the triangles are
/// `(tl, bl, tr)` and `(tr, bl, br)`. They share the `bl`-`tr` diagonal.
pub fn triangle_indices(resolution: Resolution) -> Vec<u32> {
    let Resolution { nu, nv } = resolution;
    let mut indices = Vec::with_capacity(6 * resolution.cell_count());
    if resolution.is_empty() {
        return indices;
    }

    let index = |i: usize, j: usize| -> u32 { (i * nv + j) as u32 };
    for i in 0..nu - 1 {
        for j in 0..nv - 1 {
            let tl = index(i, j);
            let bl = index(i + 1, j);
            let tr = index(i, j + 1);
            let br = index(i + 1, j + 1);
            indices.extend_from_slice(&[tl, bl, tr, tr, bl, br]);
        }
    }

    debug!(
        "triangulated {}x{} grid into {} triangles",
        nu,
        nv,
        indices.len() / 3
    );
    indices
}

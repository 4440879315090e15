//! Padding of arrays before a transform.
//!
//! ## Purpose
//!
//! This module fills the region appended after the data along each axis,
//! either with a constant or with linear ramps that bring every line back to
//! its first value so the padded array is continuous when treated as periodic.
//!
//! ## Design notes
//!
//! * **Geometry**: `grid` describes the original data; `padded` is the same grid
//!   grown by the padding (see `Grid::padded`). Both share strides.
//! * **Ramps, axis by axis**: Axis 1 is extended first over the original extents
//!   of the slower axes; each later axis is extended over the already padded
//!   extents of the faster axes, which fills the corners.
//!
//! ## Invariants
//!
//! * Samples inside the original extents are never modified.
//! * Nothing outside the padded extents is touched.

// External dependencies
use wide::f64x2;

// Internal dependencies
use crate::primitives::grid::{Grid, MAX_DIMS};
use crate::primitives::sample::Sample;

/// Set every sample of `padded` outside `grid` to `value`.
pub fn pad_constant<S: Sample>(grid: &Grid, padded: &Grid, value: S, data: &mut [S]) {
    let n1 = grid.extent(0);
    let p1 = padded.extent(0);
    for row in padded.rows() {
        let outside = (1..MAX_DIMS).any(|axis| row.index[axis] >= grid.extent(axis));
        let start = if outside { 0 } else { n1 };
        data[row.offset + start..row.offset + p1].fill(value);
    }
}

/// Fill every sample of `padded` outside `grid` with linear ramps.
///
/// Along each line, padded element `t` (1-based) after the last original
/// sample `last` takes `last + (first - last) * t / (np + 1)`.
pub fn pad_ramp<S: Sample>(grid: &Grid, padded: &Grid, data: &mut [S]) {
    let strides = padded.strides();
    for axis in 0..grid.ndim() {
        let n = grid.extent(axis);
        let np = padded.extent(axis) - n;
        if np == 0 {
            continue;
        }

        // Faster axes already padded, slower axes still original
        let mut lines = [1usize; MAX_DIMS];
        for (b, ext) in lines.iter_mut().enumerate() {
            if b < axis {
                *ext = padded.extent(b);
            } else if b > axis {
                *ext = grid.extent(b);
            }
        }

        let stride = strides[axis];
        let step = f64x2::splat(1.0 / (np + 1) as f64);
        for_each_index(&lines, |index| {
            let base = index[0]
                + index[1] * strides[1]
                + index[2] * strides[2]
                + index[3] * strides[3];
            let first = data[base].to_lanes();
            let last_at = base + (n - 1) * stride;
            let last = data[last_at].to_lanes();
            let delta = (first - last) * step;
            for t in 1..=np {
                data[last_at + t * stride] = S::from_lanes(last + delta * f64x2::splat(t as f64));
            }
        });
    }
}

/// Visit every index of a four-axis box, axis 0 fastest.
fn for_each_index(extents: &[usize; MAX_DIMS], mut f: impl FnMut([usize; MAX_DIMS])) {
    for j3 in 0..extents[3] {
        for j2 in 0..extents[2] {
            for j1 in 0..extents[1] {
                for j0 in 0..extents[0] {
                    f([j0, j1, j2, j3]);
                }
            }
        }
    }
}

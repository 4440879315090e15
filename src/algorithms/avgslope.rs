//! Average-slope (first order) trend removal.
//!
//! ## Purpose
//!
//! This module removes the mean and a linear trend along each axis using the
//! average slope method (Bendat & Piersol, *Random Data: Analysis and
//! Measurement Procedures*, 1971, p. 288): the slope along an axis is the
//! difference between the means of its two halves divided by the distance
//! between the half centers.
//!
//! ## Design notes
//!
//! * **Single pass** for the mean and all half sums, a second pass to subtract.
//! * **Odd extents**: The middle sample of an odd axis belongs to neither half.
//! * **Centered**: The removed trend is zero-mean along each axis, so the mean
//!   is preserved as a separate quantity.
//!
//! ## Invariants
//!
//! * Axes with a single sample get a zero slope.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use wide::f64x2;

// Internal dependencies
use crate::primitives::grid::{Grid, MAX_DIMS};
use crate::primitives::sample::Sample;

/// Trend removed by [`remove_average_slope`].
#[derive(Debug, Clone, PartialEq)]
pub struct AverageSlope<S> {
    /// Mean of all samples.
    pub mean: S,
    /// Slope per sample step along each active axis.
    pub slopes: Vec<S>,
}

/// Remove the mean and the average slope along each axis from `data`.
///
/// The caller guarantees `data` holds the grid.
pub fn remove_average_slope<S: Sample>(grid: &Grid, data: &mut [S]) -> AverageSlope<S> {
    let zero = f64x2::splat(0.0);
    let ndim = grid.ndim();
    let extents = grid.extents4();
    let n1 = extents[0];

    let mut total = zero;
    let mut first = [zero; MAX_DIMS];
    let mut second = [zero; MAX_DIMS];

    for row in grid.rows() {
        for (j, s) in data[row.offset..row.offset + n1].iter().enumerate() {
            let v = s.to_lanes();
            total += v;
            for axis in 0..ndim {
                let i = if axis == 0 { j } else { row.index[axis] };
                let n = extents[axis];
                let h = n / 2;
                if i < h {
                    first[axis] += v;
                }
                if i >= n - h {
                    second[axis] += v;
                }
            }
        }
    }

    let count = grid.len() as f64;
    let mean = total / f64x2::splat(count);

    let mut slopes = [zero; MAX_DIMS];
    for axis in 0..ndim {
        let n = extents[axis];
        let h = n / 2;
        if h == 0 {
            continue;
        }
        let half_count = count / n as f64 * h as f64;
        let diff = (second[axis] - first[axis]) / f64x2::splat(half_count);
        slopes[axis] = diff / f64x2::splat((n - h) as f64);
    }

    for row in grid.rows() {
        let mut row_trend = mean;
        for axis in 1..ndim {
            let centered = row.index[axis] as f64 - (extents[axis] as f64 - 1.0) / 2.0;
            row_trend += slopes[axis] * f64x2::splat(centered);
        }
        let half_span = (n1 as f64 - 1.0) / 2.0;
        for (j, s) in data[row.offset..row.offset + n1].iter_mut().enumerate() {
            let trend = row_trend + slopes[0] * f64x2::splat(j as f64 - half_span);
            *s = S::from_lanes(s.to_lanes() - trend);
        }
    }

    AverageSlope {
        mean: S::from_lanes(mean),
        slopes: slopes[..ndim].iter().map(|&v| S::from_lanes(v)).collect(),
    }
}

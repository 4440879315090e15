//! Fit coordinates and per-axis power tables.
//!
//! ## Purpose
//!
//! Sample `idx` (1-based) along an axis of extent `n` sits at
//! `x = (idx - (n + 1) / 2) / n`, which centers the axis on zero and scales it
//! to roughly `[-0.5, 0.5]`. This module is the only place that computes these
//! coordinates and their powers.
//!
//! ## Design notes
//!
//! * **Shared tables**: The matrix builder, the fitter and the subtractor all read
//!   powers from `AxisBasis`, so fitting and evaluation see bit-identical
//!   coordinates.
//! * **Repeated products**: `x^k` is built as `x^(k-1) * x`, never with `powi`, so
//!   the result does not depend on the platform's power routine.
//!
//! ## Key concepts
//!
//! * **Power table**: `x_j^k` for `k = 0..=order` and every sample `j` of one axis.
//! * **Moments**: `S[p] = sum_j x_j^p` for `p = 0..=2*order`, the 1-D building
//!   blocks of the separable Gram matrix.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

/// Fit coordinate of 0-based sample `j` on an axis of extent `n`.
#[inline]
pub fn coordinate(j: usize, n: usize) -> f64 {
    let n = n as f64;
    ((j + 1) as f64 - (n + 1.0) / 2.0) / n
}

/// Powers of the fit coordinate along one axis.
#[derive(Debug, Clone, PartialEq)]
pub struct AxisBasis {
    extent: usize,
    order: usize,
    // Power-major: powers[k * extent + j] = x_j^k
    powers: Vec<f64>,
}

impl AxisBasis {
    /// Build the power table for an axis of `extent` samples.
    pub fn new(extent: usize, order: usize) -> Self {
        let mut powers = vec![1.0; (order + 1) * extent];
        for j in 0..extent {
            let x = coordinate(j, extent);
            for k in 1..=order {
                powers[k * extent + j] = powers[(k - 1) * extent + j] * x;
            }
        }
        Self {
            extent,
            order,
            powers,
        }
    }

    /// Number of samples along the axis.
    #[inline]
    pub fn extent(&self) -> usize {
        self.extent
    }

    /// Highest tabulated power.
    #[inline]
    pub fn order(&self) -> usize {
        self.order
    }

    /// `x_j^k` for every sample `j`.
    #[inline]
    pub fn powers(&self, k: usize) -> &[f64] {
        &self.powers[k * self.extent..(k + 1) * self.extent]
    }

    /// `x_j^k` for one sample.
    #[inline(always)]
    pub fn power(&self, k: usize, j: usize) -> f64 {
        self.powers[k * self.extent + j]
    }

    /// Power sums `S[p] = sum_j x_j^p` for `p = 0..=2*order`.
    #[inline]
    pub fn moments(&self) -> Vec<f64> {
        moments(self.extent, self.order)
    }
}

/// Power sums `S[p] = sum_j x_j^p`, `p = 0..=2*order`, over an axis of `extent` samples.
pub fn moments(extent: usize, order: usize) -> Vec<f64> {
    let mut sums = vec![0.0; 2 * order + 1];
    for j in 0..extent {
        let x = coordinate(j, extent);
        let mut xp = 1.0;
        for s in sums.iter_mut() {
            *s += xp;
            xp *= x;
        }
    }
    sums
}

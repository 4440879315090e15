//! Polynomial trend evaluation and in-place subtraction.
//!
//! ## Purpose
//!
//! This module evaluates a fitted polynomial at every grid point and subtracts
//! it from the samples.
//!
//! ## Design notes
//!
//! * **Same coordinates**: Powers come from the same `AxisBasis` tables the
//!   fitter used, so the trend is evaluated at exactly the fitted coordinates.
//! * **Row polynomials**: For each row the slower axes are folded into a 1-D
//!   polynomial in `x1` whose `order + 1` coefficients are then evaluated
//!   along the row.
//! * **Precision**: The difference is computed in `f64` and rounded to `f32` once.
//!
//! ## Invariants
//!
//! * A zero coefficient vector leaves every sample bit-identical.
//! * Samples outside the extents (window padding) are never touched.
//! * No allocation once the buffer has grown to size.

// External dependencies
use wide::f64x2;

// Internal dependencies
use crate::algorithms::fit::outer_weight;
use crate::math::coordinates::AxisBasis;
use crate::math::multi_index::Exponents;
use crate::primitives::buffer::EvaluationBuffer;
use crate::primitives::grid::Grid;
use crate::primitives::sample::{Sample, TrendCoefficients};

/// Subtract the polynomial with coefficients `coeffs` from `data`.
///
/// `coeffs` must hold one coefficient per entry of `tuples` in every lane.
pub fn subtract_trend<S: Sample>(
    grid: &Grid,
    bases: &[AxisBasis],
    tuples: &[Exponents],
    coeffs: &S::Coefficients,
    data: &mut [S],
    buffer: &mut EvaluationBuffer,
) {
    let zero = f64x2::splat(0.0);
    let fastest = &bases[0];
    let n1 = fastest.extent();
    let order = fastest.order();

    let re = coeffs.block(0);
    let im = if S::LANES > 1 { Some(coeffs.block(1)) } else { None };
    buffer.coeffs.clear();
    buffer
        .coeffs
        .extend((0..tuples.len()).map(|a| f64x2::new([re[a], im.map_or(0.0, |im| im[a])])));

    for row in grid.rows() {
        buffer.row_poly.reset(order + 1, zero);
        for (c, k) in buffer.coeffs.iter().zip(tuples) {
            let w = outer_weight(bases, k, &row.index);
            buffer.row_poly[k[0]] += *c * f64x2::splat(w);
        }

        let samples = &mut data[row.offset..row.offset + n1];
        for (j, s) in samples.iter_mut().enumerate() {
            let mut trend = zero;
            for (k, &c) in buffer.row_poly.iter().enumerate() {
                trend += c * f64x2::splat(fastest.power(k, j));
            }
            *s = S::from_lanes(s.to_lanes() - trend);
        }
    }
}

/// Evaluate the polynomial at one grid index without touching any array.
pub fn evaluate_at<S: Sample>(
    bases: &[AxisBasis],
    tuples: &[Exponents],
    coeffs: &S::Coefficients,
    index: &[usize; 4],
) -> f64x2 {
    let re = coeffs.block(0);
    let im = if S::LANES > 1 { Some(coeffs.block(1)) } else { None };
    let mut value = f64x2::splat(0.0);
    for (a, k) in tuples.iter().enumerate() {
        let mut w = 1.0;
        for (axis, basis) in bases.iter().enumerate() {
            w *= basis.power(k[axis], index[axis]);
        }
        value += f64x2::new([re[a], im.map_or(0.0, |im| im[a])]) * f64x2::splat(w);
    }
    value
}

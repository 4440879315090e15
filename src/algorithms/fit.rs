//! Least-squares polynomial trend fitting.
//!
//! ## Purpose
//!
//! This module computes the right-hand side of the normal equations for one
//! array, `rhs[a] = sum_grid sample(x) * m_a(x)`, and solves it against a
//! factorization of the shared normal matrix.
//!
//! ## Design notes
//!
//! * **Row projection**: Each fastest-axis row is first projected onto
//!   `x1^0 .. x1^order`; the row results are then spread over all monomials
//!   with the slower-axis powers of that row. The inner loop is a dot product
//!   over contiguous samples.
//! * **Lanes**: Real and imaginary parts accumulate together in `f64x2` lanes
//!   and are solved one lane at a time against the same real matrix.
//!
//! ## Invariants
//!
//! * The input array is never modified.
//! * Only samples inside the extents are read; window padding is ignored.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use nalgebra::DVector;
use wide::f64x2;

// Internal dependencies
use crate::math::coordinates::AxisBasis;
use crate::math::linalg::Factorizer;
use crate::math::multi_index::Exponents;
use crate::primitives::buffer::FittingBuffer;
use crate::primitives::errors::IspError;
use crate::primitives::grid::Grid;
use crate::primitives::sample::{Sample, TrendCoefficients};

/// Accumulate the right-hand side of the normal equations into `buffer.rhs`.
///
/// `bases` holds one power table per active axis and `tuples` the exponent
/// tuples in coefficient order.
pub fn accumulate_rhs<S: Sample>(
    grid: &Grid,
    bases: &[AxisBasis],
    tuples: &[Exponents],
    data: &[S],
    buffer: &mut FittingBuffer,
) {
    let zero = f64x2::splat(0.0);
    let fastest = &bases[0];
    let n1 = fastest.extent();
    let order = fastest.order();

    buffer.rhs.reset(tuples.len(), zero);

    for row in grid.rows() {
        let samples = &data[row.offset..row.offset + n1];

        buffer.row.reset(order + 1, zero);
        for (k, acc) in buffer.row.iter_mut().enumerate() {
            let powers = fastest.powers(k);
            let mut sum = zero;
            for (&s, &p) in samples.iter().zip(powers) {
                sum += s.to_lanes() * f64x2::splat(p);
            }
            *acc = sum;
        }

        for (rhs, k) in buffer.rhs.iter_mut().zip(tuples) {
            let w = outer_weight(bases, k, &row.index);
            *rhs += buffer.row[k[0]] * f64x2::splat(w);
        }
    }
}

/// Solve the normal equations for every lane of `rhs`.
///
/// Returns `IspError::SolveFailure` when the factorizer fails or the
/// solution is not finite.
pub fn solve_lanes<S: Sample, F: Factorizer>(
    factorizer: &F,
    factors: &F::Factors,
    rhs: &[f64x2],
) -> Result<S::Coefficients, IspError> {
    let mut blocks: [Vec<f64>; 2] = [Vec::new(), Vec::new()];
    for (lane, block) in blocks.iter_mut().enumerate().take(S::LANES) {
        let mut b = DVector::from_iterator(rhs.len(), rhs.iter().map(|v| v.to_array()[lane]));
        if !factorizer.solve(factors, &mut b) {
            return Err(IspError::SolveFailure);
        }
        *block = b.as_slice().to_vec();
    }
    let [re, im] = blocks;
    Ok(S::Coefficients::from_blocks(re, im))
}

/// Product of the slower-axis powers of monomial `k` at the row `index`.
#[inline(always)]
pub(crate) fn outer_weight(bases: &[AxisBasis], k: &Exponents, index: &[usize; 4]) -> f64 {
    let mut w = 1.0;
    for (axis, basis) in bases.iter().enumerate().skip(1) {
        w *= basis.power(k[axis], index[axis]);
    }
    w
}

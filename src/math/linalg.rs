//! Linear algebra backend abstraction for the normal equations.
//!
//! ## Purpose
//!
//! This module provides a trait-based abstraction over the "factor once, solve
//! many" contract the detrending engine needs, backed by nalgebra.
//!
//! ## Design notes
//!
//! * The normal-equation matrix depends only on the grid shape and the order,
//!   so it is factored once and the factors are reused for every array.
//! * `LuFactorizer` (partial pivoting) is the default; `CholeskyFactorizer`
//!   exploits the fact that a non-singular Gram matrix is positive definite.
//! * Both backends reject factors whose smallest pivot is negligible relative
//!   to the largest, so numerically rank-deficient systems are reported instead
//!   of producing huge coefficients.
//! * Solves that produce non-finite values are reported as failures.

// External dependencies
use core::fmt::Debug;
use nalgebra::{Cholesky, DMatrix, DVector, Dyn, LU};
use num_traits::Float;

/// Dense solver for the symmetric normal equations.
pub trait Factorizer: Debug + Clone + Send + Sync + 'static {
    /// Factorization state paired with the matrix it was derived from.
    type Factors: Debug + Clone + Send + Sync;

    /// Factor `matrix`; `None` when it is singular.
    fn factor(&self, matrix: DMatrix<f64>) -> Option<Self::Factors>;

    /// Overwrite `rhs` with the solution; `false` when the solve fails.
    fn solve(&self, factors: &Self::Factors, rhs: &mut DVector<f64>) -> bool;
}

/// LU factorization with partial pivoting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LuFactorizer;

impl Factorizer for LuFactorizer {
    type Factors = LU<f64, Dyn, Dyn>;

    fn factor(&self, matrix: DMatrix<f64>) -> Option<Self::Factors> {
        let n = matrix.nrows();
        let lu = matrix.lu();
        if !lu.is_invertible() || !pivots_acceptable(lu.u().diagonal().iter().copied(), n) {
            return None;
        }
        Some(lu)
    }

    fn solve(&self, factors: &Self::Factors, rhs: &mut DVector<f64>) -> bool {
        factors.solve_mut(rhs) && all_finite(rhs)
    }
}

/// Cholesky factorization of a positive definite matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CholeskyFactorizer;

impl Factorizer for CholeskyFactorizer {
    type Factors = Cholesky<f64, Dyn>;

    fn factor(&self, matrix: DMatrix<f64>) -> Option<Self::Factors> {
        let n = matrix.nrows();
        let chol = matrix.cholesky()?;
        // Pivots of the equivalent LDL' factorization are the squared diagonal of L
        let diagonal = chol.l_dirty().diagonal();
        if !pivots_acceptable(diagonal.iter().map(|l| l * l), n) {
            return None;
        }
        Some(chol)
    }

    fn solve(&self, factors: &Self::Factors, rhs: &mut DVector<f64>) -> bool {
        factors.solve_mut(rhs);
        all_finite(rhs)
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// True when every pivot is finite and none is negligible next to the largest.
fn pivots_acceptable(pivots: impl Iterator<Item = f64>, n: usize) -> bool {
    let mut largest = 0.0f64;
    let mut smallest = f64::INFINITY;
    for p in pivots {
        if !p.is_finite() {
            return false;
        }
        let a = Float::abs(p);
        largest = largest.max(a);
        smallest = smallest.min(a);
    }
    smallest > largest * (n.max(1) as f64) * f64::EPSILON
}

#[inline]
fn all_finite(v: &DVector<f64>) -> bool {
    v.iter().all(|x| x.is_finite())
}

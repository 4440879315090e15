//! Normal-equation matrix for N-dimensional polynomial trends.
//!
//! ## Purpose
//!
//! This module builds the Gram matrix of the monomial basis evaluated on every
//! grid point. Entry `(a, b)` is `sum_grid m_a(x) * m_b(x)`. Sample values never
//! enter the matrix, so one matrix serves every array of the same shape.
//!
//! ## Design notes
//!
//! * **Separable**: Monomials are products of per-axis powers and the grid is a
//!   tensor product, so every entry factors into 1-D power sums:
//!   `G[a, b] = prod_i S_i[ka_i + kb_i]`. Cost is `O(N * order * extent + M^2 * N)`
//!   instead of `O(M^2 * grid size)`.
//! * **Structural singularity**: An axis with `n` samples supports at most
//!   `n` independent powers; `order >= n` is rejected before any factorization.
//!
//! ## Invariants
//!
//! * The matrix is square with side `MonomialIndex::len()` and exactly symmetric.
//! * Windows do not influence the matrix; only extents do.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use log::{debug, warn};
use nalgebra::DMatrix;

// Internal dependencies
use crate::math::coordinates::moments;
use crate::math::multi_index::{Exponents, MonomialIndex};
use crate::primitives::errors::IspError;
use crate::primitives::grid::{Grid, MAX_DIMS};

/// Gram matrix of the monomial basis on a grid, with the data it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalMatrix {
    index: MonomialIndex,
    extents: [usize; MAX_DIMS],
    matrix: DMatrix<f64>,
}

impl NormalMatrix {
    /// Build the normal-equation matrix for `grid` and `order`.
    ///
    /// Fails with `IspError::SingularSystem` when `order` reaches the extent
    /// of any active axis.
    pub fn build(grid: &Grid, order: usize) -> Result<Self, IspError> {
        let ndim = grid.ndim();
        let index = MonomialIndex::new(ndim, order)?;

        if let Some(&extent) = grid.extents().iter().find(|&&n| order >= n) {
            warn!(
                "normal matrix for extents {:?} is singular at order {}",
                grid.extents(),
                order
            );
            return Err(IspError::SingularSystem {
                order,
                extent: Some(extent),
            });
        }

        let sums: Vec<Vec<f64>> = grid
            .extents()
            .iter()
            .map(|&n| moments(n, order))
            .collect();
        let tuples = index.to_vec();
        let matrix = assemble(&tuples, &sums);

        debug!(
            "built {}x{} normal matrix for extents {:?}, order {}",
            index.len(),
            index.len(),
            grid.extents(),
            order
        );

        Ok(Self {
            index,
            extents: grid.extents4(),
            matrix,
        })
    }

    /// Coefficient index map the matrix rows follow.
    #[inline]
    pub fn index(&self) -> &MonomialIndex {
        &self.index
    }

    /// Extents the matrix was built for; inactive axes reported as 1.
    #[inline]
    pub fn extents(&self) -> [usize; MAX_DIMS] {
        self.extents
    }

    /// Polynomial order.
    #[inline]
    pub fn order(&self) -> usize {
        self.index.order()
    }

    /// Side length of the matrix.
    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Always false: the constant term is always present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The matrix itself.
    #[inline]
    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    /// Consume and return the matrix.
    #[inline]
    pub fn into_matrix(self) -> DMatrix<f64> {
        self.matrix
    }
}

/// Fill the upper triangle from products of power sums and mirror it.
fn assemble(tuples: &[Exponents], sums: &[Vec<f64>]) -> DMatrix<f64> {
    let m = tuples.len();
    let mut matrix = DMatrix::zeros(m, m);
    for (a, ka) in tuples.iter().enumerate() {
        for (b, kb) in tuples.iter().enumerate().skip(a) {
            let mut entry = 1.0;
            for (axis, s) in sums.iter().enumerate() {
                entry *= s[ka[axis] + kb[axis]];
            }
            matrix[(a, b)] = entry;
            matrix[(b, a)] = entry;
        }
    }
    matrix
}

//! Polynomial detrending over a fixed grid shape and order.
//!
//! ## Purpose
//!
//! `PolyFit` is the caller-owned pairing of a normal-equation matrix with its
//! factorization. It is built once per (grid extents, order) and then fits and
//! subtracts polynomial trends from any number of arrays of that shape.
//!
//! ## Design notes
//!
//! * **Explicit cache**: The library keeps no hidden state; whoever holds the
//!   `PolyFit` holds the cache, and a new shape or order needs a new value.
//! * **Shared, read-only**: After construction nothing in a `PolyFit` changes,
//!   so one value can serve several threads, each bringing its own
//!   `DetrendWorkspace`.
//! * **Windows**: The matrix depends on extents only. `rewindowed` reuses the
//!   factorization for arrays with the same extents in a different allocation.
//!
//! ## Key concepts
//!
//! * **Fit**: `fit` solves for the coefficients of one array.
//! * **Subtract**: `subtract` removes a polynomial given its coefficients.
//! * **Detrend**: `detrend` does both and returns the coefficients.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use log::{debug, warn};

// Internal dependencies
use crate::algorithms::fit::{accumulate_rhs, solve_lanes};
use crate::algorithms::normal_matrix::NormalMatrix;
use crate::algorithms::subtract::{evaluate_at, subtract_trend};
use crate::engine::validator::Validator;
use crate::engine::workspace::DetrendWorkspace;
use crate::math::coordinates::AxisBasis;
use crate::math::linalg::{Factorizer, LuFactorizer};
use crate::math::multi_index::{Exponents, MonomialIndex};
use crate::primitives::errors::IspError;
use crate::primitives::grid::{Grid, MAX_DIMS};
use crate::primitives::sample::{Sample, TrendCoefficients};

/// Factored normal equations for one grid shape and polynomial order.
#[derive(Debug, Clone)]
pub struct PolyFit<F: Factorizer = LuFactorizer> {
    grid: Grid,
    normal: NormalMatrix,
    tuples: Vec<Exponents>,
    bases: Vec<AxisBasis>,
    factorizer: F,
    factors: F::Factors,
    check_finite: bool,
}

impl PolyFit<LuFactorizer> {
    /// Build and factor the normal equations with the default LU backend.
    pub fn new(grid: &Grid, order: usize) -> Result<Self, IspError> {
        Self::with_factorizer(grid, order, LuFactorizer)
    }
}

impl<F: Factorizer> PolyFit<F> {
    /// Build and factor the normal equations with the given backend.
    ///
    /// Fails with `IspError::SingularSystem` when the basis is degenerate on
    /// the grid or the factorizer rejects the matrix.
    pub fn with_factorizer(grid: &Grid, order: usize, factorizer: F) -> Result<Self, IspError> {
        let normal = NormalMatrix::build(grid, order)?;

        let factors = match factorizer.factor(normal.matrix().clone()) {
            Some(f) => f,
            None => {
                warn!(
                    "factorization of the {}x{} normal matrix failed (extents {:?}, order {})",
                    normal.len(),
                    normal.len(),
                    grid.extents(),
                    order
                );
                return Err(IspError::SingularSystem {
                    order,
                    extent: None,
                });
            }
        };
        debug!("factored normal matrix with {:?}", factorizer);

        let tuples = normal.index().to_vec();
        let bases = grid
            .extents()
            .iter()
            .map(|&n| AxisBasis::new(n, order))
            .collect();

        Ok(Self {
            grid: *grid,
            normal,
            tuples,
            bases,
            factorizer,
            factors,
            check_finite: false,
        })
    }

    /// Reuse the factorization for arrays with the same extents but other windows.
    pub fn rewindowed(&self, grid: &Grid) -> Result<Self, IspError> {
        Validator::validate_same_extents(&self.grid, grid)?;
        let mut out = self.clone();
        out.grid = *grid;
        Ok(out)
    }

    /// Scan every array for NaN and infinite samples before fitting.
    ///
    /// Off by default, in which case such samples surface as
    /// `IspError::SolveFailure`; on, they are reported as
    /// `IspError::InvalidNumericValue` with their position.
    pub fn with_finite_check(mut self, enabled: bool) -> Self {
        self.check_finite = enabled;
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Grid the arrays are expected to follow.
    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Polynomial order.
    #[inline]
    pub fn order(&self) -> usize {
        self.normal.order()
    }

    /// Number of coefficients per block.
    #[inline]
    pub fn n_terms(&self) -> usize {
        self.normal.len()
    }

    /// Coefficient index map.
    #[inline]
    pub fn index(&self) -> &MonomialIndex {
        self.normal.index()
    }

    /// The unfactored normal-equation matrix.
    #[inline]
    pub fn normal_matrix(&self) -> &NormalMatrix {
        &self.normal
    }

    /// The factorization paired with the matrix.
    #[inline]
    pub fn factors(&self) -> &F::Factors {
        &self.factors
    }

    /// A workspace sized for this fit.
    pub fn workspace(&self) -> DetrendWorkspace {
        DetrendWorkspace::new(self.n_terms(), self.order())
    }

    // ========================================================================
    // Fit
    // ========================================================================

    /// Fit the polynomial trend of `data`.
    pub fn fit<S: Sample>(&self, data: &[S]) -> Result<S::Coefficients, IspError> {
        let mut workspace = self.workspace();
        self.fit_with(data, &mut workspace)
    }

    /// Fit the polynomial trend of `data` using caller-owned scratch space.
    ///
    /// Fails with `IspError::SolveFailure` when the coefficients are not
    /// finite, e.g. because `data` holds NaN or infinite samples.
    pub fn fit_with<S: Sample>(
        &self,
        data: &[S],
        workspace: &mut DetrendWorkspace,
    ) -> Result<S::Coefficients, IspError> {
        Validator::validate_buffer(&self.grid, data.len())?;
        if self.check_finite {
            Validator::validate_finite(&self.grid, data)?;
        }
        workspace.ensure_capacity(self.n_terms(), self.order());

        let buffer = &mut workspace.fitting_buffer;
        accumulate_rhs(&self.grid, &self.bases, &self.tuples, data, buffer);
        solve_lanes::<S, F>(&self.factorizer, &self.factors, &buffer.rhs)
    }

    // ========================================================================
    // Subtract
    // ========================================================================

    /// Subtract the polynomial with coefficients `coeffs` from `data`.
    pub fn subtract<S: Sample>(&self, data: &mut [S], coeffs: &S::Coefficients) -> Result<(), IspError> {
        let mut workspace = self.workspace();
        self.subtract_with(data, coeffs, &mut workspace)
    }

    /// Subtract the polynomial with coefficients `coeffs` from `data` using
    /// caller-owned scratch space.
    pub fn subtract_with<S: Sample>(
        &self,
        data: &mut [S],
        coeffs: &S::Coefficients,
        workspace: &mut DetrendWorkspace,
    ) -> Result<(), IspError> {
        Validator::validate_buffer(&self.grid, data.len())?;
        Validator::validate_coefficients::<S>(coeffs, self.n_terms())?;
        workspace.ensure_capacity(self.n_terms(), self.order());

        subtract_trend::<S>(
            &self.grid,
            &self.bases,
            &self.tuples,
            coeffs,
            data,
            &mut workspace.evaluation_buffer,
        );
        Ok(())
    }

    // ========================================================================
    // Detrend
    // ========================================================================

    /// Fit and subtract the polynomial trend of `data`; returns the coefficients.
    pub fn detrend<S: Sample>(&self, data: &mut [S]) -> Result<S::Coefficients, IspError> {
        let mut workspace = self.workspace();
        self.detrend_with(data, &mut workspace)
    }

    /// Fit and subtract using caller-owned scratch space.
    ///
    /// On error `data` is left untouched.
    pub fn detrend_with<S: Sample>(
        &self,
        data: &mut [S],
        workspace: &mut DetrendWorkspace,
    ) -> Result<S::Coefficients, IspError> {
        let coeffs = self.fit_with(data, workspace)?;
        self.subtract_with(data, &coeffs, workspace)?;
        Ok(coeffs)
    }

    // ========================================================================
    // Evaluation
    // ========================================================================

    /// Value of the polynomial at a 0-based grid index.
    pub fn trend_at<S: Sample>(&self, coeffs: &S::Coefficients, index: &[usize]) -> Result<S, IspError> {
        Validator::validate_coefficients::<S>(coeffs, self.n_terms())?;
        if index.len() != self.grid.ndim() {
            return Err(IspError::InvalidDimensions(index.len()));
        }
        let mut padded = [0usize; MAX_DIMS];
        for (axis, &i) in index.iter().enumerate() {
            if i >= self.grid.extent(axis) {
                return Err(IspError::IndexOutOfBounds {
                    axis,
                    index: i,
                    extent: self.grid.extent(axis),
                });
            }
            padded[axis] = i;
        }
        Ok(S::from_lanes(evaluate_at::<S>(&self.bases, &self.tuples, coeffs, &padded)))
    }

    /// All-zero coefficients of the right size, for use with `subtract`.
    pub fn zero_coefficients<S: Sample>(&self) -> S::Coefficients {
        S::Coefficients::zeros(self.n_terms())
    }
}

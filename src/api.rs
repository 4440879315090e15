//! High-level API for polynomial detrending.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for configuring the polynomial order and linear solver, and
//! re-exports the free functions for size search, padding, average-slope
//! removal and multiplication.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Explicit cache**: `.build(&grid)` returns a `PolyFit` the caller keeps
//!   for as long as arrays of that shape keep coming.
//!
//! ## Key concepts
//!
//! ### Configuration Flow
//!
//! 1. Create a [`DetrendBuilder`] via `Detrend::new()`.
//! 2. Chain configuration methods (`.order()`, `.factorizer()`, `.check_finite()`).
//! 3. Call `.build(&grid)` to factor the normal equations once.
//! 4. Call `fit`, `subtract` or `detrend` on the result for every array.

// Internal dependencies
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::avgslope::AverageSlope;
pub use crate::algorithms::multiply::Scale;
pub use crate::engine::polyfit::PolyFit;
pub use crate::engine::ops::{
    multiply, multiply_separable, pad_constant, pad_ramp, remove_average_slope,
};
pub use crate::engine::workspace::DetrendWorkspace;
pub use crate::math::linalg::{CholeskyFactorizer, Factorizer, LuFactorizer};
pub use crate::math::multi_index::{MonomialIndex, monomial_count};
pub use crate::math::nicesize::{SIZE_LIMIT, is_nice, nice_size, nice_small_size};
pub use crate::primitives::errors::IspError;
pub use crate::primitives::grid::{Grid, MAX_DIMS};
pub use crate::primitives::sample::{ComplexCoefficients, Sample, TrendCoefficients};
pub use num_complex::Complex;

/// Default polynomial order: remove a plane (mean and linear terms).
pub const DEFAULT_ORDER: usize = 1;

/// Fluent builder for configuring polynomial detrending.
#[derive(Debug, Clone)]
pub struct DetrendBuilder<F: Factorizer = LuFactorizer> {
    /// Polynomial order (total degree).
    pub order: Option<usize>,

    /// Linear solver for the normal equations.
    pub factorizer: Option<F>,

    /// Scan arrays for NaN and infinite samples before fitting.
    pub check_finite: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl Default for DetrendBuilder<LuFactorizer> {
    fn default() -> Self {
        Self::new()
    }
}

impl DetrendBuilder<LuFactorizer> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            order: None,
            factorizer: None,
            check_finite: None,
            duplicate_param: None,
        }
    }
}

impl<F: Factorizer + Default> DetrendBuilder<F> {
    /// Set the polynomial order.
    ///
    /// - `0`: mean
    /// - `1` (default): mean and plane
    /// - `2`: quadratic surface, and so on
    pub fn order(mut self, order: usize) -> Self {
        if self.order.is_some() {
            self.duplicate_param = Some("order");
        }
        self.order = Some(order);
        self
    }

    /// Select the linear solver used for the normal equations.
    pub fn factorizer<G: Factorizer>(self, factorizer: G) -> DetrendBuilder<G> {
        let duplicate_param = if self.factorizer.is_some() {
            Some("factorizer")
        } else {
            self.duplicate_param
        };
        DetrendBuilder {
            order: self.order,
            factorizer: Some(factorizer),
            check_finite: self.check_finite,
            duplicate_param,
        }
    }

    /// Reject arrays with NaN or infinite samples before fitting.
    pub fn check_finite(mut self, enabled: bool) -> Self {
        if self.check_finite.is_some() {
            self.duplicate_param = Some("check_finite");
        }
        self.check_finite = Some(enabled);
        self
    }

    /// Build and factor the normal equations for `grid`.
    pub fn build(self, grid: &Grid) -> Result<PolyFit<F>, IspError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let order = self.order.unwrap_or(DEFAULT_ORDER);
        let factorizer = self.factorizer.unwrap_or_default();
        let fit = PolyFit::with_factorizer(grid, order, factorizer)?;
        Ok(fit.with_finite_check(self.check_finite.unwrap_or(false)))
    }
}

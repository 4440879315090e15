//! Input validation for detrending, padding and multiplication.
//!
//! ## Purpose
//!
//! This module checks caller-supplied buffers and parameters before any
//! kernel runs, so kernels can index without bounds surprises.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive; the finite
//!   sample scan is opt-in.
//!
//! ## Invariants
//!
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not correct invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// Internal dependencies
use crate::primitives::errors::IspError;
use crate::primitives::grid::Grid;
use crate::primitives::sample::{Sample, TrendCoefficients};

/// Validation utility for grids, buffers and coefficients.
///
/// All methods return `Result<(), IspError>` and fail fast upon identifying
/// the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Buffers
    // ========================================================================

    /// Validate that a buffer of `len` elements can hold `grid`.
    pub fn validate_buffer(grid: &Grid, len: usize) -> Result<(), IspError> {
        let need = grid.required_len();
        if len < need {
            return Err(IspError::BufferTooSmall { got: len, need });
        }
        Ok(())
    }

    /// Validate that every sample inside the grid is finite.
    pub fn validate_finite<S: Sample>(grid: &Grid, data: &[S]) -> Result<(), IspError> {
        let n1 = grid.extent(0);
        for row in grid.rows() {
            for (j, s) in data[row.offset..row.offset + n1].iter().enumerate() {
                if !s.is_finite() {
                    return Err(IspError::InvalidNumericValue(format!(
                        "sample at {:?}",
                        [j, row.index[1], row.index[2], row.index[3]]
                    )));
                }
            }
        }
        Ok(())
    }

    // ========================================================================
    // Geometry
    // ========================================================================

    /// Validate that two grids have the same extents.
    pub fn validate_same_extents(a: &Grid, b: &Grid) -> Result<(), IspError> {
        if !a.same_extents(b) {
            return Err(IspError::MismatchedGrids);
        }
        Ok(())
    }

    /// Validate one separable factor per active axis, each as long as its axis.
    pub fn validate_factors<T>(grid: &Grid, factors: &[&[T]]) -> Result<(), IspError> {
        if factors.len() != grid.ndim() {
            return Err(IspError::InvalidDimensions(factors.len()));
        }
        for (axis, f) in factors.iter().enumerate() {
            if f.len() != grid.extent(axis) {
                return Err(IspError::FactorLength {
                    axis,
                    got: f.len(),
                    expected: grid.extent(axis),
                });
            }
        }
        Ok(())
    }

    // ========================================================================
    // Coefficients
    // ========================================================================

    /// Validate that every coefficient block holds `expected` entries.
    pub fn validate_coefficients<S: Sample>(
        coeffs: &S::Coefficients,
        expected: usize,
    ) -> Result<(), IspError> {
        for lane in 0..S::LANES {
            let got = coeffs.block(lane).len();
            if got != expected {
                return Err(IspError::CoefficientLength { got, expected });
            }
        }
        Ok(())
    }

    // ========================================================================
    // Builder
    // ========================================================================

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), IspError> {
        if let Some(param) = duplicate_param {
            return Err(IspError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}

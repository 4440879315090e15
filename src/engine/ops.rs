//! Validated entry points for the stateless array operations.
//!
//! ## Purpose
//!
//! Average-slope removal, padding and multiplication need no cached state.
//! This module checks the caller's geometry and buffers, then hands off to
//! the kernels in `algorithms`.
//!
//! ## Invariants
//!
//! * On error the caller's buffers are left untouched.

// External dependencies
use core::ops::Mul;
use log::debug;

// Internal dependencies
use crate::algorithms::avgslope::{self, AverageSlope};
use crate::algorithms::multiply::{self, Scale};
use crate::algorithms::padding;
use crate::engine::validator::Validator;
use crate::primitives::errors::IspError;
use crate::primitives::grid::Grid;
use crate::primitives::sample::Sample;

/// Remove the mean and the average slope along each axis from `data`.
pub fn remove_average_slope<S: Sample>(
    grid: &Grid,
    data: &mut [S],
) -> Result<AverageSlope<S>, IspError> {
    Validator::validate_buffer(grid, data.len())?;
    Ok(avgslope::remove_average_slope(grid, data))
}

// ============================================================================
// Padding
// ============================================================================

/// Fill the `padding[i]` samples appended after axis `i` with `value`.
///
/// The padded extents of all but the last axis must fit in the grid windows.
pub fn pad_constant<S: Sample>(
    grid: &Grid,
    padding: &[usize],
    value: S,
    data: &mut [S],
) -> Result<(), IspError> {
    let padded = grid.padded(padding)?;
    Validator::validate_buffer(&padded, data.len())?;
    debug!("constant padding {:?} -> {:?}", grid.extents(), padded.extents());
    padding::pad_constant(grid, &padded, value, data);
    Ok(())
}

/// Fill the `padding[i]` samples appended after axis `i` with linear ramps
/// from the last sample of each line back to its first.
pub fn pad_ramp<S: Sample>(grid: &Grid, padding: &[usize], data: &mut [S]) -> Result<(), IspError> {
    let padded = grid.padded(padding)?;
    Validator::validate_buffer(&padded, data.len())?;
    debug!("ramp padding {:?} -> {:?}", grid.extents(), padded.extents());
    padding::pad_ramp(grid, &padded, data);
    Ok(())
}

// ============================================================================
// Multiplication
// ============================================================================

/// `inout *= input`, element by element over the shared extents.
pub fn multiply<T: Copy, S: Scale<T>>(
    grid_in: &Grid,
    input: &[T],
    grid_inout: &Grid,
    inout: &mut [S],
) -> Result<(), IspError> {
    Validator::validate_same_extents(grid_in, grid_inout)?;
    Validator::validate_buffer(grid_in, input.len())?;
    Validator::validate_buffer(grid_inout, inout.len())?;
    multiply::multiply(grid_in, input, grid_inout, inout);
    Ok(())
}

/// `inout *= s1(j1) * .. * sN(jN)` with one factor per axis.
pub fn multiply_separable<T, S>(grid: &Grid, factors: &[&[T]], inout: &mut [S]) -> Result<(), IspError>
where
    T: Copy + Mul<Output = T>,
    S: Scale<T>,
{
    Validator::validate_factors(grid, factors)?;
    Validator::validate_buffer(grid, inout.len())?;
    multiply::multiply_separable(grid, factors, inout);
    Ok(())
}

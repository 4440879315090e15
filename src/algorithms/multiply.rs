//! Element-wise multiplication of arrays.
//!
//! ## Purpose
//!
//! This module multiplies an array in place by another array of the same
//! extents, or by a separable array given as the outer product of one 1-D
//! factor per axis, `a(j1, .., jN) = s1(j1) * .. * sN(jN)`.
//!
//! ## Design notes
//!
//! * **Mixed types**: `Scale` pairs the in-place element type with the factor
//!   type: real by real, complex by complex and complex by real.
//! * **Windows**: Both operands may be embedded in larger allocations with
//!   different windows; only extents must agree.

// External dependencies
use core::ops::Mul;
use num_complex::Complex;

// Internal dependencies
use crate::primitives::grid::Grid;
use crate::primitives::sample::Sample;

/// In-place multiplication of a sample by a factor of type `Rhs`.
pub trait Scale<Rhs: Copy>: Sample {
    /// `self * by`.
    fn scale(self, by: Rhs) -> Self;
}

impl Scale<f32> for f32 {
    #[inline(always)]
    fn scale(self, by: f32) -> Self {
        self * by
    }
}

impl Scale<Complex<f32>> for Complex<f32> {
    #[inline(always)]
    fn scale(self, by: Complex<f32>) -> Self {
        self * by
    }
}

impl Scale<f32> for Complex<f32> {
    #[inline(always)]
    fn scale(self, by: f32) -> Self {
        Complex::new(self.re * by, self.im * by)
    }
}

/// `inout *= input`, element by element.
///
/// The caller guarantees both grids have the same extents and both buffers
/// hold their grids.
pub fn multiply<T: Copy, S: Scale<T>>(grid_in: &Grid, input: &[T], grid_inout: &Grid, inout: &mut [S]) {
    let n1 = grid_inout.extent(0);
    for (row_in, row_out) in grid_in.rows().zip(grid_inout.rows()) {
        let src = &input[row_in.offset..row_in.offset + n1];
        let dst = &mut inout[row_out.offset..row_out.offset + n1];
        for (d, &s) in dst.iter_mut().zip(src) {
            *d = d.scale(s);
        }
    }
}

/// `inout *= s1(j1) * .. * sN(jN)`.
///
/// The caller guarantees one factor per active axis, each as long as its axis.
pub fn multiply_separable<T, S>(grid: &Grid, factors: &[&[T]], inout: &mut [S])
where
    T: Copy + Mul<Output = T>,
    S: Scale<T>,
{
    let n1 = grid.extent(0);
    let fastest = factors[0];
    for row in grid.rows() {
        let row_factor = factors
            .iter()
            .enumerate()
            .skip(1)
            .map(|(axis, f)| f[row.index[axis]])
            .reduce(|acc, v| acc * v);

        let dst = &mut inout[row.offset..row.offset + n1];
        match row_factor {
            Some(r) => {
                for (d, &s) in dst.iter_mut().zip(fastest) {
                    *d = d.scale(s * r);
                }
            }
            None => {
                for (d, &s) in dst.iter_mut().zip(fastest) {
                    *d = d.scale(s);
                }
            }
        }
    }
}

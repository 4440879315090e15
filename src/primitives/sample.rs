//! Sample element types and their coefficient containers.
//!
//! ## Purpose
//!
//! Kernels are written once over the `Sample` trait and instantiated for
//! single precision real (`f32`) and complex (`Complex<f32>`) arrays.
//!
//! ## Design notes
//!
//! * **Lanes**: A sample is widened to an `f64x2` pair (real part, imaginary
//!   part). Real samples carry a zero second lane, so accumulation and
//!   evaluation share one code path and complex parts advance in lockstep.
//! * **Precision**: All arithmetic happens in `f64`; results are rounded to
//!   `f32` once, when written back.
//! * **Coefficients**: Real fits produce a `Vec<f64>`; complex fits produce a
//!   `ComplexCoefficients` pair with one block per part, both in monomial order.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::Debug;
use num_complex::Complex;
use wide::f64x2;

/// Element type of a detrendable array.
pub trait Sample: Copy + Debug + PartialEq + Send + Sync + 'static {
    /// Number of meaningful lanes (1 for real, 2 for complex).
    const LANES: usize;

    /// Coefficient container produced by a fit.
    type Coefficients: TrendCoefficients;

    /// Widen to an `(re, im)` lane pair.
    fn to_lanes(self) -> f64x2;

    /// Round an `(re, im)` lane pair back to the element type.
    fn from_lanes(lanes: f64x2) -> Self;

    /// True when every component is finite.
    fn is_finite(self) -> bool;
}

impl Sample for f32 {
    const LANES: usize = 1;
    type Coefficients = Vec<f64>;

    #[inline(always)]
    fn to_lanes(self) -> f64x2 {
        f64x2::new([self as f64, 0.0])
    }

    #[inline(always)]
    fn from_lanes(lanes: f64x2) -> Self {
        lanes.to_array()[0] as f32
    }

    #[inline(always)]
    fn is_finite(self) -> bool {
        f32::is_finite(self)
    }
}

impl Sample for Complex<f32> {
    const LANES: usize = 2;
    type Coefficients = ComplexCoefficients;

    #[inline(always)]
    fn to_lanes(self) -> f64x2 {
        f64x2::new([self.re as f64, self.im as f64])
    }

    #[inline(always)]
    fn from_lanes(lanes: f64x2) -> Self {
        let [re, im] = lanes.to_array();
        Complex::new(re as f32, im as f32)
    }

    #[inline(always)]
    fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
}

// ============================================================================
// Coefficient Containers
// ============================================================================

/// Storage for fitted polynomial coefficients, one block per lane.
pub trait TrendCoefficients: Clone + Debug + PartialEq + Send + Sync {
    /// Assemble from per-lane blocks; real containers drop the second block.
    fn from_blocks(re: Vec<f64>, im: Vec<f64>) -> Self;

    /// All-zero coefficients of `len` monomials.
    fn zeros(len: usize) -> Self;

    /// Coefficient block of `lane` (0 = real part, 1 = imaginary part).
    fn block(&self, lane: usize) -> &[f64];

    /// Number of monomials per block.
    fn n_terms(&self) -> usize;
}

impl TrendCoefficients for Vec<f64> {
    #[inline]
    fn from_blocks(re: Vec<f64>, _im: Vec<f64>) -> Self {
        re
    }

    fn zeros(len: usize) -> Self {
        vec![0.0; len]
    }

    #[inline]
    fn block(&self, _lane: usize) -> &[f64] {
        self
    }

    #[inline]
    fn n_terms(&self) -> usize {
        self.len()
    }
}

/// Coefficients of a complex fit: real and imaginary parts fitted separately.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ComplexCoefficients {
    /// Coefficients fitted to the real parts.
    pub re: Vec<f64>,
    /// Coefficients fitted to the imaginary parts.
    pub im: Vec<f64>,
}

impl ComplexCoefficients {
    /// Legacy single-buffer layout: real block followed by imaginary block.
    pub fn to_concatenated(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.re.len() + self.im.len());
        out.extend_from_slice(&self.re);
        out.extend_from_slice(&self.im);
        out
    }

    /// Split a legacy concatenated buffer; `None` when its length is odd.
    pub fn from_concatenated(buffer: &[f64]) -> Option<Self> {
        if buffer.len() % 2 != 0 {
            return None;
        }
        let (re, im) = buffer.split_at(buffer.len() / 2);
        Some(Self {
            re: re.to_vec(),
            im: im.to_vec(),
        })
    }
}

impl TrendCoefficients for ComplexCoefficients {
    #[inline]
    fn from_blocks(re: Vec<f64>, im: Vec<f64>) -> Self {
        Self { re, im }
    }

    fn zeros(len: usize) -> Self {
        Self {
            re: vec![0.0; len],
            im: vec![0.0; len],
        }
    }

    #[inline]
    fn block(&self, lane: usize) -> &[f64] {
        if lane == 0 { &self.re } else { &self.im }
    }

    #[inline]
    fn n_terms(&self) -> usize {
        self.re.len()
    }
}

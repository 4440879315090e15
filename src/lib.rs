//! # isp-rs: Array Preparation Kernels for Frequency-Domain Processing
//!
//! Numerical kernels for 1-, 2-, 3- and 4-dimensional arrays of single
//! precision real (`f32`) and complex (`Complex<f32>`) samples, used to get
//! image and signal data ready for a Fourier transform.
//!
//! ## What is in the box?
//!
//! - **Polynomial detrending**: fit and subtract a polynomial of any order in
//!   up to four coordinates by least squares. The normal equations depend on
//!   the array shape only, so they are factored once and reused for every
//!   array of that shape.
//! - **FFT-friendly sizes**: find the nearest integer of the form
//!   `2^m * 3^a * 5^b * .. * 19^g` above or below a target.
//! - **Average-slope removal**: cheap first-order detrending from half means.
//! - **Padding**: grow an array with a constant or with ramps that make it
//!   continuous when treated as periodic.
//! - **Multiplication**: element-wise and separable (outer product) weighting,
//!   e.g. for apodization windows.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use isp_rs::prelude::*;
//!
//! // An 8 x 4 image with a tilted background
//! let grid = Grid::new(&[8, 4])?;
//! let mut image: Vec<f32> = (0..32).map(|i| 3.0 + 0.5 * (i % 8) as f32 - 0.25 * (i / 8) as f32).collect();
//!
//! // Factor the normal equations once
//! let fit = Detrend::new().order(1).build(&grid)?;
//!
//! // Fit and subtract the plane
//! let coeffs = fit.detrend(&mut image)?;
//! assert_eq!(coeffs.len(), 3);
//! assert!(image.iter().all(|v| v.abs() < 1e-4));
//! # Result::<(), IspError>::Ok(())
//! ```
//!
//! ### Choosing a transform size
//!
//! ```rust
//! use isp_rs::prelude::*;
//!
//! assert_eq!(nice_size(100, 0, 5)?, 100);
//! assert_eq!(nice_size(101, 0, 5)?, 108);
//! assert_eq!(nice_small_size(101, 0, 5)?, 100);
//! # Result::<(), IspError>::Ok(())
//! ```
//!
//! ### Complex data and reuse
//!
//! Complex arrays are fitted part by part against the same matrix. A
//! `DetrendWorkspace` per thread removes per-call allocations:
//!
//! ```rust
//! use isp_rs::prelude::*;
//!
//! let grid = Grid::new(&[16])?;
//! let fit = Detrend::new().order(2).build(&grid)?;
//! let mut workspace = fit.workspace();
//!
//! for shift in 0..3 {
//!     let mut data: Vec<Complex<f32>> = (0..16)
//!         .map(|j| Complex::new(j as f32 + shift as f32, 1.0))
//!         .collect();
//!     let coeffs = fit.detrend_with(&mut data, &mut workspace)?;
//!     assert_eq!(coeffs.re.len(), 3);
//! }
//! # Result::<(), IspError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every fallible operation returns `Result<_, IspError>`:
//!
//! - **`IspError::InvalidSize`**: no FFT-friendly size within bounds.
//! - **`IspError::SingularSystem`**: the order is too high for the array shape.
//! - **`IspError::SolveFailure`**: one particular array could not be fitted
//!   (e.g. it contains NaN); the `PolyFit` stays usable.
//!
//! ```rust
//! use isp_rs::prelude::*;
//!
//! let grid = Grid::new(&[3, 3])?;
//! match Detrend::new().order(3).build(&grid) {
//!     Err(IspError::SingularSystem { order, extent }) => {
//!         assert_eq!((order, extent), (3, Some(3)));
//!     }
//!     other => panic!("unexpected: {:?}", other),
//! }
//! # Result::<(), IspError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! Disable default features to remove the standard library dependency; an
//! allocator is still required:
//!
//! ```toml
//! [dependencies]
//! isp-rs = { version = "0.1", default-features = false }
//! ```
//!
//! ## Parameters
//!
//! | Parameter        | Default         | Range/Options                         | Description                          |
//! |------------------|-----------------|---------------------------------------|--------------------------------------|
//! | **order**        | 1               | [0, min extent)                       | Total degree of the polynomial trend |
//! | **factorizer**   | `LuFactorizer`  | `LuFactorizer`, `CholeskyFactorizer`  | Solver for the normal equations      |
//! | **check_finite** | false           | true/false                            | Reject NaN/inf samples up front      |
//!
//! ## Array Layout
//!
//! A [`Grid`](prelude::Grid) describes extents `n1..nN` with the fastest
//! varying axis first. Arrays may live inside larger allocations: with
//! windows `w1..w(N-1)` the sample at `(j1, .., jN)` is stored at
//! `j1 + w1 * (j2 + w2 * (j3 + w3 * j4))`. Samples outside the extents are
//! never read or written by detrending.
//!
//! ## Logging
//!
//! The crate logs through the [`log`](https://docs.rs/log) facade: `debug!`
//! when a normal matrix is built or factored, `warn!` when it is singular.
//! Install any logger to see the messages.
//!
//! ## References
//!
//! - Bendat, J. S. & Piersol, A. G. (1971). *Random Data: Analysis and Measurement Procedures*, p. 288.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the array geometry (`Grid`), sample element types, scratch
// buffers and the error type.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains the FFT size search, monomial indexing, fit coordinates and the
// linear solvers.
mod math;

// Layer 3: Algorithms - array kernels.
//
// Contains normal-matrix assembly, fitting, subtraction, average-slope
// removal, padding and multiplication.
mod algorithms;

// Layer 4: Engine - validation and caching.
//
// Contains `PolyFit`, workspaces, the validator and the validated stateless
// operations.
mod engine;

// High-level fluent API for detrending.
//
// Provides the `Detrend` builder and re-exports the free functions.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard isp-rs prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use isp_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        AverageSlope, CholeskyFactorizer, Complex, ComplexCoefficients, DEFAULT_ORDER,
        DetrendBuilder as Detrend, DetrendWorkspace, Factorizer, Grid, IspError, LuFactorizer,
        MAX_DIMS, MonomialIndex, PolyFit, SIZE_LIMIT, Sample, Scale, TrendCoefficients, is_nice,
        monomial_count, multiply, multiply_separable, nice_size, nice_small_size, pad_constant,
        pad_ramp, remove_average_slope,
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal array kernels.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal validation and caching engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}

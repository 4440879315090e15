//! Error types for detrending, padding and size search.
//!
//! ## Purpose
//!
//! This module defines `IspError`, the single error type returned by every
//! fallible operation in the crate.
//!
//! ## Design notes
//!
//! * **Explicit**: Failures are reported through `Result`, never through
//!   sentinel values or silently truncated output.
//! * **Scoped**: A `SolveFailure` concerns one fit call only; the shared
//!   factorization stays valid for other arrays.
//! * **no_std**: `Display` is implemented by hand; `std::error::Error` is only
//!   implemented with the `std` feature.
//!
//! ## Key concepts
//!
//! * **InvalidSize**: No FFT-friendly size exists within the representable bounds.
//! * **SingularSystem**: The normal equations cannot be factored for this grid and order.
//! * **SolveFailure**: The solve step failed for one particular array.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;

// External dependencies
use core::fmt;

/// Errors reported by the crate.
#[derive(Debug, Clone, PartialEq)]
pub enum IspError {
    /// No integer of the requested factored form exists within bounds.
    InvalidSize {
        /// Requested target size.
        target: i64,
        /// Requested minimum power-of-two exponent.
        min_exp2: i32,
    },

    /// The normal-equation matrix is singular.
    ///
    /// `extent` is the offending axis extent when the degeneracy is structural
    /// (order too high for the axis) and `None` when the factorizer rejected
    /// the matrix.
    SingularSystem {
        /// Polynomial order.
        order: usize,
        /// Offending axis extent, if the order is too high for an axis.
        extent: Option<usize>,
    },

    /// The solve step did not produce finite coefficients.
    SolveFailure,

    /// Number of dimensions is outside `1..=4`.
    InvalidDimensions(usize),

    /// An axis has zero extent.
    EmptyAxis {
        /// Zero-based axis number.
        axis: usize,
    },

    /// A window is narrower than the extent it has to hold.
    InvalidWindow {
        /// Zero-based axis number.
        axis: usize,
        /// Window width supplied.
        window: usize,
        /// Extent that has to fit in the window.
        extent: usize,
    },

    /// The sample buffer cannot hold the described grid.
    BufferTooSmall {
        /// Buffer length supplied.
        got: usize,
        /// Minimum length required.
        need: usize,
    },

    /// A coefficient block does not match the number of monomials.
    CoefficientLength {
        /// Length supplied.
        got: usize,
        /// Length expected.
        expected: usize,
    },

    /// A separable factor does not match its axis extent.
    FactorLength {
        /// Zero-based axis number.
        axis: usize,
        /// Length supplied.
        got: usize,
        /// Length expected.
        expected: usize,
    },

    /// Two grids that must describe the same extents do not.
    MismatchedGrids,

    /// A grid index lies outside its axis.
    IndexOutOfBounds {
        /// Zero-based axis number.
        axis: usize,
        /// Index supplied.
        index: usize,
        /// Extent of the axis.
        extent: usize,
    },

    /// A sample or parameter is NaN or infinite.
    InvalidNumericValue(String),

    /// A builder parameter was set more than once.
    DuplicateParameter {
        /// Name of the parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for IspError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IspError::InvalidSize { target, min_exp2 } => write!(
                f,
                "No FFT-friendly size for target {} with minimum power of two 2^{}",
                target, min_exp2
            ),
            IspError::SingularSystem { order, extent } => match extent {
                Some(extent) => write!(
                    f,
                    "Singular system: order {} needs more than {} samples along an axis",
                    order, extent
                ),
                None => write!(f, "Singular system: factorization failed for order {}", order),
            },
            IspError::SolveFailure => write!(f, "Solve failed: coefficients are not finite"),
            IspError::InvalidDimensions(d) => {
                write!(f, "Invalid dimensions: {} (must be in [1, 4])", d)
            }
            IspError::EmptyAxis { axis } => write!(f, "Axis {} has zero extent", axis),
            IspError::InvalidWindow {
                axis,
                window,
                extent,
            } => write!(
                f,
                "Invalid window on axis {}: {} (must be at least {})",
                axis, window, extent
            ),
            IspError::BufferTooSmall { got, need } => write!(
                f,
                "Buffer too small: got {} elements, need at least {}",
                got, need
            ),
            IspError::CoefficientLength { got, expected } => write!(
                f,
                "Coefficient length mismatch: got {}, expected {}",
                got, expected
            ),
            IspError::FactorLength {
                axis,
                got,
                expected,
            } => write!(
                f,
                "Factor length mismatch on axis {}: got {}, expected {}",
                axis, got, expected
            ),
            IspError::MismatchedGrids => write!(f, "Grids have different extents"),
            IspError::IndexOutOfBounds {
                axis,
                index,
                extent,
            } => write!(
                f,
                "Index {} out of bounds on axis {} (extent {})",
                index, axis, extent
            ),
            IspError::InvalidNumericValue(msg) => write!(f, "Invalid numeric value: {}", msg),
            IspError::DuplicateParameter { parameter } => write!(
                f,
                "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                parameter
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for IspError {}

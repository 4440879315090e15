//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides pure mathematical building blocks:
//! - FFT-friendly size search
//! - Monomial exponent indexing
//! - Fit coordinates and per-axis power tables
//! - Dense linear solvers for the normal equations
//!
//! These are reusable mathematical building blocks with no array-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Fit coordinates and power tables.
pub mod coordinates;

/// Factor-once, solve-many linear algebra backends.
pub mod linalg;

/// Monomial exponent tuples and coefficient indices.
pub mod multi_index;

/// FFT-friendly size search.
pub mod nicesize;

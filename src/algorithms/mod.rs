//! Layer 3: Algorithms
//!
//! # Purpose
//!
//! This layer contains the array kernels:
//! - Normal-equation matrix assembly
//! - Right-hand side projection and coefficient solving
//! - Trend evaluation and subtraction
//! - Average-slope trend removal
//! - Constant and ramp padding
//! - Element-wise and separable multiplication
//!
//! Kernels assume validated input; the engine layer checks grids, buffers and
//! coefficient lengths before calling them.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Average-slope trend removal.
pub mod avgslope;

/// Right-hand side projection and solving.
pub mod fit;

/// Element-wise multiplication.
pub mod multiply;

/// Normal-equation matrix assembly.
pub mod normal_matrix;

/// Constant and ramp padding.
pub mod padding;

/// Trend evaluation and subtraction.
pub mod subtract;

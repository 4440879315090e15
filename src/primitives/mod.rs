//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the data structures shared by every kernel:
//! - Array geometry (`Grid`) and row traversal
//! - Sample element types (`f32`, `Complex<f32>`) and coefficient containers
//! - Reusable scratch buffers
//! - The crate error type
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
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Reusable scratch buffers.
pub mod buffer;

/// Error type.
pub mod errors;

/// Array geometry.
pub mod grid;

/// Sample element types.
pub mod sample;

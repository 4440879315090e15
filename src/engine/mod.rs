//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer owns the validated, user-reachable operations:
//! - The `PolyFit` cache of factored normal equations
//! - Per-thread scratch workspaces
//! - Input validation
//! - Average-slope removal, padding and multiplication entry points
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Validated stateless array operations.
pub mod ops;

/// Factored normal equations and detrending.
pub mod polyfit;

/// Input validation.
pub mod validator;

/// Reusable scratch space.
pub mod workspace;

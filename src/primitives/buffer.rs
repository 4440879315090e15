//! Memory management and buffer recycling for detrending.
//!
//! ## Purpose
//!
//! This module provides reusable scratch storage so that repeated fit and
//! subtract calls over many arrays of the same shape do not allocate.
//!
//! ## Design notes
//!
//! * **Lazy Expansion**: Buffers are grown on demand via `ensure_capacity` but never shrunk.
//! * **Per-thread**: Buffers are explicitly passed, one per thread; the shared
//!   `PolyFit` holds none of them.
//!
//! ## Key concepts
//!
//! * **Slot**: A reusable vector with capacity management.
//! * **FittingBuffer**: Right-hand side and row projections for the fitter.
//! * **EvaluationBuffer**: Per-row polynomial in the fastest coordinate for the subtractor.
//!
//! ## Invariants
//!
//! * Buffers are only logically cleared, not deallocated, between calls.
//!
//! ## Non-goals
//!
//! * Thread-local automatic caching.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::ops::{Deref, DerefMut};
use wide::f64x2;

/// Growable scratch vector that keeps its allocation across calls.
#[derive(Debug, Clone)]
pub struct Slot<T>(Vec<T>);

impl<T> Slot<T> {
    /// Empty slot with room for `capacity` elements.
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Grow to at least `capacity`. Never shrinks.
    #[inline]
    pub fn ensure_capacity(&mut self, capacity: usize) {
        if self.0.capacity() < capacity {
            self.0.reserve(capacity - self.0.len());
        }
    }
}

impl<T: Copy> Slot<T> {
    /// Reset the slot to `len` copies of `value`, reusing its allocation.
    #[inline]
    pub fn reset(&mut self, len: usize, value: T) {
        self.0.clear();
        self.0.resize(len, value);
    }
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<T> Deref for Slot<T> {
    type Target = Vec<T>;
    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> DerefMut for Slot<T> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

// ============================================================================
// Internal Buffers
// ============================================================================

/// Scratch space for computing the right-hand side of the normal equations.
#[derive(Debug, Clone, Default)]
pub struct FittingBuffer {
    /// Projections of the samples on every monomial, `(re, im)` lanes.
    pub rhs: Slot<f64x2>,
    /// Projections of one row on the powers of the fastest coordinate.
    pub row: Slot<f64x2>,
}

impl FittingBuffer {
    /// Create a fitting buffer for `n_terms` monomials of the given order.
    pub fn new(n_terms: usize, order: usize) -> Self {
        Self {
            rhs: Slot::new(n_terms),
            row: Slot::new(order + 1),
        }
    }

    /// Ensure capacities for `n_terms` monomials of the given order.
    pub fn ensure_capacity(&mut self, n_terms: usize, order: usize) {
        self.rhs.ensure_capacity(n_terms);
        self.row.ensure_capacity(order + 1);
    }
}

/// Scratch space for evaluating the fitted polynomial row by row.
#[derive(Debug, Clone, Default)]
pub struct EvaluationBuffer {
    /// Coefficients packed as `(re, im)` lanes.
    pub coeffs: Slot<f64x2>,
    /// Polynomial in the fastest coordinate for the current row, `(re, im)` lanes.
    pub row_poly: Slot<f64x2>,
}

impl EvaluationBuffer {
    /// Create an evaluation buffer for `n_terms` monomials of the given order.
    pub fn new(n_terms: usize, order: usize) -> Self {
        Self {
            coeffs: Slot::new(n_terms),
            row_poly: Slot::new(order + 1),
        }
    }

    /// Ensure capacities for `n_terms` monomials of the given order.
    pub fn ensure_capacity(&mut self, n_terms: usize, order: usize) {
        self.coeffs.ensure_capacity(n_terms);
        self.row_poly.ensure_capacity(order + 1);
    }
}

//! Workspace for reusable detrending buffers.
//!
//! This module provides a pre-allocated workspace so that fitting and
//! subtracting many arrays of one shape does not allocate per array. Each
//! thread working with a shared `PolyFit` owns its own workspace.

// Internal dependencies
use crate::primitives::buffer::{EvaluationBuffer, FittingBuffer};

/// A workspace containing pre-allocated buffers for fit and subtract calls.
#[derive(Debug, Clone, Default)]
pub struct DetrendWorkspace {
    /// Buffer for the right-hand side projection.
    pub fitting_buffer: FittingBuffer,
    /// Buffer for row-wise trend evaluation.
    pub evaluation_buffer: EvaluationBuffer,
}

impl DetrendWorkspace {
    /// Create a workspace sized for `n_terms` monomials of the given order.
    pub fn new(n_terms: usize, order: usize) -> Self {
        Self {
            fitting_buffer: FittingBuffer::new(n_terms, order),
            evaluation_buffer: EvaluationBuffer::new(n_terms, order),
        }
    }

    /// Grow the buffers to fit `n_terms` monomials of the given order.
    ///
    /// Note: Never shrinks.
    pub fn ensure_capacity(&mut self, n_terms: usize, order: usize) {
        self.fitting_buffer.ensure_capacity(n_terms, order);
        self.evaluation_buffer.ensure_capacity(n_terms, order);
    }
}

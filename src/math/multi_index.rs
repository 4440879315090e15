//! Monomial exponent tuples and their linear coefficient indices.
//!
//! ## Purpose
//!
//! A polynomial of order `p` in `N` coordinates (N in 1..=4) has one
//! coefficient per exponent tuple `(k1, .., kN)` with `k1 + .. + kN <= p`.
//! This module maps each tuple to its position in the coefficient vector and
//! enumerates the tuples in that order.
//!
//! ## Design notes
//!
//! * **Ordering**: `k1` varies fastest, then `k2`, `k3`, `k4`, mirroring the
//!   array axis order. Tuple order is lexicographic on `(kN, .., k1)`.
//! * **Closed form**: One formula covers every dimensionality. With
//!   `r_j = p - (k_{j+1} + .. + k_N)` the 1-based index is
//!
//!   ```text
//!   a(k) = 1 + sum_{j=1..N} [ C(r_j + j, j) - C(r_j - k_j + j, j) ]
//!   ```
//!
//!   Each bracket counts the tuples that share the slower exponents and have a
//!   smaller `k_j` (hockey-stick identity), so no search is needed.
//! * **Count**: `C(p + N, N)` monomials.
//!
//! ## Invariants
//!
//! * `linear_index` is a bijection from valid tuples onto `1..=len()`.
//! * `tuples()` yields the tuples in increasing index order.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::errors::IspError;
use crate::primitives::grid::MAX_DIMS;

/// Exponent tuple; unused trailing components are zero.
pub type Exponents = [usize; MAX_DIMS];

/// Binomial coefficient `C(n, k)`, exact for the small arguments used here.
#[inline]
pub const fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = if k > n - k { n - k } else { k };
    let mut acc = 1usize;
    let mut i = 1;
    while i <= k {
        // acc * (n - k + i) is divisible by i at every step
        acc = acc * (n - k + i) / i;
        i += 1;
    }
    acc
}

/// Number of monomials of total degree `<= order` in `ndim` coordinates.
#[inline]
pub const fn monomial_count(ndim: usize, order: usize) -> usize {
    binomial(order + ndim, ndim)
}

/// Map between exponent tuples and coefficient positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonomialIndex {
    ndim: usize,
    order: usize,
    len: usize,
}

impl MonomialIndex {
    /// Index map for `ndim` coordinates (1..=4) and the given order.
    pub fn new(ndim: usize, order: usize) -> Result<Self, IspError> {
        if ndim == 0 || ndim > MAX_DIMS {
            return Err(IspError::InvalidDimensions(ndim));
        }
        Ok(Self {
            ndim,
            order,
            len: monomial_count(ndim, order),
        })
    }

    /// Number of coordinates.
    #[inline]
    pub fn ndim(&self) -> usize {
        self.ndim
    }

    /// Polynomial order.
    #[inline]
    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of monomials (coefficients per block).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false: the constant term is always present.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// 1-based coefficient index `a(k)` of an exponent tuple.
    ///
    /// Returns `None` when `k` does not have `ndim` components or its total
    /// degree exceeds the order.
    pub fn linear_index(&self, k: &[usize]) -> Option<usize> {
        if k.len() != self.ndim {
            return None;
        }
        let mut padded = [0usize; MAX_DIMS];
        padded[..self.ndim].copy_from_slice(k);
        if padded.iter().sum::<usize>() > self.order {
            return None;
        }
        Some(self.offset(&padded) + 1)
    }

    /// 0-based coefficient position of a valid exponent tuple.
    ///
    /// The caller guarantees the total degree does not exceed the order and
    /// components past `ndim` are zero.
    #[inline]
    pub fn offset(&self, k: &Exponents) -> usize {
        let mut pos = 0;
        // Budget left for axes 0..=j once the slower exponents are spent
        let mut remaining = self.order;
        for j in (0..self.ndim).rev() {
            let dims = j + 1;
            pos += binomial(remaining + dims, dims) - binomial(remaining - k[j] + dims, dims);
            remaining -= k[j];
        }
        pos
    }

    /// Iterate over the exponent tuples in coefficient order.
    #[inline]
    pub fn tuples(&self) -> Tuples {
        Tuples {
            ndim: self.ndim,
            order: self.order,
            next: Some([0; MAX_DIMS]),
        }
    }

    /// All exponent tuples in coefficient order.
    pub fn to_vec(&self) -> Vec<Exponents> {
        let mut out = Vec::with_capacity(self.len);
        out.extend(self.tuples());
        out
    }
}

/// Iterator over exponent tuples in coefficient order.
#[derive(Debug, Clone)]
pub struct Tuples {
    ndim: usize,
    order: usize,
    next: Option<Exponents>,
}

impl Iterator for Tuples {
    type Item = Exponents;

    fn next(&mut self) -> Option<Exponents> {
        let current = self.next?;

        // Increment k1; on overflow of the total-degree budget, carry into the
        // next slower exponent and reset all faster ones.
        let mut succ = current;
        let mut axis = 0;
        self.next = loop {
            if axis == self.ndim {
                break None;
            }
            succ[axis] += 1;
            let total: usize = succ[axis..self.ndim].iter().sum();
            if total <= self.order {
                break Some(succ);
            }
            succ[axis] = 0;
            axis += 1;
        };

        Some(current)
    }
}

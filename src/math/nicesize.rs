//! FFT-friendly size search.
//!
//! ## Purpose
//!
//! This module finds array extents that fast Fourier transform libraries
//! handle efficiently: integers of the form `2^m * q` where `q` only has odd
//! prime factors no larger than 19.
//!
//! ## Design notes
//!
//! * **No sieve**: Odd smooth numbers are enumerated depth-first as products of
//!   the allowed primes, bounded by the search limit. For each odd part the best
//!   power of two is chosen directly and the extremal candidate kept.
//! * **Bounds**: Results must fit in a 32-bit signed integer with room to spare,
//!   since that is the index type of common FFT libraries. Targets above
//!   `i32::MAX / 2` are rejected.
//!
//! ## Invariants
//!
//! * `nice_size(t, ..) >= t` and no acceptable integer lies in `[t, result)`.
//! * `nice_small_size(t, ..) <= t` and no acceptable integer lies in `(result, t]`.
//! * The power-of-two exponent of every result is at least `max(0, min_exp2)`.

// Internal dependencies
use crate::primitives::errors::IspError;

/// Largest target (and smallest rejected power-of-two floor) accepted by the search.
pub const SIZE_LIMIT: i64 = (i32::MAX / 2) as i64;

/// Odd primes the search may use, in increasing order.
pub const ODD_PRIMES: [u64; 7] = [3, 5, 7, 11, 13, 17, 19];

/// Smallest integer `>= target` of the form `2^m * (odd primes <= min(19, max_odd_prime))`
/// with `m >= max(0, min_exp2)`.
///
/// Fails with `IspError::InvalidSize` when `target > i32::MAX / 2` or when
/// `2^max(0, min_exp2)` alone exceeds that bound.
pub fn nice_size(target: i64, min_exp2: i32, max_odd_prime: i32) -> Result<usize, IspError> {
    let invalid = IspError::InvalidSize { target, min_exp2 };
    if target > SIZE_LIMIT {
        return Err(invalid);
    }
    let floor = power_floor(min_exp2).ok_or(invalid.clone())?;
    if floor > SIZE_LIMIT as u64 {
        return Err(invalid);
    }

    let t = target.max(1) as u64;
    let bound = t.max(floor).next_power_of_two();
    let primes = allowed_primes(max_odd_prime);

    let mut best = bound;
    visit_odd_smooth(primes.as_slice(), 0, 1, bound, &mut |q| {
        let mut candidate = q * floor;
        while candidate < t {
            candidate <<= 1;
        }
        if candidate < best {
            best = candidate;
        }
    });

    Ok(best as usize)
}

/// Largest integer `<= target` of the form `2^m * (odd primes <= min(19, max_odd_prime))`
/// with `m >= max(0, min_exp2)`.
///
/// Fails with `IspError::InvalidSize` when `target > i32::MAX / 2` or when
/// `2^max(0, min_exp2)` exceeds `target`.
pub fn nice_small_size(target: i64, min_exp2: i32, max_odd_prime: i32) -> Result<usize, IspError> {
    let invalid = IspError::InvalidSize { target, min_exp2 };
    if target > SIZE_LIMIT || target < 1 {
        return Err(invalid);
    }
    let t = target as u64;
    let floor = power_floor(min_exp2).ok_or(invalid.clone())?;
    if floor > t {
        return Err(invalid);
    }

    let primes = allowed_primes(max_odd_prime);

    let mut best = floor;
    visit_odd_smooth(primes.as_slice(), 0, 1, t / floor, &mut |q| {
        let mut candidate = q * floor;
        while candidate * 2 <= t {
            candidate <<= 1;
        }
        if candidate > best {
            best = candidate;
        }
    });

    Ok(best as usize)
}

/// True when `value` has the factored form accepted by the size search.
pub fn is_nice(value: u64, min_exp2: i32, max_odd_prime: i32) -> bool {
    if value == 0 {
        return false;
    }
    let m0 = min_exp2.max(0) as u32;
    if value.trailing_zeros() < m0 {
        return false;
    }
    let mut rest = value >> value.trailing_zeros();
    for &p in allowed_primes(max_odd_prime).as_slice() {
        while rest % p == 0 {
            rest /= p;
        }
    }
    rest == 1
}

// ============================================================================
// Helpers
// ============================================================================

/// `2^max(0, min_exp2)`, or `None` when it does not fit in 32 bits.
#[inline]
fn power_floor(min_exp2: i32) -> Option<u64> {
    let m0 = min_exp2.max(0) as u32;
    if m0 >= 32 { None } else { Some(1u64 << m0) }
}

/// Fixed-capacity list of the usable odd primes.
struct PrimeSet {
    primes: [u64; ODD_PRIMES.len()],
    len: usize,
}

impl PrimeSet {
    #[inline]
    fn as_slice(&self) -> &[u64] {
        &self.primes[..self.len]
    }
}

fn allowed_primes(max_odd_prime: i32) -> PrimeSet {
    let mut set = PrimeSet {
        primes: [0; ODD_PRIMES.len()],
        len: 0,
    };
    for &p in ODD_PRIMES.iter() {
        if (p as i64) <= max_odd_prime as i64 {
            set.primes[set.len] = p;
            set.len += 1;
        }
    }
    set
}

/// Call `f` on every product of `primes[start..]` times `q` that stays `<= bound`.
///
/// Primes are taken in non-decreasing order so each product is visited once.
fn visit_odd_smooth(primes: &[u64], start: usize, q: u64, bound: u64, f: &mut impl FnMut(u64)) {
    f(q);
    for (i, &p) in primes.iter().enumerate().skip(start) {
        let next = q * p;
        if next > bound {
            // Primes are sorted; larger ones overshoot too.
            break;
        }
        visit_odd_smooth(primes, i, next, bound, f);
    }
}

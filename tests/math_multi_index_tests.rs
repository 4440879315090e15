#![cfg(feature = "dev")]
//! Tests for monomial exponent indexing.
//!
//! ## Test Organization
//!
//! 1. **Counting** - Binomial counts and construction
//! 2. **Ordering** - Enumeration order and bijection
//! 3. **Published Formulas** - Agreement with the per-dimension closed forms

use std::collections::BTreeSet;

use isp_rs::internals::math::multi_index::{MonomialIndex, binomial, monomial_count};
use isp_rs::internals::primitives::errors::IspError;

// ============================================================================
// Counting Tests
// ============================================================================

#[test]
fn test_binomial() {
    assert_eq!(binomial(0, 0), 1);
    assert_eq!(binomial(5, 2), 10);
    assert_eq!(binomial(10, 4), 210);
    assert_eq!(binomial(3, 4), 0);
}

#[test]
fn test_monomial_count() {
    assert_eq!(monomial_count(1, 5), 6);
    assert_eq!(monomial_count(2, 1), 3);
    assert_eq!(monomial_count(2, 2), 6);
    assert_eq!(monomial_count(3, 1), 4);
    assert_eq!(monomial_count(4, 2), 15);
    assert_eq!(monomial_count(3, 0), 1);
}

#[test]
fn test_monomial_index_rejects_bad_dimensions() {
    assert_eq!(
        MonomialIndex::new(0, 1),
        Err(IspError::InvalidDimensions(0))
    );
    assert_eq!(
        MonomialIndex::new(5, 1),
        Err(IspError::InvalidDimensions(5))
    );
}

// ============================================================================
// Ordering Tests
// ============================================================================

#[test]
fn test_two_dimensional_order() {
    let index = MonomialIndex::new(2, 2).unwrap();
    let tuples: Vec<[usize; 2]> = index.tuples().map(|k| [k[0], k[1]]).collect();
    assert_eq!(tuples, vec![[0, 0], [1, 0], [2, 0], [0, 1], [1, 1], [0, 2]]);

    assert_eq!(index.linear_index(&[0, 0]), Some(1));
    assert_eq!(index.linear_index(&[2, 0]), Some(3));
    assert_eq!(index.linear_index(&[0, 1]), Some(4));
    assert_eq!(index.linear_index(&[0, 2]), Some(6));
}

#[test]
fn test_linear_index_rejects_invalid_tuples() {
    let index = MonomialIndex::new(3, 2).unwrap();
    assert_eq!(index.linear_index(&[1, 1]), None);
    assert_eq!(index.linear_index(&[1, 1, 1]), None);
    assert_eq!(index.linear_index(&[0, 0, 3]), None);
    assert_eq!(index.linear_index(&[0, 1, 1]), Some(9));
}

#[test]
fn test_index_is_bijection() {
    for ndim in 1..=4 {
        for order in 0..=6 {
            let index = MonomialIndex::new(ndim, order).unwrap();
            let tuples = index.to_vec();
            assert_eq!(tuples.len(), index.len());

            for (pos, k) in tuples.iter().enumerate() {
                assert!(k.iter().sum::<usize>() <= order);
                assert!(k[ndim..].iter().all(|&e| e == 0));
                assert_eq!(index.linear_index(&k[..ndim]), Some(pos + 1));
                assert_eq!(index.offset(k), pos);
            }
        }
    }
}

#[test]
fn test_index_covers_every_tuple() {
    // Enumerate all tuples with each exponent <= order independently
    for ndim in 1..=4usize {
        for order in 0..=4usize {
            let index = MonomialIndex::new(ndim, order).unwrap();
            let mut seen = BTreeSet::new();
            let side = order + 1;
            for flat in 0..side.pow(ndim as u32) {
                let mut k = vec![0usize; ndim];
                let mut rest = flat;
                for e in k.iter_mut() {
                    *e = rest % side;
                    rest /= side;
                }
                let a = index.linear_index(&k);
                if k.iter().sum::<usize>() <= order {
                    let a = a.unwrap();
                    assert!((1..=index.len()).contains(&a));
                    assert!(seen.insert(a), "index {} hit twice", a);
                } else {
                    assert_eq!(a, None);
                }
            }
            assert_eq!(seen.len(), index.len());
        }
    }
}

// ============================================================================
// Published Formula Tests
// ============================================================================

fn formula_2d(k1: i64, k2: i64, order: i64) -> i64 {
    k1 + 1 + (k2 * (2 * order + 3 - k2)) / 2
}

fn formula_3d(k1: i64, k2: i64, k3: i64, order: i64) -> i64 {
    k1 + 1
        + (k2 * (2 * order + 3 - k2 - 2 * k3)) / 2
        + (k3 * (11 + order * (12 + order * 3) + k3 * (-3 * order - 6 + k3))) / 6
}

fn formula_4d(k1: i64, k2: i64, k3: i64, k4: i64, order: i64) -> i64 {
    k1 + 1
        + (k2 * (2 * order + 3 - k2 - 2 * (k3 + k4))) / 2
        + (k3
            * (11
                + 3 * k4 * (k4 - 4)
                + 3 * order * (4 - 2 * k4 + order)
                + k3 * (k3 - 3 * (order - k4 + 2))))
            / 6
        + (k4
            * (2 * order - k4 + 5)
            * (10 + k4 * (k4 - 5 - 2 * order) + order * (2 * order + 10)))
            / 24
}

#[test]
fn test_matches_published_formulas() {
    for order in 0..=7usize {
        let o = order as i64;

        let index = MonomialIndex::new(1, order).unwrap();
        for k in index.tuples() {
            assert_eq!(index.linear_index(&k[..1]), Some(k[0] + 1));
        }

        let index = MonomialIndex::new(2, order).unwrap();
        for k in index.tuples() {
            let expected = formula_2d(k[0] as i64, k[1] as i64, o);
            assert_eq!(index.linear_index(&k[..2]), Some(expected as usize));
        }

        let index = MonomialIndex::new(3, order).unwrap();
        for k in index.tuples() {
            let expected = formula_3d(k[0] as i64, k[1] as i64, k[2] as i64, o);
            assert_eq!(index.linear_index(&k[..3]), Some(expected as usize));
        }

        let index = MonomialIndex::new(4, order).unwrap();
        for k in index.tuples() {
            let expected = formula_4d(k[0] as i64, k[1] as i64, k[2] as i64, k[3] as i64, o);
            assert_eq!(index.linear_index(&k[..4]), Some(expected as usize));
        }
    }
}

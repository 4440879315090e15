#![cfg(feature = "dev")]
//! Tests for normal-equation matrix assembly.
//!
//! ## Test Organization
//!
//! 1. **Structure** - Size, symmetry and independence from windows
//! 2. **Values** - Agreement with the naive per-point sum
//! 3. **Singular Systems** - Orders the grid cannot support

use approx::assert_relative_eq;

use isp_rs::internals::algorithms::normal_matrix::NormalMatrix;
use isp_rs::internals::math::coordinates::coordinate;
use isp_rs::internals::primitives::errors::IspError;
use isp_rs::internals::primitives::grid::Grid;

/// Gram matrix summed point by point over the grid.
fn naive_gram(extents: &[usize], tuples: &[[usize; 4]]) -> Vec<f64> {
    let m = tuples.len();
    let mut out = vec![0.0; m * m];
    let ext: Vec<usize> = (0..4).map(|i| *extents.get(i).unwrap_or(&1)).collect();
    for j4 in 0..ext[3] {
        for j3 in 0..ext[2] {
            for j2 in 0..ext[1] {
                for j1 in 0..ext[0] {
                    let idx = [j1, j2, j3, j4];
                    let monomials: Vec<f64> = tuples
                        .iter()
                        .map(|k| {
                            (0..extents.len())
                                .map(|axis| coordinate(idx[axis], ext[axis]).powi(k[axis] as i32))
                                .product::<f64>()
                        })
                        .collect();
                    for a in 0..m {
                        for b in 0..m {
                            out[a * m + b] += monomials[a] * monomials[b];
                        }
                    }
                }
            }
        }
    }
    out
}

// ============================================================================
// Structure Tests
// ============================================================================

#[test]
fn test_matrix_size_and_symmetry() {
    let grid = Grid::new(&[6, 5, 4]).unwrap();
    let normal = NormalMatrix::build(&grid, 2).unwrap();
    assert_eq!(normal.len(), 10);
    assert_eq!(normal.order(), 2);
    assert_eq!(normal.extents(), [6, 5, 4, 1]);

    let m = normal.matrix();
    assert_eq!(m.nrows(), 10);
    assert_eq!(m.ncols(), 10);
    for a in 0..10 {
        for b in 0..10 {
            assert_eq!(m[(a, b)], m[(b, a)]);
        }
    }
    // Constant-constant entry counts the samples
    assert_eq!(m[(0, 0)], 120.0);
}

#[test]
fn test_windows_do_not_change_matrix() {
    let plain = Grid::new(&[5, 4]).unwrap();
    let windowed = Grid::new(&[5, 4]).unwrap().with_windows(&[9]).unwrap();
    let a = NormalMatrix::build(&plain, 2).unwrap();
    let b = NormalMatrix::build(&windowed, 2).unwrap();
    assert_eq!(a, b);
}

// ============================================================================
// Value Tests
// ============================================================================

#[test]
fn test_matches_naive_sum() {
    let cases: [(&[usize], usize); 6] = [
        (&[9], 3),
        (&[5, 4], 2),
        (&[3, 7], 1),
        (&[4, 3, 5], 2),
        (&[3, 3, 3, 3], 2),
        (&[2, 3, 2, 4], 1),
    ];
    for (extents, order) in cases {
        let grid = Grid::new(extents).unwrap();
        let normal = NormalMatrix::build(&grid, order).unwrap();
        let tuples = normal.index().to_vec();
        let expected = naive_gram(extents, &tuples);
        let m = tuples.len();
        for a in 0..m {
            for b in 0..m {
                assert_relative_eq!(
                    normal.matrix()[(a, b)],
                    expected[a * m + b],
                    epsilon = 1e-12,
                    max_relative = 1e-12
                );
            }
        }
    }
}

#[test]
fn test_order_zero_is_sample_count() {
    let grid = Grid::new(&[3, 4, 5, 2]).unwrap();
    let normal = NormalMatrix::build(&grid, 0).unwrap();
    assert_eq!(normal.len(), 1);
    assert_eq!(normal.into_matrix()[(0, 0)], 120.0);
}

// ============================================================================
// Singular System Tests
// ============================================================================

#[test]
fn test_order_at_extent_is_singular() {
    let grid = Grid::new(&[8, 2]).unwrap();
    assert_eq!(
        NormalMatrix::build(&grid, 2),
        Err(IspError::SingularSystem {
            order: 2,
            extent: Some(2)
        })
    );
    assert!(NormalMatrix::build(&grid, 1).is_ok());

    let grid = Grid::new(&[1]).unwrap();
    assert_eq!(
        NormalMatrix::build(&grid, 1),
        Err(IspError::SingularSystem {
            order: 1,
            extent: Some(1)
        })
    );
    assert!(NormalMatrix::build(&grid, 0).is_ok());
}

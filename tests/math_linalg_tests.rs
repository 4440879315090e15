#![cfg(feature = "dev")]
//! Tests for the normal-equation solvers.

use approx::assert_relative_eq;
use nalgebra::{DMatrix, DVector};

use isp_rs::internals::math::linalg::{CholeskyFactorizer, Factorizer, LuFactorizer};

fn spd_matrix() -> DMatrix<f64> {
    DMatrix::from_row_slice(3, 3, &[4.0, 1.0, 0.5, 1.0, 3.0, 0.25, 0.5, 0.25, 2.0])
}

fn check_solves<F: Factorizer>(factorizer: F) {
    let a = spd_matrix();
    let x = DVector::from_vec(vec![1.0, -2.0, 0.5]);
    let mut b = &a * &x;

    let factors = factorizer.factor(a).expect("matrix is regular");
    assert!(factorizer.solve(&factors, &mut b));
    for i in 0..3 {
        assert_relative_eq!(b[i], x[i], epsilon = 1e-12);
    }
}

#[test]
fn test_lu_solves() {
    check_solves(LuFactorizer);
}

#[test]
fn test_cholesky_solves() {
    check_solves(CholeskyFactorizer);
}

#[test]
fn test_factors_are_reusable() {
    let factorizer = LuFactorizer;
    let factors = factorizer.factor(spd_matrix()).unwrap();
    for scale in [1.0, -3.0, 1e6] {
        let x = DVector::from_vec(vec![scale, 0.0, 2.0 * scale]);
        let mut b = spd_matrix() * &x;
        assert!(factorizer.solve(&factors, &mut b));
        assert_relative_eq!(b[0], x[0], max_relative = 1e-12);
        assert_relative_eq!(b[2], x[2], max_relative = 1e-12);
    }
}

#[test]
fn test_singular_matrix_rejected() {
    let singular = DMatrix::from_row_slice(2, 2, &[1.0, 2.0, 2.0, 4.0]);
    assert!(LuFactorizer.factor(singular.clone()).is_none());
    assert!(CholeskyFactorizer.factor(singular).is_none());
}

#[test]
fn test_nearly_singular_matrix_rejected() {
    let eps = 1e-18;
    let a = DMatrix::from_row_slice(2, 2, &[1.0, 1.0, 1.0, 1.0 + eps]);
    assert!(LuFactorizer.factor(a).is_none());
}

#[test]
fn test_non_finite_solution_reported() {
    let factorizer = LuFactorizer;
    let factors = factorizer.factor(spd_matrix()).unwrap();
    let mut b = DVector::from_vec(vec![f64::NAN, 1.0, 1.0]);
    assert!(!factorizer.solve(&factors, &mut b));

    let factorizer = CholeskyFactorizer;
    let factors = factorizer.factor(spd_matrix()).unwrap();
    let mut b = DVector::from_vec(vec![1.0, f64::INFINITY, 1.0]);
    assert!(!factorizer.solve(&factors, &mut b));
}

#![cfg(feature = "dev")]
//! Tests for fit coordinates and power tables.

use approx::assert_relative_eq;

use isp_rs::internals::math::coordinates::{AxisBasis, coordinate, moments};

#[test]
fn test_coordinate_is_centered_and_scaled() {
    // n = 4: idx 1..4 -> (-1.5, -0.5, 0.5, 1.5) / 4
    assert_relative_eq!(coordinate(0, 4), -0.375);
    assert_relative_eq!(coordinate(1, 4), -0.125);
    assert_relative_eq!(coordinate(3, 4), 0.375);

    // Odd extent has a sample at zero
    assert_eq!(coordinate(2, 5), 0.0);

    // Single sample sits at the origin
    assert_eq!(coordinate(0, 1), 0.0);
}

#[test]
fn test_coordinates_are_symmetric() {
    for n in 1..20 {
        for j in 0..n {
            assert_relative_eq!(coordinate(j, n), -coordinate(n - 1 - j, n));
        }
    }
}

#[test]
fn test_power_table() {
    let basis = AxisBasis::new(5, 3);
    assert_eq!(basis.extent(), 5);
    assert_eq!(basis.order(), 3);
    assert!(basis.powers(0).iter().all(|&p| p == 1.0));
    for j in 0..5 {
        let x = coordinate(j, 5);
        assert_eq!(basis.power(1, j), x);
        assert_relative_eq!(basis.power(2, j), x * x);
        assert_relative_eq!(basis.power(3, j), x * x * x);
    }
    assert_eq!(basis.powers(2).len(), 5);
}

#[test]
fn test_moments_match_power_sums() {
    let basis = AxisBasis::new(7, 2);
    let sums = basis.moments();
    assert_eq!(sums.len(), 5);
    assert_eq!(sums[0], 7.0);
    // Odd moments vanish on a symmetric axis
    assert_relative_eq!(sums[1], 0.0, epsilon = 1e-15);
    assert_relative_eq!(sums[3], 0.0, epsilon = 1e-15);

    let expected_2: f64 = (0..7).map(|j| coordinate(j, 7).powi(2)).sum();
    assert_relative_eq!(sums[2], expected_2, epsilon = 1e-14);
    assert_eq!(moments(7, 2), sums);
}

#![cfg(feature = "dev")]
//! Tests for constant and ramp padding.
//!
//! ## Test Organization
//!
//! 1. **Constant** - Fill value placement
//! 2. **Ramp** - Line continuation and corner filling
//! 3. **Validation** - Windows and buffer sizes

use approx::assert_relative_eq;
use num_complex::Complex;

use isp_rs::internals::engine::ops::{pad_constant, pad_ramp};
use isp_rs::internals::primitives::errors::IspError;
use isp_rs::internals::primitives::grid::Grid;

// ============================================================================
// Constant Padding Tests
// ============================================================================

#[test]
fn test_constant_1d() {
    let grid = Grid::new(&[3]).unwrap();
    let mut data = vec![1.0f32, 2.0, 3.0, -5.0, -5.0];
    pad_constant(&grid, &[2], 0.0, &mut data).unwrap();
    assert_eq!(data, vec![1.0, 2.0, 3.0, 0.0, 0.0]);
}

#[test]
fn test_constant_2d_fills_everything_outside_original_box() {
    let grid = Grid::new(&[2, 2]).unwrap().with_windows(&[4]).unwrap();
    let mut data: Vec<f32> = (0..12).map(|i| i as f32).collect();
    pad_constant(&grid, &[2, 1], 9.0, &mut data).unwrap();

    #[rustfmt::skip]
    let expected = vec![
        0.0, 1.0, 9.0, 9.0,
        4.0, 5.0, 9.0, 9.0,
        9.0, 9.0, 9.0, 9.0,
    ];
    assert_eq!(data, expected);
}

#[test]
fn test_constant_leaves_space_beyond_padding() {
    // Window wider than the padded extent
    let grid = Grid::new(&[2, 2]).unwrap().with_windows(&[5]).unwrap();
    let mut data = vec![1.0f32; 15];
    pad_constant(&grid, &[1, 1], 0.0, &mut data).unwrap();

    #[rustfmt::skip]
    let expected = vec![
        1.0, 1.0, 0.0, 1.0, 1.0,
        1.0, 1.0, 0.0, 1.0, 1.0,
        0.0, 0.0, 0.0, 1.0, 1.0,
    ];
    assert_eq!(data, expected);
}

#[test]
fn test_constant_complex() {
    let grid = Grid::new(&[2]).unwrap();
    let mut data = vec![Complex::new(1.0f32, 1.0); 4];
    pad_constant(&grid, &[2], Complex::new(0.0, -1.0), &mut data).unwrap();
    assert_eq!(data[1], Complex::new(1.0, 1.0));
    assert_eq!(data[2], Complex::new(0.0, -1.0));
    assert_eq!(data[3], Complex::new(0.0, -1.0));
}

// ============================================================================
// Ramp Padding Tests
// ============================================================================

#[test]
fn test_ramp_1d() {
    let grid = Grid::new(&[3]).unwrap();
    let mut data = vec![1.0f32, 2.0, 5.0, 0.0, 0.0, 0.0];
    pad_ramp(&grid, &[3], &mut data).unwrap();
    // last + (first - last) * t / 4 with first = 1, last = 5
    assert_eq!(data, vec![1.0, 2.0, 5.0, 4.0, 3.0, 2.0]);
}

#[test]
fn test_ramp_2d_fills_corner() {
    let grid = Grid::new(&[2, 2]).unwrap().with_windows(&[3]).unwrap();
    #[rustfmt::skip]
    let mut data = vec![
        0.0f32, 4.0, -1.0,
        2.0, 10.0, -1.0,
        -1.0, -1.0, -1.0,
    ];
    pad_ramp(&grid, &[1, 1], &mut data).unwrap();

    #[rustfmt::skip]
    let expected = vec![
        0.0, 4.0, 2.0,
        2.0, 10.0, 6.0,
        1.0, 7.0, 4.0,
    ];
    assert_eq!(data, expected);
}

#[test]
fn test_ramp_makes_lines_periodic() {
    // Continuing the ramp one more step would land on the first sample
    let grid = Grid::new(&[4]).unwrap();
    let mut data = vec![3.0f32, -1.0, 2.0, 7.0, 0.0, 0.0, 0.0, 0.0];
    pad_ramp(&grid, &[4], &mut data).unwrap();
    let step = data[7] - data[6];
    assert_relative_eq!(data[7] + step, data[0], epsilon = 1e-5);
    assert_relative_eq!(data[4] - data[3], step, epsilon = 1e-5);
}

#[test]
fn test_ramp_zero_padding_is_noop() {
    let grid = Grid::new(&[3, 2]).unwrap();
    let mut data = vec![1.0f32, 2.0, 3.0, 4.0, 5.0, 6.0];
    pad_ramp(&grid, &[0, 0], &mut data).unwrap();
    assert_eq!(data, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
}

#[test]
fn test_ramp_complex() {
    let grid = Grid::new(&[2]).unwrap();
    let mut data = vec![
        Complex::new(0.0f32, 3.0),
        Complex::new(3.0, 0.0),
        Complex::new(9.0, 9.0),
        Complex::new(9.0, 9.0),
    ];
    pad_ramp(&grid, &[2], &mut data).unwrap();
    assert_relative_eq!(data[2].re, 2.0, epsilon = 1e-6);
    assert_relative_eq!(data[2].im, 1.0, epsilon = 1e-6);
    assert_relative_eq!(data[3].re, 1.0, epsilon = 1e-6);
    assert_relative_eq!(data[3].im, 2.0, epsilon = 1e-6);
}

// ============================================================================
// Validation Tests
// ============================================================================

#[test]
fn test_padding_must_fit_window() {
    let grid = Grid::new(&[4, 2]).unwrap();
    let mut data = vec![0.0f32; 32];
    assert_eq!(
        pad_constant(&grid, &[1, 0], 0.0, &mut data),
        Err(IspError::InvalidWindow {
            axis: 0,
            window: 4,
            extent: 5
        })
    );
}

#[test]
fn test_padding_needs_room_in_buffer() {
    let grid = Grid::new(&[4]).unwrap();
    let mut data = vec![0.0f32; 5];
    assert_eq!(
        pad_ramp(&grid, &[2], &mut data),
        Err(IspError::BufferTooSmall { got: 5, need: 6 })
    );
    assert_eq!(
        pad_ramp(&grid, &[2, 1], &mut data),
        Err(IspError::InvalidDimensions(2))
    );
}

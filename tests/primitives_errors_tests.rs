#![cfg(feature = "dev")]

use isp_rs::internals::primitives::errors::IspError;

#[test]
fn test_isp_error_display() {
    // InvalidSize
    let err = IspError::InvalidSize {
        target: 2_000_000_000,
        min_exp2: 0,
    };
    assert_eq!(
        format!("{}", err),
        "No FFT-friendly size for target 2000000000 with minimum power of two 2^0"
    );

    // SingularSystem (structural)
    let err = IspError::SingularSystem {
        order: 3,
        extent: Some(3),
    };
    assert_eq!(
        format!("{}", err),
        "Singular system: order 3 needs more than 3 samples along an axis"
    );

    // SingularSystem (numeric)
    let err = IspError::SingularSystem {
        order: 7,
        extent: None,
    };
    assert_eq!(
        format!("{}", err),
        "Singular system: factorization failed for order 7"
    );

    // SolveFailure
    let err = IspError::SolveFailure;
    assert_eq!(
        format!("{}", err),
        "Solve failed: coefficients are not finite"
    );

    // InvalidDimensions
    let err = IspError::InvalidDimensions(5);
    assert_eq!(
        format!("{}", err),
        "Invalid dimensions: 5 (must be in [1, 4])"
    );

    // EmptyAxis
    let err = IspError::EmptyAxis { axis: 2 };
    assert_eq!(format!("{}", err), "Axis 2 has zero extent");

    // InvalidWindow
    let err = IspError::InvalidWindow {
        axis: 0,
        window: 4,
        extent: 6,
    };
    assert_eq!(
        format!("{}", err),
        "Invalid window on axis 0: 4 (must be at least 6)"
    );

    // BufferTooSmall
    let err = IspError::BufferTooSmall { got: 10, need: 12 };
    assert_eq!(
        format!("{}", err),
        "Buffer too small: got 10 elements, need at least 12"
    );

    // CoefficientLength
    let err = IspError::CoefficientLength {
        got: 2,
        expected: 3,
    };
    assert_eq!(
        format!("{}", err),
        "Coefficient length mismatch: got 2, expected 3"
    );

    // FactorLength
    let err = IspError::FactorLength {
        axis: 1,
        got: 4,
        expected: 5,
    };
    assert_eq!(
        format!("{}", err),
        "Factor length mismatch on axis 1: got 4, expected 5"
    );

    // MismatchedGrids
    let err = IspError::MismatchedGrids;
    assert_eq!(format!("{}", err), "Grids have different extents");

    // IndexOutOfBounds
    let err = IspError::IndexOutOfBounds {
        axis: 1,
        index: 9,
        extent: 4,
    };
    assert_eq!(
        format!("{}", err),
        "Index 9 out of bounds on axis 1 (extent 4)"
    );

    // InvalidNumericValue
    let err = IspError::InvalidNumericValue("NaN detected".to_string());
    assert_eq!(format!("{}", err), "Invalid numeric value: NaN detected");

    // DuplicateParameter
    let err = IspError::DuplicateParameter { parameter: "order" };
    assert_eq!(
        format!("{}", err),
        "Parameter 'order' was set multiple times. Each parameter can only be configured once."
    );
}

#[test]
fn test_isp_error_is_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
    assert_error(&IspError::SolveFailure);

    let boxed: Box<dyn std::error::Error> = Box::new(IspError::MismatchedGrids);
    assert_eq!(boxed.to_string(), "Grids have different extents");
}

#[test]
fn test_isp_error_equality() {
    assert_eq!(IspError::SolveFailure, IspError::SolveFailure);
    assert_ne!(
        IspError::SingularSystem {
            order: 1,
            extent: Some(1)
        },
        IspError::SingularSystem {
            order: 1,
            extent: None
        }
    );
    let err = IspError::InvalidNumericValue("x".to_string());
    assert_eq!(err.clone(), err);
}

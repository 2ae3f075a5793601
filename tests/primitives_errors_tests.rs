use kernels_rs::prelude::KernelError;

#[test]
fn test_kernel_error_display() {
    // EmptyInput
    let err = KernelError::EmptyInput;
    assert_eq!(format!("{}", err), "Input arrays are empty");

    // ZeroDimensions
    let err = KernelError::ZeroDimensions;
    assert_eq!(format!("{}", err), "Dimensions must be at least 1");

    // InvalidPointMatrix
    let err = KernelError::InvalidPointMatrix {
        len: 7,
        dimensions: 2,
    };
    assert_eq!(
        format!("{}", err),
        "Invalid point matrix: length 7 is not divisible by 2 dimensions"
    );

    // NonSquareGram
    let err = KernelError::NonSquareGram { rows: 2, cols: 3 };
    assert_eq!(format!("{}", err), "Gram matrix is not square: 2x3");
}

#[test]
fn test_kernel_error_is_std_error() {
    fn assert_error<E: std::error::Error>(_e: &E) {}
    assert_error(&KernelError::EmptyInput);
}

use approx::assert_relative_eq;
use kernels_rs::prelude::*;

// ============================================================================
// Construction Tests
// ============================================================================

#[test]
fn test_default_construction() {
    let kernel = ExponentialKernel::<f64>::default();
    assert_relative_eq!(kernel.bandwidth(), 1.0);
    assert_relative_eq!(kernel.gamma(), -0.5);
}

#[test]
fn test_gamma_formula() {
    for &mu in &[0.25, 0.5, 1.0, 2.0, 10.0] {
        let kernel = ExponentialKernel::new(mu);
        assert_relative_eq!(kernel.gamma(), -1.0 / (2.0 * mu * mu), epsilon = 1e-12);
    }
}

#[test]
fn test_gamma_cached_at_construction() {
    let kernel = ExponentialKernel::new(2.0);
    assert_relative_eq!(kernel.gamma(), -0.125);
    assert_relative_eq!(kernel.bandwidth(), 2.0);
}

#[test]
fn test_zero_bandwidth_propagates_silently() {
    // The constructor performs no validation: mu = 0 gives gamma = -inf,
    // and evaluation at any positive distance underflows to 0.
    let kernel = ExponentialKernel::new(0.0_f64);
    assert!(kernel.gamma().is_infinite());
    assert_eq!(kernel.evaluate_distance(1.0), 0.0);
}

// ============================================================================
// Kernel Contract Tests
// ============================================================================

#[test]
fn test_kernel_properties() {
    // The exponential kernel is normalized (K(x, x) = 1) and consumes the
    // ordinary distance, not the squared distance.
    assert!(<ExponentialKernel<f64> as Kernel<f64>>::IS_NORMALIZED);
    assert!(!<ExponentialKernel<f64> as Kernel<f64>>::USES_SQUARED_DISTANCE);
}

#[test]
fn test_evaluate_distance_takes_unsquared_distance() {
    // Pinning USES_SQUARED_DISTANCE = false behaviorally: the scalar
    // overload agrees with the vector path when fed the plain Euclidean
    // distance, not its square.
    let kernel = ExponentialKernel::new(1.0);
    let a = [0.0, 0.0];
    let b = [3.0, 4.0];
    assert_relative_eq!(
        kernel.evaluate(&a, &b),
        kernel.evaluate_distance(5.0),
        epsilon = 1e-12
    );
    assert!(kernel.evaluate(&a, &b) != kernel.evaluate_distance(25.0));
}

// ============================================================================
// Evaluation Tests
// ============================================================================

#[test]
fn test_self_similarity_is_one() {
    let kernel = ExponentialKernel::new(0.5);
    let a = [1.0, 1.0];
    assert_relative_eq!(kernel.evaluate(&a, &a), 1.0, epsilon = 1e-12);
}

#[test]
fn test_self_similarity_independent_of_bandwidth() {
    for &mu in &[0.1, 0.5, 1.0, 3.0] {
        let kernel = ExponentialKernel::new(mu);
        let a = [2.5, -1.0, 4.0];
        assert_relative_eq!(kernel.evaluate(&a, &a), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn test_known_value_default_bandwidth() {
    // distance((0,0),(3,4)) = 5, gamma = -0.5, K = exp(-2.5) ≈ 0.082085
    let kernel = ExponentialKernel::<f64>::default();
    let value = kernel.evaluate(&[0.0, 0.0], &[3.0, 4.0]);
    assert_relative_eq!(value, (-2.5_f64).exp(), epsilon = 1e-12);
    assert_relative_eq!(value, 0.082085, epsilon = 1e-6);
}

#[test]
fn test_known_value_scalar_overload() {
    // mu = 2 gives gamma = -0.125; K(4) = exp(-0.5) ≈ 0.606531
    let kernel = ExponentialKernel::new(2.0);
    let value = kernel.evaluate_distance(4.0);
    assert_relative_eq!(value, (-0.5_f64).exp(), epsilon = 1e-12);
    assert_relative_eq!(value, 0.606531, epsilon = 1e-6);
}

#[test]
fn test_range_is_zero_one() {
    let kernel = ExponentialKernel::new(1.5);
    let reference = [0.0, 0.0, 0.0];
    let others = [
        [1.0, 0.0, 0.0],
        [10.0, -3.0, 2.0],
        [100.0, 100.0, 100.0],
        [0.0, 0.0, 0.0],
    ];
    for b in &others {
        let value = kernel.evaluate(&reference, b);
        assert!(value > 0.0 && value <= 1.0, "out of range: {}", value);
    }
}

#[test]
fn test_symmetry() {
    let kernel = ExponentialKernel::new(0.7);
    let a = [1.0, 2.0, 3.0];
    let b = [-2.0, 0.5, 4.0];
    assert_relative_eq!(kernel.evaluate(&a, &b), kernel.evaluate(&b, &a));
}

#[test]
fn test_monotone_decay_with_distance() {
    let kernel = ExponentialKernel::new(1.0);
    let origin = [0.0, 0.0];
    let mut previous = 1.0;
    for step in 1..=10 {
        let point = [step as f64, 0.0];
        let value = kernel.evaluate(&origin, &point);
        assert!(value < previous, "kernel did not decay at step {}", step);
        previous = value;
    }
}

#[test]
fn test_scalar_vector_consistency() {
    let kernel = ExponentialKernel::new(1.3);
    let a = [1.0, 2.0];
    let b = [4.0, 6.0];
    let d = f64::euclidean(&a, &b);
    assert_relative_eq!(kernel.evaluate(&a, &b), kernel.evaluate_distance(d), epsilon = 1e-12);
}

#[test]
fn test_negative_distance_accepted() {
    // A negative precomputed "distance" is not rejected; it produces a
    // value above 1, outside the kernel's intended range.
    let kernel = ExponentialKernel::new(1.0);
    assert!(kernel.evaluate_distance(-2.0) > 1.0);
}

#[test]
fn test_extreme_distance_underflows_to_zero() {
    let kernel = ExponentialKernel::new(0.01);
    assert_eq!(kernel.evaluate_distance(1e9), 0.0);
}

#[test]
fn test_f32_evaluation() {
    let kernel = ExponentialKernel::<f32>::default();
    let value = kernel.evaluate(&[0.0_f32, 0.0], &[3.0, 4.0]);
    assert_relative_eq!(value, (-2.5_f32).exp(), epsilon = 1e-6);
}

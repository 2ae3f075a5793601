//! The exponential-decay similarity kernel.
//!
//! ## Purpose
//!
//! This module implements the exponential kernel
//!
//! ```text
//! K(x, y) = exp(-‖x - y‖ / (2μ²))
//! ```
//!
//! where μ is the bandwidth set at construction. It is the building block
//! for algorithms that need similarity decaying exponentially with ordinary
//! (not squared) Euclidean distance.
//!
//! ## Design notes
//!
//! * **Precomputation**: The exponent scale γ = -1/(2μ²) is computed once at
//!   construction and cached. Evaluation in O(n²) pairwise loops then costs
//!   one distance, one square root, one multiply, and one `exp`.
//! * **Trust**: The constructor does not validate the bandwidth. A zero or
//!   negative bandwidth yields a γ of `-inf`/`nan`/positive values that
//!   propagates silently into every evaluation.
//!
//! ## Key concepts
//!
//! * **Bandwidth (μ)**: Scale parameter; larger μ means slower decay.
//! * **Gamma (γ)**: The cached constant -1/(2μ²) folded into the exponent.
//!
//! ## Invariants
//!
//! * `gamma == -0.5 * bandwidth^-2` at all times after construction.
//! * Both fields are immutable after construction.
//! * For μ > 0 and distance ≥ 0, the kernel value lies in (0, 1].
//!
//! ## Non-goals
//!
//! * This module does not compute distances itself (delegated to
//!   `math::distance`).
//! * This module does not provide a gradient.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::kernels::traits::Kernel;
use crate::math::distance::FloatDistance;

// ============================================================================
// Exponential Kernel
// ============================================================================

/// The exponential kernel K(x, y) = exp(-‖x - y‖ / (2μ²)).
///
/// A small copyable value type; embed it by value inside the consuming
/// algorithm. Immutable after construction, so concurrent evaluation from
/// multiple threads needs no locking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialKernel<T> {
    /// Kernel bandwidth (μ).
    bandwidth: T,

    /// Precalculated constant depending on the bandwidth: γ = -1/(2μ²).
    gamma: T,
}

impl<T: Float> ExponentialKernel<T> {
    /// Construct the kernel with a custom bandwidth (μ).
    ///
    /// The bandwidth is intended to be positive but is **not** validated:
    /// μ = 0 produces γ = -inf and μ < 0 behaves like |μ|, both propagating
    /// silently into every evaluation.
    #[inline]
    pub fn new(bandwidth: T) -> Self {
        let half = T::from(0.5).unwrap();
        Self {
            bandwidth,
            gamma: -half * bandwidth.powi(-2),
        }
    }

    /// Get the bandwidth (μ).
    #[inline]
    pub fn bandwidth(&self) -> T {
        self.bandwidth
    }

    /// Get the precalculated constant γ = -1/(2μ²).
    #[inline]
    pub fn gamma(&self) -> T {
        self.gamma
    }
}

impl<T: Float> Default for ExponentialKernel<T> {
    /// Construct the kernel with bandwidth 1.0 (γ = -0.5).
    #[inline]
    fn default() -> Self {
        Self {
            bandwidth: T::one(),
            gamma: T::from(-0.5).unwrap(),
        }
    }
}

impl<T: FloatDistance> Kernel<T> for ExponentialKernel<T> {
    const IS_NORMALIZED: bool = true;
    const USES_SQUARED_DISTANCE: bool = false;

    #[inline]
    fn evaluate(&self, a: &[T], b: &[T]) -> T {
        // The precalculated gamma saves a division and exponentiation per call.
        (self.gamma * T::squared_euclidean(a, b).sqrt()).exp()
    }

    #[inline]
    fn evaluate_distance(&self, distance: T) -> T {
        (self.gamma * distance).exp()
    }
}

//! The triangular (compact-support) kernel.
//!
//! ## Purpose
//!
//! This module implements the triangular kernel
//!
//! ```text
//! K(x, y) = max(0, 1 - ‖x - y‖ / b)
//! ```
//!
//! where b is the bandwidth. Unlike the exponential kernel its support is
//! compact: similarity is exactly zero at and beyond distance b, which lets
//! pairwise consumers prune far pairs entirely.
//!
//! ## Design notes
//!
//! * **Consistency**: The scalar overload and the gradient both measure the
//!   support against the bandwidth, matching the vector form.
//! * **Trust**: As with the exponential kernel, the bandwidth is not
//!   validated at construction.
//!
//! ## Invariants
//!
//! * For b > 0, the kernel value lies in [0, 1].
//! * K(x, y) = 0 whenever ‖x - y‖ ≥ b.
//!
//! ## Non-goals
//!
//! * This module does not provide serialization hooks.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::kernels::traits::Kernel;
use crate::math::distance::FloatDistance;

// ============================================================================
// Triangular Kernel
// ============================================================================

/// The triangular kernel K(x, y) = max(0, 1 - ‖x - y‖ / b).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TriangularKernel<T> {
    /// Kernel bandwidth (b).
    bandwidth: T,
}

impl<T: Float> TriangularKernel<T> {
    /// Construct the kernel with a custom bandwidth (not validated).
    #[inline]
    pub fn new(bandwidth: T) -> Self {
        Self { bandwidth }
    }

    /// Get the bandwidth.
    #[inline]
    pub fn bandwidth(&self) -> T {
        self.bandwidth
    }

    /// Evaluate the gradient of the kernel with respect to the distance.
    ///
    /// The kernel is linear inside its support and flat outside it; the
    /// derivative is undefined (NaN) exactly at distance = bandwidth.
    #[inline]
    pub fn gradient(&self, distance: T) -> T {
        if distance < self.bandwidth {
            -self.bandwidth.recip()
        } else if distance > self.bandwidth {
            T::zero()
        } else {
            T::nan()
        }
    }
}

impl<T: Float> Default for TriangularKernel<T> {
    /// Construct the kernel with bandwidth 1.0.
    #[inline]
    fn default() -> Self {
        Self {
            bandwidth: T::one(),
        }
    }
}

impl<T: FloatDistance> Kernel<T> for TriangularKernel<T> {
    const IS_NORMALIZED: bool = true;
    const USES_SQUARED_DISTANCE: bool = false;

    #[inline]
    fn evaluate(&self, a: &[T], b: &[T]) -> T {
        self.evaluate_distance(T::squared_euclidean(a, b).sqrt())
    }

    #[inline]
    fn evaluate_distance(&self, distance: T) -> T {
        T::zero().max(T::one() - distance / self.bandwidth)
    }
}

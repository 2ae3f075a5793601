//! Squared Euclidean distance primitives.
//!
//! ## Purpose
//!
//! This module provides the distance primitive the kernels delegate to: the
//! squared Euclidean distance between two points, Σ(aᵢ - bᵢ)². Kernels take
//! its square root to obtain the ordinary Euclidean distance before scaling.
//!
//! ## Design notes
//!
//! * **Decoupling**: Distance calculation is separated from kernel
//!   evaluation; kernels reach it through the [`FloatDistance`] trait seam,
//!   so alternative metrics can be substituted at the type level.
//! * **SIMD**: `f64` and `f32` use 128-bit lanes via `wide`, with a scalar
//!   tail. The trait is implemented for `f32` and `f64` only; downstream
//!   crates can implement it for other `Float` types, reusing
//!   [`squared_euclidean_scalar`] as the computation.
//! * **Trust**: No bounds checking beyond a `debug_assert`. Mismatched
//!   lengths truncate to the shorter input in release builds.
//!
//! ## Invariants
//!
//! * The squared distance is non-negative for finite inputs.
//! * The squared distance is zero if and only if the points are identical.
//!
//! ## Non-goals
//!
//! * This module does not handle kernel weighting (bandwidth/scaling).
//! * This module does not provide non-Euclidean metrics.

// External dependencies
use num_traits::Float;
use wide::{f32x4, f64x2};

// ============================================================================
// Scalar Fallback
// ============================================================================

/// Compute the squared Euclidean distance with plain scalar arithmetic.
///
/// Works for any `Float` type; the [`FloatDistance`] impls for `f32`/`f64`
/// use this only for the SIMD tail.
#[inline]
pub fn squared_euclidean_scalar<T: Float>(a: &[T], b: &[T]) -> T {
    debug_assert_eq!(a.len(), b.len(), "Points must have same dimension");
    a.iter()
        .zip(b.iter())
        .map(|(&ai, &bi)| {
            let diff = ai - bi;
            diff * diff
        })
        .fold(T::zero(), |acc, x| acc + x)
}

// ============================================================================
// FloatDistance Trait
// ============================================================================

/// Helper trait bridging generic `Float` scalars to optimized distance
/// implementations.
///
/// The kernel layer is written against this trait rather than a concrete
/// function, so the hot pairwise loops pick up the SIMD path for `f32`/`f64`
/// while remaining generic.
pub trait FloatDistance: Float {
    /// Squared Euclidean distance between two equal-length points.
    fn squared_euclidean(a: &[Self], b: &[Self]) -> Self;

    /// Euclidean distance between two equal-length points.
    #[inline]
    fn euclidean(a: &[Self], b: &[Self]) -> Self {
        Self::squared_euclidean(a, b).sqrt()
    }
}

impl FloatDistance for f64 {
    #[inline]
    fn squared_euclidean(a: &[Self], b: &[Self]) -> Self {
        debug_assert_eq!(a.len(), b.len(), "Points must have same dimension");

        let chunks_a = a.chunks_exact(2);
        let chunks_b = b.chunks_exact(2);
        let tail_a = chunks_a.remainder();
        let tail_b = chunks_b.remainder();

        let mut acc = f64x2::ZERO;
        for (pa, pb) in chunks_a.zip(chunks_b) {
            let diff = f64x2::new([pa[0], pa[1]]) - f64x2::new([pb[0], pb[1]]);
            acc += diff * diff;
        }

        acc.reduce_add() + squared_euclidean_scalar(tail_a, tail_b)
    }
}

impl FloatDistance for f32 {
    #[inline]
    fn squared_euclidean(a: &[Self], b: &[Self]) -> Self {
        debug_assert_eq!(a.len(), b.len(), "Points must have same dimension");

        let chunks_a = a.chunks_exact(4);
        let chunks_b = b.chunks_exact(4);
        let tail_a = chunks_a.remainder();
        let tail_b = chunks_b.remainder();

        let mut acc = f32x4::ZERO;
        for (pa, pb) in chunks_a.zip(chunks_b) {
            let diff =
                f32x4::new([pa[0], pa[1], pa[2], pa[3]]) - f32x4::new([pb[0], pb[1], pb[2], pb[3]]);
            acc += diff * diff;
        }

        acc.reduce_add() + squared_euclidean_scalar(tail_a, tail_b)
    }
}

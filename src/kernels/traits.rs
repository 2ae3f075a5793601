//! The shared kernel contract.
//!
//! ## Purpose
//!
//! This module defines the [`Kernel`] trait implemented by every kernel in
//! the crate, so host algorithms (Gram builders, density estimators, SVM
//! solvers) can be written once, generic over the kernel family.
//!
//! ## Design notes
//!
//! * **Static dispatch**: Kernels are small value types evaluated in tight
//!   O(n²) pairwise loops; the trait is meant for monomorphization, not for
//!   trait objects, so the precomputed-constant optimization is not defeated
//!   by virtual dispatch.
//! * **Compile-time properties**: `IS_NORMALIZED` and `USES_SQUARED_DISTANCE`
//!   are associated constants, letting consumers branch at compile time
//!   (e.g. skipping diagonal evaluations for normalized kernels).
//!
//! ## Key concepts
//!
//! * **Normalized kernel**: K(x, x) = 1 for all x.
//! * **Scalar overload**: Evaluation from a precomputed distance, for
//!   callers that obtain distances from a spatial index.
//!
//! ## Non-goals
//!
//! * This trait does not prescribe gradients; kernels that have a
//!   closed-form gradient expose it as an inherent method.

// External dependencies
use num_traits::Float;

// ============================================================================
// Kernel Trait
// ============================================================================

/// A similarity kernel K(x, y) over real-valued points.
///
/// Implementations are pure: the result depends only on the inputs and the
/// kernel's construction-time parameters. Kernels are immutable after
/// construction, so sharing one instance across threads is safe.
pub trait Kernel<T: Float> {
    /// Whether K(x, x) = 1 for all x.
    const IS_NORMALIZED: bool;

    /// Whether the kernel consumes the squared distance directly (without
    /// taking a square root).
    const USES_SQUARED_DISTANCE: bool;

    /// Evaluate the kernel for two points of equal dimensionality.
    ///
    /// Dimensionality agreement is the caller's responsibility; behavior on
    /// mismatched inputs is delegated to the distance primitive.
    fn evaluate(&self, a: &[T], b: &[T]) -> T;

    /// Evaluate the kernel from a precomputed Euclidean distance.
    ///
    /// No validation is performed: a negative `distance` is accepted and
    /// yields a value outside the kernel's intended range.
    fn evaluate_distance(&self, distance: T) -> T;
}

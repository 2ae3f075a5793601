//! # kernels-rs — Similarity kernels for Rust
//!
//! A small, allocation-light library of exponential-decay similarity kernels
//! for machine-learning algorithms that need a notion of closeness between
//! points: kernel density estimation, kernel PCA, SVM-like methods, and
//! affinity-matrix construction.
//!
//! ## What is a kernel?
//!
//! A kernel function K(x, y) expresses similarity between two points, usually
//! decaying with their distance. Algorithms that would otherwise operate on
//! raw distances can instead consume kernel values, which are bounded and
//! decay smoothly.
//!
//! This crate provides:
//!
//! - **Exponential kernel**: `K(x, y) = exp(-‖x - y‖ / (2μ²))`, with the
//!   bandwidth-derived constant precomputed at construction for tight
//!   pairwise loops.
//! - **Triangular kernel**: `K(x, y) = max(0, 1 - ‖x - y‖ / b)`, a
//!   compact-support kernel with a closed-form gradient.
//! - **Gram utilities**: symmetric and rectangular pairwise kernel matrices
//!   over flat point arrays, plus double-centering for kernel-PCA style
//!   consumers.
//!
//! ## Quick Start
//!
//! ```rust
//! use kernels_rs::prelude::*;
//!
//! // Bandwidth 1.0 by default.
//! let kernel = ExponentialKernel::<f64>::default();
//!
//! // Identical points are maximally similar.
//! let same = kernel.evaluate(&[1.0, 1.0], &[1.0, 1.0]);
//! assert!((same - 1.0).abs() < 1e-12);
//!
//! // Similarity decays with Euclidean distance.
//! let far = kernel.evaluate(&[0.0, 0.0], &[3.0, 4.0]);
//! assert!(far > 0.0 && far < same);
//! ```
//!
//! ## Building a Gram matrix
//!
//! ```rust
//! use kernels_rs::prelude::*;
//!
//! // 3 points in 2D, flattened row-major: [x1_0, x2_0, x1_1, x2_1, ...]
//! let points = vec![0.0, 0.0, 3.0, 4.0, 6.0, 8.0];
//!
//! let kernel = ExponentialKernel::new(2.0);
//! let gram = gram_matrix(&kernel, &points, 2)?;
//!
//! assert_eq!(gram.nrows(), 3);
//! assert_eq!(gram[(0, 0)], 1.0); // Normalized kernel: unit diagonal
//! assert_eq!(gram[(0, 1)], gram[(1, 0)]); // Symmetric
//! # Result::<(), KernelError>::Ok(())
//! ```
//!
//! ## Precomputed distances
//!
//! Advanced callers that already hold Euclidean distances (e.g. from a
//! spatial index) can skip the vector path:
//!
//! ```rust
//! use kernels_rs::prelude::*;
//!
//! let kernel = ExponentialKernel::<f64>::new(2.0);
//! let d = 4.0; // precomputed Euclidean distance
//! assert_eq!(kernel.evaluate_distance(d), (kernel.gamma() * d).exp());
//! ```
//!
//! ## Numeric contract
//!
//! The kernels themselves perform **no input validation**: a non-positive
//! bandwidth or a negative precomputed distance propagates through IEEE-754
//! arithmetic (`inf`/`nan`/values above 1) rather than being rejected. Shape
//! validation happens at the Gram layer, which returns [`prelude::KernelError`]
//! for malformed point arrays. See the module documentation for details.
//!
//! ## Minimal usage (no_std / embedded)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! kernels-rs = { version = "0.1", default-features = false }
//! ```
//!
//! Kernel evaluation is allocation-free; only the Gram utilities allocate.
//!
//! ## References
//!
//! - Schölkopf, B. & Smola, A. (2002). "Learning with Kernels"
//! - Curtin, R. et al. (2013). "mlpack: A Scalable C++ Machine Learning Library"

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - error types.
//
// Contains the `KernelError` enum used by the Gram layer for shape
// validation failures.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains the squared-Euclidean-distance primitive, with SIMD-accelerated
// implementations for f32/f64 behind the `FloatDistance` trait.
mod math;

// Layer 3: Kernels - the kernel functions themselves.
//
// Contains the `Kernel` trait and the exponential and triangular kernel
// implementations.
mod kernels;

// Layer 4: Algorithms - pairwise consumers.
//
// Contains Gram matrix construction and centering built on top of the
// kernel layer.
mod algorithms;

// ============================================================================
// Prelude
// ============================================================================

/// Standard kernels prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use kernels_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::algorithms::gram::{center_gram, cross_gram_matrix, gram_matrix};
    pub use crate::kernels::exponential::ExponentialKernel;
    pub use crate::kernels::traits::Kernel;
    pub use crate::kernels::triangular::TriangularKernel;
    pub use crate::math::distance::FloatDistance;
    pub use crate::primitives::errors::KernelError;
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing purposes.
/// It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change without notice.
/// Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal kernel implementations.
    pub mod kernels {
        pub use crate::kernels::*;
    }
    /// Internal pairwise algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
}

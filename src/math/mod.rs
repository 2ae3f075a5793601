//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure mathematical primitives the kernels are
//! built on:
//! - Squared-Euclidean-distance computation, with SIMD fast paths
//!
//! These are reusable building blocks with no kernel-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: Algorithms
//!   ↓
//! Layer 3: Kernels
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Euclidean distance primitives.
pub mod distance;

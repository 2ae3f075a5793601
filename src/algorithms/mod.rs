//! Layer 4: Algorithms
//!
//! # Purpose
//!
//! This layer contains the pairwise consumers built on top of the kernel
//! layer:
//! - Gram (kernel) matrix construction
//! - Gram matrix centering for kernel-PCA style consumers
//!
//! # Architecture
//!
//! ```text
//! Layer 4: Algorithms ← You are here
//!   ↓
//! Layer 3: Kernels
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Pairwise kernel (Gram) matrix construction and centering.
pub mod gram;

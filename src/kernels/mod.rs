//! Layer 3: Kernels
//!
//! # Purpose
//!
//! This layer contains the kernel functions themselves:
//! - The `Kernel` trait shared by all kernels
//! - The exponential (Laplacian-style) kernel
//! - The triangular kernel
//!
//! # Architecture
//!
//! ```text
//! Layer 4: Algorithms
//!   ↓
//! Layer 3: Kernels ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// The shared kernel contract.
pub mod traits;

/// The exponential-decay kernel.
pub mod exponential;

/// The triangular (compact-support) kernel.
pub mod triangular;

//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the fundamental types shared by the rest of the crate:
//! - Error types for shape validation at the Gram layer
//!
//! # Architecture
//!
//! ```text
//! Layer 4: Algorithms
//!   ↓
//! Layer 3: Kernels
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Error types for kernel matrix construction.
pub mod errors;

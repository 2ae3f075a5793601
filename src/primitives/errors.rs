//! Error types for kernel matrix construction.
//!
//! ## Purpose
//!
//! This module defines the errors surfaced by the Gram layer when a flat
//! point array cannot be interpreted as a set of fixed-dimension points, or
//! when a matrix operation receives an incompatible shape.
//!
//! ## Design notes
//!
//! * **Scope**: Only the Gram layer reports errors. Kernel evaluation itself
//!   is unvalidated IEEE-754 arithmetic and never fails.
//! * **no_std**: Variants carry plain integers so the type works without
//!   `alloc`; `std::error::Error` is implemented behind the `std` feature.
//!
//! ## Non-goals
//!
//! * This module does not diagnose numeric anomalies (NaN/Inf inputs,
//!   non-positive bandwidths). Those propagate silently by design.

use core::fmt;

// ============================================================================
// Error Type
// ============================================================================

/// Errors produced while building or transforming kernel matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KernelError {
    /// The point array is empty.
    EmptyInput,

    /// The dimension count is zero.
    ZeroDimensions,

    /// The point array length is not a multiple of the dimension count.
    InvalidPointMatrix {
        /// Length of the flat point array.
        len: usize,
        /// Requested number of dimensions per point.
        dimensions: usize,
    },

    /// A square Gram matrix was expected but a rectangular one was given.
    NonSquareGram {
        /// Number of rows in the matrix.
        rows: usize,
        /// Number of columns in the matrix.
        cols: usize,
    },
}

impl fmt::Display for KernelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "Input arrays are empty"),
            Self::ZeroDimensions => write!(f, "Dimensions must be at least 1"),
            Self::InvalidPointMatrix { len, dimensions } => write!(
                f,
                "Invalid point matrix: length {} is not divisible by {} dimensions",
                len, dimensions
            ),
            Self::NonSquareGram { rows, cols } => {
                write!(f, "Gram matrix is not square: {}x{}", rows, cols)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for KernelError {}

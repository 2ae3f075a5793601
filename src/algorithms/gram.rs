//! Pairwise kernel (Gram) matrix construction and centering.
//!
//! ## Purpose
//!
//! This module turns a kernel and a flat point array into a pairwise
//! similarity matrix, the form consumed by kernel PCA, spectral clustering,
//! and SVM-style solvers.
//!
//! ## Design notes
//!
//! * **Layout**: Points are supplied as a flat row-major array
//!   (`[x1_0, x2_0, x1_1, x2_1, ...]`) with an explicit dimension count,
//!   avoiding a vector-of-vectors allocation per point.
//! * **Symmetry**: Only the upper triangle is evaluated; the lower triangle
//!   is mirrored. For normalized kernels the diagonal is written as 1
//!   without evaluating the kernel at all.
//! * **Validation**: This is the one place in the crate that validates
//!   shapes. Kernel arithmetic itself remains unchecked.
//!
//! ## Invariants
//!
//! * `gram_matrix` output is square and symmetric.
//! * `cross_gram_matrix` output has one row per left point and one column
//!   per right point.
//! * `center_gram` output has row and column means of zero (within
//!   floating-point tolerance).
//!
//! ## Non-goals
//!
//! * This module does not solve eigenproblems or train models on the
//!   resulting matrices.
//! * This module does not exploit sparsity for compact-support kernels.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use nalgebra::{DMatrix, Scalar};
use num_traits::Float;

// Internal dependencies
use crate::kernels::traits::Kernel;
use crate::primitives::errors::KernelError;

// ============================================================================
// Validation
// ============================================================================

/// Check that a flat array splits into whole points, returning the count.
fn point_count<T>(points: &[T], dimensions: usize) -> Result<usize, KernelError> {
    if dimensions == 0 {
        return Err(KernelError::ZeroDimensions);
    }
    if points.is_empty() {
        return Err(KernelError::EmptyInput);
    }
    if points.len() % dimensions != 0 {
        return Err(KernelError::InvalidPointMatrix {
            len: points.len(),
            dimensions,
        });
    }
    Ok(points.len() / dimensions)
}

// ============================================================================
// Gram Matrix Construction
// ============================================================================

/// Build the symmetric Gram matrix K where K[i][j] = K(pᵢ, pⱼ).
///
/// `points` is a flat row-major array of `points.len() / dimensions` points.
pub fn gram_matrix<T, K>(
    kernel: &K,
    points: &[T],
    dimensions: usize,
) -> Result<DMatrix<T>, KernelError>
where
    T: Float + Scalar,
    K: Kernel<T>,
{
    let n = point_count(points, dimensions)?;
    let mut gram = DMatrix::zeros(n, n);

    for i in 0..n {
        let a = &points[i * dimensions..(i + 1) * dimensions];

        gram[(i, i)] = if K::IS_NORMALIZED {
            T::one()
        } else {
            kernel.evaluate(a, a)
        };

        for j in (i + 1)..n {
            let b = &points[j * dimensions..(j + 1) * dimensions];
            let value = kernel.evaluate(a, b);
            gram[(i, j)] = value;
            gram[(j, i)] = value;
        }
    }

    Ok(gram)
}

/// Build the rectangular cross-Gram matrix K where K[i][j] = K(xᵢ, yⱼ).
///
/// Both point sets share the same dimension count; rows index `x_points`,
/// columns index `y_points`.
pub fn cross_gram_matrix<T, K>(
    kernel: &K,
    x_points: &[T],
    y_points: &[T],
    dimensions: usize,
) -> Result<DMatrix<T>, KernelError>
where
    T: Float + Scalar,
    K: Kernel<T>,
{
    let rows = point_count(x_points, dimensions)?;
    let cols = point_count(y_points, dimensions)?;
    let mut gram = DMatrix::zeros(rows, cols);

    for i in 0..rows {
        let a = &x_points[i * dimensions..(i + 1) * dimensions];
        for j in 0..cols {
            let b = &y_points[j * dimensions..(j + 1) * dimensions];
            gram[(i, j)] = kernel.evaluate(a, b);
        }
    }

    Ok(gram)
}

// ============================================================================
// Centering
// ============================================================================

/// Double-center a square Gram matrix.
///
/// Computes K' = K - 1ₙK - K1ₙ + 1ₙK1ₙ, the feature-space mean removal used
/// by kernel PCA. The input must be square.
pub fn center_gram<T>(gram: &DMatrix<T>) -> Result<DMatrix<T>, KernelError>
where
    T: Float + Scalar,
{
    let n = gram.nrows();
    if n != gram.ncols() {
        return Err(KernelError::NonSquareGram {
            rows: n,
            cols: gram.ncols(),
        });
    }
    if n == 0 {
        return Err(KernelError::EmptyInput);
    }

    let n_t = T::from(n).unwrap();

    let mut row_means: Vec<T> = Vec::with_capacity(n);
    for i in 0..n {
        let mut sum = T::zero();
        for j in 0..n {
            sum = sum + gram[(i, j)];
        }
        row_means.push(sum / n_t);
    }

    let mut col_means: Vec<T> = Vec::with_capacity(n);
    for j in 0..n {
        let mut sum = T::zero();
        for i in 0..n {
            sum = sum + gram[(i, j)];
        }
        col_means.push(sum / n_t);
    }

    let grand_mean = row_means.iter().fold(T::zero(), |acc, &m| acc + m) / n_t;

    let mut centered = DMatrix::zeros(n, n);
    for i in 0..n {
        for j in 0..n {
            centered[(i, j)] = gram[(i, j)] - row_means[i] - col_means[j] + grand_mean;
        }
    }

    Ok(centered)
}

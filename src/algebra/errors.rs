//! Unified error handling for dense linear-algebra routines.
//!
//! This module defines `AlgebraError`, the central error type used by the
//! symmetric inversion and matrix-bridging utilities in [`crate::algebra`].
//! It groups together structural failures (non-square inputs), numerical
//! degeneracies (non-finite entries, failed factorizations) and a generic
//! passthrough variant. An alias `AlgebraResult<T>` standardizes the return
//! type across linear-algebra code.

/// Unified error type for dense linear-algebra routines.
///
/// Covers structural violations, Cholesky factorization failures, and
/// generic passthrough errors. Designed to integrate seamlessly with
/// `anyhow::Error` via `From`, and to provide readable diagnostics through
/// `Display`.
#[derive(Debug, Clone, PartialEq)]
pub enum AlgebraError {
    // ---- Structural violations ----
    /// The input matrix is not square.
    NotSquare { rows: usize, cols: usize },

    /// The input matrix contains a NaN or ±∞ entry.
    NonFiniteEntry { row: usize, col: usize, value: f64 },

    // ---- Factorization failures ----
    /// Cholesky factorization failed: the matrix is singular or not
    /// positive-definite within working precision.
    NotPositiveDefinite { size: usize },

    // ---- Anyhow catchall ----
    Anyhow(String),
}

pub type AlgebraResult<T> = Result<T, AlgebraError>;

impl std::error::Error for AlgebraError {}

impl From<anyhow::Error> for AlgebraError {
    fn from(err: anyhow::Error) -> Self {
        AlgebraError::Anyhow(err.to_string())
    }
}

impl std::fmt::Display for AlgebraError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Structural violations ----
            AlgebraError::NotSquare { rows, cols } => {
                write!(f, "Algebra Error: Matrix is not square ({} x {})", rows, cols)
            }
            AlgebraError::NonFiniteEntry { row, col, value } => {
                write!(f, "Algebra Error: Non-finite entry {} at ({}, {})", value, row, col)
            }

            // ---- Factorization failures ----
            AlgebraError::NotPositiveDefinite { size } => write!(
                f,
                "Algebra Error: {} x {} matrix is singular or not positive-definite",
                size, size
            ),

            // ---- Anyhow catchall ----
            AlgebraError::Anyhow(msg) => write!(f, "Algebra Error: {}", msg),
        }
    }
}

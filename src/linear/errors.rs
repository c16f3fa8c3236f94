//! Errors for generalized linear least-squares fitting (input-contract
//! validation, numerical-instability signals, and lifecycle sequencing).
//!
//! This module defines the fit error type, [`FitError`], used across the
//! Python-facing API and the internal Rust core. It implements
//! `Display`/`Error`, converts from [`AlgebraError`] and `anyhow::Error`,
//! and converts to `PyErr` for PyO3 when the `python-bindings` feature is
//! enabled.
//!
//! ## Conventions
//! - **Indices are 0-based** (match Rust/NumPy).
//! - Contract violations (shapes, finiteness, underdetermination) are
//!   detected eagerly at construction; numerical-instability failures can
//!   only be detected at fit time since they depend on the data's values.
//! - All three families are reported to the caller as explicit failures;
//!   none are locally recovered, and no implicit regularization is applied.
use crate::algebra::errors::AlgebraError;

#[cfg(feature = "python-bindings")]
use pyo3::exceptions::PyValueError;
#[cfg(feature = "python-bindings")]
use pyo3::prelude::*;

/// Crate-wide result alias for fitting operations that may produce
/// [`FitError`].
pub type FitResult<T> = Result<T, FitError>;

/// Unified error type for linear least-squares fitting.
///
/// Covers input-contract violations detected at construction, numerical
/// instability detected at fit time, and sequencing violations (accessing
/// results before a successful fit). Implements `Display`/`Error` and
/// converts to a Python `ValueError` at PyO3 boundaries.
#[derive(Debug, Clone, PartialEq)]
pub enum FitError {
    // ---- Contract violations: observations ----
    /// The dependent-variable vector is empty.
    EmptyObservations,

    /// A dependent-variable entry is NaN/±inf.
    NonFiniteObservation { index: usize, value: f64 },

    // ---- Contract violations: design matrix ----
    /// The design matrix has zero rows (no free parameters).
    EmptyDesign,

    /// Design-matrix column count does not match the observation count.
    DesignLengthMismatch { expected: usize, actual: usize },

    /// A design-matrix entry is NaN/±inf.
    NonFiniteDesign { row: usize, col: usize, value: f64 },

    /// More free parameters than observations: the system is underdetermined.
    UnderdeterminedSystem { n_observations: usize, n_params: usize },

    // ---- Contract violations: data covariance ----
    /// Covariance matrix is not N×N for N observations.
    CovarianceShapeMismatch { expected: usize, rows: usize, cols: usize },

    /// A covariance entry is NaN/±inf.
    NonFiniteCovariance { row: usize, col: usize, value: f64 },

    /// Covariance matrix is not symmetric within tolerance.
    AsymmetricCovariance { row: usize, col: usize, delta: f64 },

    // ---- Numerical instability ----
    /// The data covariance matrix is singular or not positive-definite.
    SingularCovariance { size: usize },

    /// The normal-equations matrix `C·W·Cᵀ` is singular or not
    /// positive-definite.
    SingularNormalEquations { size: usize },

    /// The fit produced a non-finite parameter or statistic.
    NonFiniteSolution { index: usize, value: f64 },

    // ---- Sequencing ----
    /// A result accessor was invoked before `fit()` completed successfully.
    NotFitted,

    // ---- Anyhow catchall ----
    Anyhow(String),

    // ---- Fallback ----
    UnknownError,
}

impl std::error::Error for FitError {}

impl std::fmt::Display for FitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Contract violations: observations ----
            FitError::EmptyObservations => {
                write!(f, "Fit Error: Dependent-variable vector is empty")
            }
            FitError::NonFiniteObservation { index, value } => {
                write!(f, "Fit Error: Non-finite observation {} at index {}", value, index)
            }

            // ---- Contract violations: design matrix ----
            FitError::EmptyDesign => {
                write!(f, "Fit Error: Design matrix has no rows (no free parameters)")
            }
            FitError::DesignLengthMismatch { expected, actual } => write!(
                f,
                "Fit Error: Design matrix has {} columns but there are {} observations",
                actual, expected
            ),
            FitError::NonFiniteDesign { row, col, value } => {
                write!(f, "Fit Error: Non-finite design entry {} at ({}, {})", value, row, col)
            }
            FitError::UnderdeterminedSystem { n_observations, n_params } => write!(
                f,
                "Fit Error: Underdetermined system ({} parameters, {} observations)",
                n_params, n_observations
            ),

            // ---- Contract violations: data covariance ----
            FitError::CovarianceShapeMismatch { expected, rows, cols } => write!(
                f,
                "Fit Error: Covariance matrix is {} x {} but must be {} x {}",
                rows, cols, expected, expected
            ),
            FitError::NonFiniteCovariance { row, col, value } => {
                write!(f, "Fit Error: Non-finite covariance entry {} at ({}, {})", value, row, col)
            }
            FitError::AsymmetricCovariance { row, col, delta } => write!(
                f,
                "Fit Error: Covariance matrix is asymmetric at ({}, {}) (delta = {})",
                row, col, delta
            ),

            // ---- Numerical instability ----
            FitError::SingularCovariance { size } => write!(
                f,
                "Fit Error: {} x {} data covariance matrix is singular or not positive-definite",
                size, size
            ),
            FitError::SingularNormalEquations { size } => write!(
                f,
                "Fit Error: {} x {} normal-equations matrix is singular or not positive-definite",
                size, size
            ),
            FitError::NonFiniteSolution { index, value } => write!(
                f,
                "Fit Error: Fit produced non-finite value {} at parameter index {}",
                value, index
            ),

            // ---- Sequencing ----
            FitError::NotFitted => {
                write!(f, "Fit Error: Results requested before fit() completed successfully")
            }

            // ---- Anyhow catchall ----
            FitError::Anyhow(msg) => write!(f, "Fit Error: {}", msg),

            // ---- Fallback ----
            FitError::UnknownError => write!(f, "Fit Error: Unknown error occurred"),
        }
    }
}

impl From<anyhow::Error> for FitError {
    fn from(err: anyhow::Error) -> Self {
        FitError::Anyhow(err.to_string())
    }
}

impl From<AlgebraError> for FitError {
    /// Normalize linear-algebra failures that escape the fit-stage-specific
    /// mappings in the models layer. Factorization failures are mapped onto
    /// their stage variants (`SingularCovariance`, `SingularNormalEquations`)
    /// by the caller; anything arriving here is unexpected and carried as a
    /// catch-all message.
    fn from(err: AlgebraError) -> Self {
        FitError::Anyhow(err.to_string())
    }
}

#[cfg(feature = "python-bindings")]
impl From<FitError> for PyErr {
    fn from(err: FitError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

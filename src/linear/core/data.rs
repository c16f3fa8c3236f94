//! Validated input bundle for linear least-squares fitting.
//!
//! Purpose
//! -------
//! Provide `FitData`, a container pairing the dependent-variable vector
//! with its data covariance matrix and the design matrix, validated once
//! at construction so downstream fitting code can assume a consistent,
//! finite, well-shaped problem.
//!
//! Key behaviors
//! -------------
//! - Validate observations, design, and covariance on construction and
//!   reject contract violations with structured errors.
//! - Default the covariance to the N×N identity when none is supplied,
//!   reducing the generalized fit to ordinary (unweighted) least squares.
//! - Expose the problem dimensions N, K, and the degrees of freedom N−K.
//!
//! Invariants & assumptions
//! ------------------------
//! - `observations` has length N ≥ 1 with finite entries.
//! - `design` is K×N with `1 ≤ K ≤ N` and finite entries.
//! - `covariance` is N×N, finite, and symmetric within tolerance; its
//!   positive-definiteness is established later by the Cholesky
//!   factorization at fit time.
//! - The container is immutable after construction; fitting never mutates
//!   the inputs.
//!
//! Conventions
//! -----------
//! - The design matrix stores basis functions in rows: row k holds the
//!   k-th basis function evaluated at every observation, so the model is
//!   `y = Cᵀ·a`.
//!
//! Downstream usage
//! ----------------
//! - [`LinearFit`](crate::linear::models::gls::LinearFit) owns a `FitData`
//!   and reads it on every call to `fit`.
use crate::linear::core::validation::{
    validate_covariance, validate_design, validate_observations,
};
use crate::linear::errors::FitResult;
use ndarray::{Array1, Array2};

/// Validated inputs for a generalized linear least-squares problem.
///
/// Holds the dependent variables `M` (length N), their covariance `S`
/// (N×N), and the design matrix `C` (K×N). Construct via [`FitData::new`],
/// which enforces the shape, finiteness, and symmetry contract.
#[derive(Debug, Clone)]
pub struct FitData {
    /// Observed dependent variables, length N.
    pub observations: Array1<f64>,
    /// Data covariance matrix, N×N. Identity when no covariance was
    /// supplied.
    pub covariance: Array2<f64>,
    /// Design matrix, K×N, basis functions in rows.
    pub design: Array2<f64>,
}

impl FitData {
    /// Build a validated `FitData` from raw arrays.
    ///
    /// Parameters
    /// ----------
    /// - `observations`: `Array1<f64>`
    ///   Observed dependent variables, length N ≥ 1, finite.
    /// - `covariance`: `Option<Array2<f64>>`
    ///   Data covariance matrix, N×N, finite, symmetric. `None` selects
    ///   the identity matrix, i.e. an ordinary least-squares fit.
    /// - `design`: `Array2<f64>`
    ///   Design matrix, K×N with `1 ≤ K ≤ N`, finite.
    ///
    /// Returns
    /// -------
    /// `FitResult<FitData>`
    ///   - `Ok(FitData)` when all inputs honor the contract.
    ///   - `Err(FitError)` describing the first violation encountered.
    ///
    /// Errors
    /// ------
    /// - Any error produced by
    ///   [`validate_observations`], [`validate_design`], or
    ///   [`validate_covariance`].
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use rust_linearfit::linear::core::data::FitData;
    /// use ndarray::array;
    ///
    /// let observations = array![5.9, 5.4, 4.4];
    /// let design = array![[1.0, 1.0, 1.0], [0.0, 0.9, 1.8]];
    ///
    /// let data = FitData::new(observations, None, design).unwrap();
    /// assert_eq!(data.n_observations(), 3);
    /// assert_eq!(data.n_params(), 2);
    /// assert_eq!(data.n_freedom(), 1);
    /// ```
    pub fn new(
        observations: Array1<f64>,
        covariance: Option<Array2<f64>>,
        design: Array2<f64>,
    ) -> FitResult<Self> {
        validate_observations(&observations)?;
        let n_observations = observations.len();
        validate_design(&design, n_observations)?;
        let covariance = match covariance {
            Some(covariance) => {
                validate_covariance(&covariance, n_observations)?;
                covariance
            }
            None => Array2::<f64>::eye(n_observations),
        };
        Ok(FitData { observations, covariance, design })
    }

    /// Number of observations N.
    pub fn n_observations(&self) -> usize {
        self.observations.len()
    }

    /// Number of free parameters K.
    pub fn n_params(&self) -> usize {
        self.design.nrows()
    }

    /// Degrees of freedom N − K. Zero for exactly-determined systems.
    pub fn n_freedom(&self) -> usize {
        self.n_observations() - self.n_params()
    }
}

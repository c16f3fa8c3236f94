//! Fit-input validation helpers — reusable checks for observations, design
//! matrices, and data covariance matrices.
//!
//! Purpose
//! -------
//! Centralize small, reusable validation routines used across the linear
//! least-squares stack. These helpers enforce the input contract of the
//! fitting engine — shape consistency, finiteness, symmetry, and
//! determinedness — so higher-level constructors can fail fast with
//! structured errors.
//!
//! Key behaviors
//! -------------
//! - Validate the dependent-variable vector (non-empty, finite).
//! - Validate the design matrix against the observation count (K×N shape,
//!   finite entries, N ≥ K).
//! - Validate the data covariance matrix (N×N shape, finite entries,
//!   symmetry within [`SYMMETRY_TOL`]).
//!
//! Invariants & assumptions
//! ------------------------
//! - All matrix entries must be finite `f64` values; NaN and ±∞ are input
//!   contract violations, never silently propagated.
//! - `N == K` (zero degrees of freedom) is admissible: parameters are still
//!   identified, only the reduced chi-square is undefined. `K > N` is not.
//! - Positive-definiteness of the covariance is *not* checked here; it is a
//!   property of the numeric values and is detected at fit time by the
//!   Cholesky factorization.
//!
//! Conventions
//! -----------
//! - Indices are 0-based and follow the usual Rust/ndarray conventions.
//! - Validation functions return [`FitResult`] and never panic on invalid
//!   *inputs*; panics are reserved for programming errors elsewhere.
//! - This module contains no I/O and no logging; it only inspects numeric
//!   values and array shapes.
//!
//! Downstream usage
//! ----------------
//! - Call these helpers from [`FitData::new`](crate::linear::core::data::FitData::new)
//!   to enforce documented invariants at the boundary of the API.
//!
//! Testing notes
//! -------------
//! - Unit tests exercise each helper on representative valid and invalid
//!   inputs, including boundary cases (zeros, infinities, NaNs, length
//!   off-by-1, exactly-determined systems).
//! - Integration tests rely on the higher-level constructors that *call*
//!   these helpers rather than re-testing the raw validation logic.
use crate::linear::errors::{FitError, FitResult};
use ndarray::{Array1, Array2};

/// Tolerance for the covariance symmetry check, relative to the magnitude
/// of the compared entries.
pub const SYMMETRY_TOL: f64 = 1e-8;

/// Validate the dependent-variable vector.
///
/// Parameters
/// ----------
/// - `observations`: `&Array1<f64>`
///   Observed dependent variables, one entry per measurement. Must be
///   non-empty with finite entries.
///
/// Returns
/// -------
/// `FitResult<()>`
///   - `Ok(())` if the vector is non-empty and all entries are finite.
///   - `Err(FitError)` describing the first violation encountered.
///
/// Errors
/// ------
/// - `FitError::EmptyObservations`
///   Returned if `observations.len() == 0`.
/// - `FitError::NonFiniteObservation`
///   Returned if any entry is NaN or ±∞, with the offending index and value.
///
/// Panics
/// ------
/// - Never panics.
///
/// Examples
/// --------
/// ```rust
/// # use rust_linearfit::linear::core::validation::validate_observations;
/// # use rust_linearfit::linear::errors::FitError;
/// use ndarray::array;
///
/// let obs = array![5.9, 5.4, 4.4];
/// assert!(validate_observations(&obs).is_ok());
///
/// let bad_obs = array![5.9, f64::NAN, 4.4];
/// assert!(matches!(
///     validate_observations(&bad_obs),
///     Err(FitError::NonFiniteObservation { .. })
/// ));
/// ```
pub fn validate_observations(observations: &Array1<f64>) -> FitResult<()> {
    if observations.is_empty() {
        return Err(FitError::EmptyObservations);
    }
    for (index, &value) in observations.iter().enumerate() {
        if !value.is_finite() {
            return Err(FitError::NonFiniteObservation { index, value });
        }
    }
    Ok(())
}

/// Validate the design matrix against the observation count.
///
/// Parameters
/// ----------
/// - `design`: `&Array2<f64>`
///   Design matrix of shape K×N: row k holds the k-th basis function
///   evaluated at every observation.
/// - `n_observations`: `usize`
///   Number of observations N the design must be conformable with.
///
/// Returns
/// -------
/// `FitResult<()>`
///   - `Ok(())` if the design is K×N with `1 ≤ K ≤ N` and finite entries.
///   - `Err(FitError)` describing the first violation encountered.
///
/// Errors
/// ------
/// - `FitError::EmptyDesign`
///   Returned if the design has zero rows.
/// - `FitError::DesignLengthMismatch`
///   Returned if `design.ncols() != n_observations`. Mismatched lengths are
///   never truncated or broadcast.
/// - `FitError::NonFiniteDesign`
///   Returned if any entry is NaN or ±∞, with its position and value.
/// - `FitError::UnderdeterminedSystem`
///   Returned if `design.nrows() > n_observations` (more free parameters
///   than observations). `K == N` is admissible.
///
/// Panics
/// ------
/// - Never panics.
///
/// Examples
/// --------
/// ```rust
/// # use rust_linearfit::linear::core::validation::validate_design;
/// # use rust_linearfit::linear::errors::FitError;
/// use ndarray::array;
///
/// // Straight-line basis: a row of ones and a row of abscissae.
/// let design = array![[1.0, 1.0, 1.0], [0.0, 0.9, 1.8]];
/// assert!(validate_design(&design, 3).is_ok());
///
/// assert!(matches!(
///     validate_design(&design, 4),
///     Err(FitError::DesignLengthMismatch { expected: 4, actual: 3 })
/// ));
/// ```
pub fn validate_design(design: &Array2<f64>, n_observations: usize) -> FitResult<()> {
    let (n_params, n_cols) = design.dim();
    if n_params == 0 {
        return Err(FitError::EmptyDesign);
    }
    if n_cols != n_observations {
        return Err(FitError::DesignLengthMismatch { expected: n_observations, actual: n_cols });
    }
    for ((row, col), &value) in design.indexed_iter() {
        if !value.is_finite() {
            return Err(FitError::NonFiniteDesign { row, col, value });
        }
    }
    if n_params > n_observations {
        return Err(FitError::UnderdeterminedSystem { n_observations, n_params });
    }
    Ok(())
}

/// Validate the data covariance matrix against the observation count.
///
/// Parameters
/// ----------
/// - `covariance`: `&Array2<f64>`
///   Covariance matrix of the dependent variable. Must be N×N, finite, and
///   symmetric within [`SYMMETRY_TOL`].
/// - `n_observations`: `usize`
///   Number of observations N the covariance must be conformable with.
///
/// Returns
/// -------
/// `FitResult<()>`
///   - `Ok(())` if the matrix is N×N, finite, and symmetric.
///   - `Err(FitError)` describing the first violation encountered.
///
/// Errors
/// ------
/// - `FitError::CovarianceShapeMismatch`
///   Returned if the matrix is not N×N.
/// - `FitError::NonFiniteCovariance`
///   Returned if any entry is NaN or ±∞, with its position and value.
/// - `FitError::AsymmetricCovariance`
///   Returned if `|S[i,j] − S[j,i]|` exceeds `SYMMETRY_TOL` relative to the
///   magnitude of the entries, with the position and the absolute
///   difference.
///
/// Panics
/// ------
/// - Never panics.
///
/// Notes
/// -----
/// - Positive-definiteness is deliberately not checked here; it is detected
///   at fit time by the Cholesky factorization, where failure is reported
///   as a numerical-instability error rather than a contract violation.
pub fn validate_covariance(covariance: &Array2<f64>, n_observations: usize) -> FitResult<()> {
    let (rows, cols) = covariance.dim();
    if rows != n_observations || cols != n_observations {
        return Err(FitError::CovarianceShapeMismatch { expected: n_observations, rows, cols });
    }
    for ((row, col), &value) in covariance.indexed_iter() {
        if !value.is_finite() {
            return Err(FitError::NonFiniteCovariance { row, col, value });
        }
    }
    for row in 0..rows {
        for col in (row + 1)..cols {
            let upper = covariance[[row, col]];
            let lower = covariance[[col, row]];
            let delta = (upper - lower).abs();
            let scale = 1.0_f64.max(upper.abs()).max(lower.abs());
            if delta > SYMMETRY_TOL * scale {
                return Err(FitError::AsymmetricCovariance { row, col, delta });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Validation of the dependent-variable vector (emptiness, finiteness).
    // - Validation of the design matrix (shape, finiteness, determinedness,
    //   including the admissible K == N boundary).
    // - Validation of the covariance matrix (shape, finiteness, symmetry
    //   within tolerance).
    //
    // They intentionally DO NOT cover:
    // - Positive-definiteness, which is checked at fit time by the Cholesky
    //   factorization in the algebra module.
    // - High-level engine behavior (normal equations, chi-square values).
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // `validate_observations` accepts a non-empty, finite vector.
    //
    // Given
    // -----
    // - `observations = [5.9, 5.4, 4.4]`.
    //
    // Expect
    // ------
    // - `Ok(())` is returned.
    fn validate_observations_with_finite_values_returns_ok() {
        // Arrange
        let observations = array![5.9_f64, 5.4_f64, 4.4_f64];

        // Act
        let result = validate_observations(&observations);

        // Assert
        assert!(result.is_ok());
    }

    #[test]
    // Purpose
    // -------
    // `validate_observations` rejects an empty vector with EmptyObservations.
    //
    // Given
    // -----
    // - A zero-length observation vector.
    //
    // Expect
    // ------
    // - `Err(FitError::EmptyObservations)`.
    fn validate_observations_with_empty_vector_returns_empty_observations() {
        // Arrange
        let observations = Array1::<f64>::zeros(0);

        // Act
        let result = validate_observations(&observations);

        // Assert
        assert!(matches!(result, Err(FitError::EmptyObservations)));
    }

    #[test]
    // Purpose
    // -------
    // `validate_observations` rejects NaN and ±∞ entries with the offending
    // index and value.
    //
    // Given
    // -----
    // - `observations = [5.9, inf, 4.4]`.
    //
    // Expect
    // ------
    // - `Err(FitError::NonFiniteObservation { index: 1, .. })`.
    fn validate_observations_with_non_finite_value_returns_non_finite_observation() {
        // Arrange
        let observations = array![5.9_f64, f64::INFINITY, 4.4_f64];

        // Act
        let result = validate_observations(&observations);

        // Assert
        match result {
            Err(FitError::NonFiniteObservation { index, value }) => {
                assert_eq!(index, 1);
                assert!(value.is_infinite());
            }
            other => panic!("expected NonFiniteObservation error, got: {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // `validate_design` accepts a K×N design with K ≤ N and finite entries.
    //
    // Given
    // -----
    // - A 2×3 straight-line design with `n_observations = 3`.
    //
    // Expect
    // ------
    // - `Ok(())` is returned.
    fn validate_design_with_consistent_shape_returns_ok() {
        // Arrange
        let design = array![[1.0, 1.0, 1.0], [0.0, 0.9, 1.8]];

        // Act
        let result = validate_design(&design, 3);

        // Assert
        assert!(result.is_ok());
    }

    #[test]
    // Purpose
    // -------
    // `validate_design` accepts the exactly-determined K == N boundary.
    //
    // Given
    // -----
    // - A 2×2 design with `n_observations = 2`.
    //
    // Expect
    // ------
    // - `Ok(())` is returned (zero degrees of freedom is admissible).
    fn validate_design_with_exactly_determined_system_returns_ok() {
        // Arrange
        let design = array![[1.0, 1.0], [0.0, 1.0]];

        // Act
        let result = validate_design(&design, 2);

        // Assert
        assert!(result.is_ok());
    }

    #[test]
    // Purpose
    // -------
    // `validate_design` rejects column-count mismatches with
    // DesignLengthMismatch rather than truncating or broadcasting.
    //
    // Given
    // -----
    // - A 2×3 design validated against `n_observations = 4`.
    //
    // Expect
    // ------
    // - `Err(FitError::DesignLengthMismatch { expected: 4, actual: 3 })`.
    fn validate_design_with_column_mismatch_returns_design_length_mismatch() {
        // Arrange
        let design = array![[1.0, 1.0, 1.0], [0.0, 0.9, 1.8]];

        // Act
        let result = validate_design(&design, 4);

        // Assert
        match result {
            Err(FitError::DesignLengthMismatch { expected, actual }) => {
                assert_eq!(expected, 4);
                assert_eq!(actual, 3);
            }
            other => panic!("expected DesignLengthMismatch error, got: {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // `validate_design` rejects zero-row designs with EmptyDesign.
    //
    // Given
    // -----
    // - A 0×3 design matrix.
    //
    // Expect
    // ------
    // - `Err(FitError::EmptyDesign)`.
    fn validate_design_with_zero_rows_returns_empty_design() {
        // Arrange
        let design = Array2::<f64>::zeros((0, 3));

        // Act
        let result = validate_design(&design, 3);

        // Assert
        assert!(matches!(result, Err(FitError::EmptyDesign)));
    }

    #[test]
    // Purpose
    // -------
    // `validate_design` rejects non-finite entries with position and value.
    //
    // Given
    // -----
    // - A 2×3 design with a NaN at (1, 2).
    //
    // Expect
    // ------
    // - `Err(FitError::NonFiniteDesign { row: 1, col: 2, .. })`.
    fn validate_design_with_non_finite_entry_returns_non_finite_design() {
        // Arrange
        let design = array![[1.0, 1.0, 1.0], [0.0, 0.9, f64::NAN]];

        // Act
        let result = validate_design(&design, 3);

        // Assert
        match result {
            Err(FitError::NonFiniteDesign { row, col, value }) => {
                assert_eq!(row, 1);
                assert_eq!(col, 2);
                assert!(value.is_nan());
            }
            other => panic!("expected NonFiniteDesign error, got: {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // `validate_design` rejects K > N with UnderdeterminedSystem.
    //
    // Given
    // -----
    // - A 3×2 design with `n_observations = 2`.
    //
    // Expect
    // ------
    // - `Err(FitError::UnderdeterminedSystem { n_observations: 2, n_params: 3 })`.
    fn validate_design_with_more_params_than_observations_returns_underdetermined() {
        // Arrange
        let design = array![[1.0, 1.0], [0.0, 1.0], [0.0, 2.0]];

        // Act
        let result = validate_design(&design, 2);

        // Assert
        match result {
            Err(FitError::UnderdeterminedSystem { n_observations, n_params }) => {
                assert_eq!(n_observations, 2);
                assert_eq!(n_params, 3);
            }
            other => panic!("expected UnderdeterminedSystem error, got: {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // `validate_covariance` accepts a symmetric N×N matrix with finite
    // entries.
    //
    // Given
    // -----
    // - A dense symmetric 2×2 covariance with `n_observations = 2`.
    //
    // Expect
    // ------
    // - `Ok(())` is returned.
    fn validate_covariance_with_symmetric_matrix_returns_ok() {
        // Arrange
        let covariance = array![[1.0, 0.25], [0.25, 2.0]];

        // Act
        let result = validate_covariance(&covariance, 2);

        // Assert
        assert!(result.is_ok());
    }

    #[test]
    // Purpose
    // -------
    // `validate_covariance` rejects wrongly shaped matrices with
    // CovarianceShapeMismatch.
    //
    // Given
    // -----
    // - A 2×2 covariance validated against `n_observations = 3`.
    //
    // Expect
    // ------
    // - `Err(FitError::CovarianceShapeMismatch { expected: 3, rows: 2, cols: 2 })`.
    fn validate_covariance_with_wrong_shape_returns_covariance_shape_mismatch() {
        // Arrange
        let covariance = array![[1.0, 0.0], [0.0, 1.0]];

        // Act
        let result = validate_covariance(&covariance, 3);

        // Assert
        match result {
            Err(FitError::CovarianceShapeMismatch { expected, rows, cols }) => {
                assert_eq!(expected, 3);
                assert_eq!(rows, 2);
                assert_eq!(cols, 2);
            }
            other => panic!("expected CovarianceShapeMismatch error, got: {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // `validate_covariance` rejects non-finite entries with position and
    // value.
    //
    // Given
    // -----
    // - A 2×2 covariance with +∞ at (0, 1).
    //
    // Expect
    // ------
    // - `Err(FitError::NonFiniteCovariance { row: 0, col: 1, .. })`.
    fn validate_covariance_with_non_finite_entry_returns_non_finite_covariance() {
        // Arrange
        let covariance = array![[1.0, f64::INFINITY], [0.0, 1.0]];

        // Act
        let result = validate_covariance(&covariance, 2);

        // Assert
        match result {
            Err(FitError::NonFiniteCovariance { row, col, value }) => {
                assert_eq!(row, 0);
                assert_eq!(col, 1);
                assert!(value.is_infinite());
            }
            other => panic!("expected NonFiniteCovariance error, got: {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // `validate_covariance` rejects asymmetric matrices beyond the
    // symmetry tolerance.
    //
    // Given
    // -----
    // - A 2×2 matrix whose off-diagonal entries differ by 1e-3.
    //
    // Expect
    // ------
    // - `Err(FitError::AsymmetricCovariance { row: 0, col: 1, .. })`.
    fn validate_covariance_with_asymmetric_matrix_returns_asymmetric_covariance() {
        // Arrange
        let covariance = array![[1.0, 0.5], [0.501, 1.0]];

        // Act
        let result = validate_covariance(&covariance, 2);

        // Assert
        match result {
            Err(FitError::AsymmetricCovariance { row, col, delta }) => {
                assert_eq!(row, 0);
                assert_eq!(col, 1);
                assert!((delta - 1e-3).abs() < 1e-12);
            }
            other => panic!("expected AsymmetricCovariance error, got: {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // `validate_covariance` tolerates asymmetry at floating-point rounding
    // scale (below SYMMETRY_TOL).
    //
    // Given
    // -----
    // - A 2×2 matrix whose off-diagonal entries differ by 1e-12.
    //
    // Expect
    // ------
    // - `Ok(())` is returned.
    fn validate_covariance_with_rounding_scale_asymmetry_returns_ok() {
        // Arrange
        let covariance = array![[1.0, 0.5], [0.5 + 1e-12, 1.0]];

        // Act
        let result = validate_covariance(&covariance, 2);

        // Assert
        assert!(result.is_ok());
    }
}

//! algebra::solve — symmetric positive-definite inversion utilities.
//!
//! Purpose
//! -------
//! Provide a thin bridge between `ndarray` and `nalgebra` types and a
//! numerically explicit inversion routine for symmetric positive-definite
//! (SPD) matrices. Fitting code keeps its matrices in `ndarray` form and
//! calls into this module whenever a precision matrix or a parameter
//! covariance matrix has to be obtained by direct inversion.
//!
//! Key behaviors
//! -------------
//! - Copy a square `ndarray` matrix into a `nalgebra::DMatrix`
//!   ([`fill_dmatrix`]) for factorization-based linear algebra.
//! - Invert an SPD matrix via Cholesky factorization ([`invert_spd`]),
//!   reporting singular or indefinite inputs as structured errors instead
//!   of returning silently corrupted values.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs to [`invert_spd`] must be square with finite entries; both
//!   conditions are checked and violations surface as [`AlgebraError`].
//! - The matrix passed to [`invert_spd`] is treated as symmetric; only
//!   the values actually stored are copied, no re-symmetrization is
//!   performed here.
//! - A failed Cholesky factorization is interpreted as "singular or not
//!   positive-definite within working precision". No pseudo-inverse or
//!   regularization fallback is attempted.
//!
//! Conventions
//! -----------
//! - All matrices are dense `f64`. Errors are reported via
//!   [`AlgebraResult<T>`]; these routines never panic on invalid numeric
//!   input.
//!
//! Downstream usage
//! ----------------
//! - The generalized least-squares engine calls [`invert_spd`] twice per
//!   fit: once for the data covariance and once for the normal-equations
//!   matrix. Callers map [`AlgebraError::NotPositiveDefinite`] onto their
//!   own, stage-specific error variants.
use crate::algebra::errors::{AlgebraError, AlgebraResult};
use nalgebra::DMatrix;
use ndarray::Array2;

/// Copy a square `ndarray` matrix into a preallocated `nalgebra::DMatrix`.
///
/// Parameters
/// ----------
/// - `source`: `&Array2<f64>`
///   Square `n×n` matrix in `ndarray` form.
/// - `dest`: `&mut DMatrix<f64>`
///   Preallocated `n×n` `DMatrix` that receives the contents of `source`.
///   Must have the same dimensions as `source`.
///
/// Returns
/// -------
/// `()`
///   Mutates `dest` in place; no value is returned.
///
/// Panics
/// ------
/// - May panic if `source` and `dest` have inconsistent shapes, due to
///   out-of-bounds indexing. Shape agreement is the caller's contract.
///
/// Notes
/// -----
/// - The copy proceeds column by column, matching the internal storage of
///   `DMatrix` (column-major) and improving cache locality compared to a
///   row-major traversal.
pub(crate) fn fill_dmatrix(source: &Array2<f64>, dest: &mut DMatrix<f64>) {
    let n = source.ncols();
    for j in 0..n {
        for i in 0..n {
            dest[(i, j)] = source[[i, j]];
        }
    }
}

/// Invert a symmetric positive-definite matrix via Cholesky factorization.
///
/// Parameters
/// ----------
/// - `matrix`: `&Array2<f64>`
///   Square, symmetric, positive-definite matrix with finite entries.
///
/// Returns
/// -------
/// `AlgebraResult<Array2<f64>>`
///   The inverse of `matrix` as a dense `ndarray` matrix.
///
/// Errors
/// ------
/// - `AlgebraError::NotSquare`
///   Returned if `matrix.nrows() != matrix.ncols()`.
/// - `AlgebraError::NonFiniteEntry`
///   Returned if any entry of `matrix` is NaN or ±∞, with the offending
///   position and value.
/// - `AlgebraError::NotPositiveDefinite`
///   Returned if the Cholesky factorization fails, i.e. the matrix is
///   singular or indefinite within working precision.
///
/// Panics
/// ------
/// - Never panics under the documented invariants.
///
/// Notes
/// -----
/// - Cholesky factorization doubles as the positive-definiteness check:
///   there is no separate condition-number estimate, and near-singular
///   matrices that still factor successfully are inverted as-is.
///
/// Examples
/// --------
/// ```rust
/// # use ndarray::array;
/// # use rust_linearfit::algebra::solve::invert_spd;
/// let m = array![[4.0, 0.0], [0.0, 2.0]];
/// let inv = invert_spd(&m).unwrap();
/// assert!((inv[[0, 0]] - 0.25).abs() < 1e-12);
/// assert!((inv[[1, 1]] - 0.5).abs() < 1e-12);
/// ```
pub fn invert_spd(matrix: &Array2<f64>) -> AlgebraResult<Array2<f64>> {
    let (rows, cols) = matrix.dim();
    if rows != cols {
        return Err(AlgebraError::NotSquare { rows, cols });
    }
    for ((row, col), &value) in matrix.indexed_iter() {
        if !value.is_finite() {
            return Err(AlgebraError::NonFiniteEntry { row, col, value });
        }
    }

    let mut dm = DMatrix::<f64>::zeros(rows, cols);
    fill_dmatrix(matrix, &mut dm);
    let chol =
        nalgebra::Cholesky::new(dm).ok_or(AlgebraError::NotPositiveDefinite { size: rows })?;
    let inv = chol.inverse();

    let mut out = Array2::<f64>::zeros((rows, cols));
    for i in 0..rows {
        for j in 0..cols {
            out[[i, j]] = inv[(i, j)];
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Correct copying of matrices from `ndarray` into `DMatrix`.
    // - SPD inversion for diagonal and dense well-conditioned matrices,
    //   checked against analytic inverses and the A·A⁻¹ = I identity.
    // - Error paths: non-square inputs, non-finite entries, and singular /
    //   indefinite matrices.
    //
    // They intentionally DO NOT cover:
    // - The fitting engine's mapping of AlgebraError onto fit-stage errors;
    //   that is tested in the models layer.
    // -------------------------------------------------------------------------

    const TOL: f64 = 1e-12;

    #[test]
    // Purpose
    // -------
    // Verify that `fill_dmatrix` copies entries from an `ndarray` matrix
    // into a `nalgebra::DMatrix` without altering values.
    //
    // Given
    // -----
    // - A small 2×2 matrix with distinct entries.
    //
    // Expect
    // ------
    // - The corresponding `DMatrix` has identical entries at all positions.
    fn fill_dmatrix_copies_ndarray_into_dmatrix_without_modification() {
        // Arrange
        let source = array![[2.0, 0.5], [0.25, 1.0]];
        let mut dest = DMatrix::<f64>::zeros(2, 2);

        // Act
        fill_dmatrix(&source, &mut dest);

        // Assert
        assert_eq!(dest[(0, 0)], 2.0);
        assert_eq!(dest[(0, 1)], 0.5);
        assert_eq!(dest[(1, 0)], 0.25);
        assert_eq!(dest[(1, 1)], 1.0);
    }

    #[test]
    // Purpose
    // -------
    // `invert_spd` matches the analytic inverse of a diagonal matrix.
    //
    // Given
    // -----
    // - `m = diag(4, 2, 0.5)`.
    //
    // Expect
    // ------
    // - The inverse is `diag(0.25, 0.5, 2)` up to numerical tolerance.
    fn invert_spd_diagonal_matches_analytic_inverse() {
        // Arrange
        let m = array![[4.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 0.5]];

        // Act
        let inv = invert_spd(&m).unwrap();

        // Assert
        assert_relative_eq!(inv[[0, 0]], 0.25, epsilon = TOL);
        assert_relative_eq!(inv[[1, 1]], 0.5, epsilon = TOL);
        assert_relative_eq!(inv[[2, 2]], 2.0, epsilon = TOL);
        assert_relative_eq!(inv[[0, 1]], 0.0, epsilon = TOL);
    }

    #[test]
    // Purpose
    // -------
    // `invert_spd` produces a proper inverse for a dense SPD matrix.
    //
    // Given
    // -----
    // - A dense symmetric positive-definite 2×2 matrix.
    //
    // Expect
    // ------
    // - `m · invert_spd(m)` equals the identity up to numerical tolerance.
    fn invert_spd_dense_product_with_inverse_is_identity() {
        // Arrange
        let m = array![[2.0, 0.5], [0.5, 1.0]];

        // Act
        let inv = invert_spd(&m).unwrap();
        let product = m.dot(&inv);

        // Assert
        for i in 0..2 {
            for j in 0..2 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(product[[i, j]], expected, epsilon = 1e-10);
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // `invert_spd` rejects non-square inputs with NotSquare.
    //
    // Given
    // -----
    // - A 2×3 matrix.
    //
    // Expect
    // ------
    // - `Err(AlgebraError::NotSquare { rows: 2, cols: 3 })`.
    fn invert_spd_with_non_square_input_returns_not_square() {
        // Arrange
        let m = Array2::<f64>::zeros((2, 3));

        // Act
        let result = invert_spd(&m);

        // Assert
        match result {
            Err(AlgebraError::NotSquare { rows, cols }) => {
                assert_eq!(rows, 2);
                assert_eq!(cols, 3);
            }
            other => panic!("expected NotSquare error, got: {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // `invert_spd` rejects matrices containing NaN or ±∞ entries.
    //
    // Given
    // -----
    // - A 2×2 matrix with a NaN at (1, 0).
    //
    // Expect
    // ------
    // - `Err(AlgebraError::NonFiniteEntry { row: 1, col: 0, .. })`.
    fn invert_spd_with_non_finite_entry_returns_non_finite_entry() {
        // Arrange
        let m = array![[1.0, 0.0], [f64::NAN, 1.0]];

        // Act
        let result = invert_spd(&m);

        // Assert
        match result {
            Err(AlgebraError::NonFiniteEntry { row, col, value }) => {
                assert_eq!(row, 1);
                assert_eq!(col, 0);
                assert!(value.is_nan());
            }
            other => panic!("expected NonFiniteEntry error, got: {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // `invert_spd` reports singular matrices as NotPositiveDefinite.
    //
    // Given
    // -----
    // - A rank-1 2×2 matrix (second row is a multiple of the first).
    //
    // Expect
    // ------
    // - `Err(AlgebraError::NotPositiveDefinite { size: 2 })`.
    fn invert_spd_with_singular_matrix_returns_not_positive_definite() {
        // Arrange
        let m = array![[1.0, 2.0], [2.0, 4.0]];

        // Act
        let result = invert_spd(&m);

        // Assert
        match result {
            Err(AlgebraError::NotPositiveDefinite { size }) => assert_eq!(size, 2),
            other => panic!("expected NotPositiveDefinite error, got: {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // `invert_spd` reports indefinite matrices as NotPositiveDefinite.
    //
    // Given
    // -----
    // - A symmetric matrix with a negative eigenvalue.
    //
    // Expect
    // ------
    // - `Err(AlgebraError::NotPositiveDefinite { .. })`.
    fn invert_spd_with_indefinite_matrix_returns_not_positive_definite() {
        // Arrange
        let m = array![[1.0, 2.0], [2.0, 1.0]]; // eigenvalues 3 and -1

        // Act
        let result = invert_spd(&m);

        // Assert
        assert!(matches!(result, Err(AlgebraError::NotPositiveDefinite { .. })));
    }
}

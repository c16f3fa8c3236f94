//! Generalized linear least-squares model: closed-form weighted fit with
//! full data covariance.
//!
//! This module wires a [`FitData`] problem to the normal-equations solver.
//! The model is `y = Cᵀ·a` for a K×N design matrix `C` holding basis
//! functions in rows; the data covariance `S` enters through its inverse,
//! the precision matrix `W = S⁻¹`.
//!
//! Key ideas:
//! - The solve is fully deterministic: form `A = C·W·Cᵀ` and `b = C·W·M`,
//!   invert `A` by Cholesky, and read off `â = A⁻¹·b`.
//! - `A⁻¹` is simultaneously the formal parameter covariance, so the
//!   uncertainties and correlation matrix fall out of the same
//!   factorization.
//! - Both inversions go through [`invert_spd`], which treats loss of
//!   positive-definiteness as a hard numerical-instability error rather
//!   than falling back to a pseudo-inverse.
use crate::{
    algebra::{errors::AlgebraError, solve::invert_spd},
    linear::{
        core::{data::FitData, summary::FitSummary},
        errors::{FitError, FitResult},
    },
};
use ndarray::{Array1, Array2};

/// Generalized linear least-squares model `y = Cᵀ·a`.
///
/// Encapsulates the validated inputs (`data`) and, after fitting, the
/// complete result set (`summary`). Construction validates the problem;
/// [`fit`](LinearFit::fit) performs the closed-form solve.
///
/// # Notes
/// - The inputs are immutable after construction: `fit` reads `data` and
///   writes `summary`, so repeated calls recompute the identical result.
/// - Accessors return [`FitError::NotFitted`] until `fit` has succeeded.
#[derive(Debug, Clone)]
pub struct LinearFit {
    /// Validated problem inputs.
    pub data: FitData,
    /// Fit results (populated after `fit`).
    pub summary: Option<FitSummary>,
}

impl LinearFit {
    /// Construct a new [`LinearFit`] from raw arrays.
    ///
    /// # Arguments
    /// - `observations`: dependent variables `M`, length N ≥ 1, finite.
    /// - `covariance`: data covariance `S`, N×N, finite, symmetric; `None`
    ///   selects the identity, i.e. an ordinary least-squares fit.
    /// - `design`: design matrix `C`, K×N with `1 ≤ K ≤ N`, finite, basis
    ///   functions in rows.
    ///
    /// # Returns
    /// An unfitted model holding validated inputs.
    ///
    /// # Errors
    /// - Propagates any contract violation detected by
    ///   [`FitData::new`](crate::linear::core::data::FitData::new).
    pub fn new(
        observations: Array1<f64>,
        covariance: Option<Array2<f64>>,
        design: Array2<f64>,
    ) -> FitResult<LinearFit> {
        let data = FitData::new(observations, covariance, design)?;
        Ok(LinearFit { data, summary: None })
    }

    /// Solve the generalized least-squares problem and cache the results.
    ///
    /// ## Steps
    /// 1. Invert the data covariance by Cholesky to obtain the precision
    ///    matrix `W = S⁻¹`.
    /// 2. Form the normal matrix `A = C·W·Cᵀ` and right-hand side
    ///    `b = C·W·M`.
    /// 3. Invert `A` by Cholesky; `A⁻¹` is the formal parameter covariance.
    /// 4. Read off `â = A⁻¹·b`, the fitted values `Cᵀ·â`, the residuals
    ///    `r = M − Cᵀ·â`, and `chi² = rᵀ·W·r`.
    /// 5. Derive the formal uncertainties, the correlation matrix, and —
    ///    when N > K — the chi-square-normalized covariance and
    ///    uncertainties.
    /// 6. Store everything in `self.summary`.
    ///
    /// ## Returns
    /// - `Ok(())` on success; `self.summary` is populated.
    ///
    /// ## Errors
    /// - [`FitError::SingularCovariance`] if `S` is not positive definite.
    /// - [`FitError::SingularNormalEquations`] if `A` is not positive
    ///   definite, e.g. for linearly dependent basis functions.
    /// - [`FitError::NonFiniteSolution`] if the solve produces NaN or ±∞
    ///   parameter estimates.
    ///
    /// ## Notes
    /// - On any error `self.summary` is left unset; a previously cached
    ///   summary is cleared before the solve begins so a failed refit can
    ///   never serve stale results.
    pub fn fit(&mut self) -> FitResult<()> {
        self.summary = None;
        let precision = invert_spd(&self.data.covariance).map_err(|err| match err {
            AlgebraError::NotPositiveDefinite { size } => FitError::SingularCovariance { size },
            other => FitError::from(other),
        })?;
        let weighted_design = self.data.design.dot(&precision);
        let normal = weighted_design.dot(&self.data.design.t());
        let rhs = weighted_design.dot(&self.data.observations);
        let formal_covariance = invert_spd(&normal).map_err(|err| match err {
            AlgebraError::NotPositiveDefinite { size } => {
                FitError::SingularNormalEquations { size }
            }
            other => FitError::from(other),
        })?;
        let params = formal_covariance.dot(&rhs);
        for (index, &value) in params.iter().enumerate() {
            if !value.is_finite() {
                return Err(FitError::NonFiniteSolution { index, value });
            }
        }
        let fitted_values = self.data.design.t().dot(&params);
        let residuals = &self.data.observations - &fitted_values;
        let chi_square = residuals.dot(&precision.dot(&residuals));
        let formal_uncertainty = formal_covariance.diag().mapv(f64::sqrt);
        let correlation = correlation_from_covariance(&formal_covariance, &formal_uncertainty);
        let n_freedom = self.data.n_freedom();
        let (normalized_covariance, normalized_uncertainty) = if n_freedom > 0 {
            let scale = chi_square / n_freedom as f64;
            (
                Some(&formal_covariance * scale),
                Some(&formal_uncertainty * scale.sqrt()),
            )
        } else {
            (None, None)
        };
        self.summary = Some(FitSummary {
            params,
            formal_covariance,
            formal_uncertainty,
            normalized_covariance,
            normalized_uncertainty,
            correlation,
            fitted_values,
            residuals,
            chi_square,
            n_freedom,
        });
        Ok(())
    }

    /// Complete fit results, or [`FitError::NotFitted`] before a
    /// successful `fit`.
    pub fn summary(&self) -> FitResult<&FitSummary> {
        self.summary.as_ref().ok_or(FitError::NotFitted)
    }

    /// Estimated parameter vector `â`, length K.
    pub fn params(&self) -> FitResult<&Array1<f64>> {
        Ok(&self.summary()?.params)
    }

    /// Formal parameter covariance `(C·S⁻¹·Cᵀ)⁻¹`, K×K.
    pub fn parameter_covariance(&self) -> FitResult<&Array2<f64>> {
        Ok(&self.summary()?.formal_covariance)
    }

    /// Formal 1-sigma parameter uncertainties, length K.
    pub fn parameter_uncertainties(&self) -> FitResult<&Array1<f64>> {
        Ok(&self.summary()?.formal_uncertainty)
    }

    /// Parameter covariance rescaled by `chi² / (N − K)`, or `None` for
    /// exactly-determined systems.
    pub fn normalized_covariance(&self) -> FitResult<Option<&Array2<f64>>> {
        Ok(self.summary()?.normalized_covariance.as_ref())
    }

    /// Uncertainties from the normalized covariance diagonal, or `None`
    /// for exactly-determined systems.
    pub fn normalized_uncertainties(&self) -> FitResult<Option<&Array1<f64>>> {
        Ok(self.summary()?.normalized_uncertainty.as_ref())
    }

    /// Parameter correlation matrix, K×K with unit diagonal.
    pub fn correlation_matrix(&self) -> FitResult<&Array2<f64>> {
        Ok(&self.summary()?.correlation)
    }

    /// Model predictions `Cᵀ·â` at the observation points, length N.
    pub fn fitted_values(&self) -> FitResult<&Array1<f64>> {
        Ok(&self.summary()?.fitted_values)
    }

    /// Residuals `M − Cᵀ·â`, length N.
    pub fn residuals(&self) -> FitResult<&Array1<f64>> {
        Ok(&self.summary()?.residuals)
    }

    /// Weighted sum of squared residuals `rᵀ·S⁻¹·r`.
    pub fn chi_square(&self) -> FitResult<f64> {
        Ok(self.summary()?.chi_square)
    }

    /// Reduced chi-square `chi² / (N − K)`, or `None` for
    /// exactly-determined systems.
    pub fn reduced_chi_square(&self) -> FitResult<Option<f64>> {
        Ok(self.summary()?.reduced_chi_square())
    }

    /// Degrees of freedom N − K.
    pub fn degrees_of_freedom(&self) -> usize {
        self.data.n_freedom()
    }
}

/// Correlation matrix from a covariance matrix and its diagonal square
/// roots. The diagonal is pinned to exactly 1.
fn correlation_from_covariance(
    covariance: &Array2<f64>,
    uncertainty: &Array1<f64>,
) -> Array2<f64> {
    let k = covariance.nrows();
    let mut correlation = Array2::<f64>::zeros((k, k));
    for i in 0..k {
        for j in 0..k {
            if i == j {
                correlation[[i, j]] = 1.0;
            } else {
                correlation[[i, j]] = covariance[[i, j]] / (uncertainty[i] * uncertainty[j]);
            }
        }
    }
    correlation
}

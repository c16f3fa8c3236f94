//! Fit results container — parameters, covariances, residuals, and
//! goodness-of-fit statistics produced by a completed least-squares solve.
//!
//! Purpose
//! -------
//! Provide `FitSummary`, the immutable record of everything a generalized
//! linear least-squares solve produces: the parameter estimates, their
//! formal and chi-square-normalized covariances and uncertainties, the
//! parameter correlation matrix, fitted values, residuals, and the
//! chi-square statistics.
//!
//! Key behaviors
//! -------------
//! - Expose the formal (covariance-propagated) parameter uncertainties and
//!   the normalized variants rescaled so the reduced chi-square equals one.
//! - Report the reduced chi-square as `Option<f64>`: `None` for
//!   exactly-determined systems, where dividing by zero degrees of freedom
//!   is undefined.
//! - Derive the residual RMS on demand for observed-minus-computed
//!   reporting.
//!
//! Invariants & assumptions
//! ------------------------
//! - All stored arrays are finite; the solver rejects non-finite solutions
//!   before constructing a summary.
//! - `normalized_covariance` and `normalized_uncertainty` are `Some` if and
//!   only if `n_freedom > 0`.
//! - The correlation matrix has unit diagonal and entries in [−1, 1] up to
//!   rounding.
//!
//! Downstream usage
//! ----------------
//! - [`LinearFit`](crate::linear::models::gls::LinearFit) stores a summary
//!   after a successful fit and serves accessor calls from it.
//! - The [`report`](crate::linear::report) module formats summaries for
//!   human consumption.
use ndarray::{Array1, Array2};
use statrs::statistics::Statistics;

/// Results of a completed generalized linear least-squares fit.
///
/// Produced by [`LinearFit::fit`](crate::linear::models::gls::LinearFit::fit);
/// all fields describe the state of the solve at completion and are never
/// mutated afterwards.
#[derive(Debug, Clone)]
pub struct FitSummary {
    /// Estimated parameter vector `a`, length K.
    pub params: Array1<f64>,
    /// Formal parameter covariance `(C·S⁻¹·Cᵀ)⁻¹`, K×K.
    pub formal_covariance: Array2<f64>,
    /// Formal 1-sigma uncertainties, the square roots of the covariance
    /// diagonal.
    pub formal_uncertainty: Array1<f64>,
    /// Formal covariance rescaled by `chi² / (N − K)`. `None` when the
    /// system is exactly determined.
    pub normalized_covariance: Option<Array2<f64>>,
    /// Uncertainties from the normalized covariance diagonal. `None` when
    /// the system is exactly determined.
    pub normalized_uncertainty: Option<Array1<f64>>,
    /// Parameter correlation matrix, K×K with unit diagonal.
    pub correlation: Array2<f64>,
    /// Model predictions `Cᵀ·a` at the observation points, length N.
    pub fitted_values: Array1<f64>,
    /// Residuals `M − Cᵀ·a`, length N.
    pub residuals: Array1<f64>,
    /// Weighted sum of squared residuals `rᵀ·S⁻¹·r`.
    pub chi_square: f64,
    /// Degrees of freedom N − K.
    pub n_freedom: usize,
}

impl FitSummary {
    /// Reduced chi-square `chi² / (N − K)`, or `None` for
    /// exactly-determined systems.
    pub fn reduced_chi_square(&self) -> Option<f64> {
        if self.n_freedom == 0 {
            None
        } else {
            Some(self.chi_square / self.n_freedom as f64)
        }
    }

    /// Root-mean-square scatter of the residuals about their mean, the
    /// observed-minus-computed dispersion quoted in fit reports.
    pub fn residual_rms(&self) -> f64 {
        self.residuals.iter().copied().population_std_dev()
    }
}

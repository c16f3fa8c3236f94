//! rust_linearfit — generalized linear least-squares fitting with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that exposes
//! the weighted linear least-squares engine to Python via the `_rust_linearfit`
//! extension module. When the `python-bindings` feature is enabled, this module
//! defines the Python-facing `LinearFit` class used by the `rust_linearfit`
//! package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`linear` and `algebra`) as the public
//!   crate surface.
//! - Define the `#[pyclass]` wrapper and the `#[pymodule]` initializer for the
//!   `_rust_linearfit` Python extension.
//! - Convert Python arrays, Series, and DataFrames into `ndarray` containers
//!   at the boundary and map Rust error types into Python exceptions.
//!
//! Invariants & assumptions
//! ------------------------
//! - All heavy numerical work is implemented in the inner Rust modules; this
//!   file performs only FFI glue, input conversion, and error mapping.
//! - When `python-bindings` is enabled, the Python-visible class mirrors the
//!   invariants and signatures of its Rust counterpart
//!   ([`linear::LinearFit`]).
//!
//! Conventions
//! -----------
//! - The Python-exposed class lives under `_rust_linearfit` and is typically
//!   wrapped by a thin pure-Python facade in the top-level `rust_linearfit`
//!   package.
//! - Indexing and matrix conventions follow the documentation of the
//!   underlying Rust modules: the design matrix is K×N with basis functions
//!   in rows, so the model reads `y = Cᵀ·a`.
//! - Errors from core Rust code are propagated as rich error types internally
//!   and converted to `PyErr` values at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should usually depend directly on the inner modules and
//!   can ignore the PyO3 items guarded by the `python-bindings` feature.
//! - The Python packaging layer imports the `_rust_linearfit` module defined
//!   here and wraps its class in a user-facing Python API.
//!
//! Testing notes
//! -------------
//! - Core numerical behavior is covered by unit tests in the inner modules and
//!   by integration tests that exercise the public `linear` API.
//! - Smoke tests for the PyO3 bindings verify that the class can be
//!   constructed, fitted, and queried from Python.

pub mod algebra;
pub mod linear;
pub mod utils;

#[cfg(feature = "python-bindings")]
use ndarray::Array2;

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    linear::{
        models::gls::LinearFit as LinearFitModel,
        report::{self, NumberFormat, ReportOptions, TableFormat},
    },
    utils::{extract_f64_array, extract_f64_matrix},
};

/// LinearFit — Python-facing wrapper for the generalized linear
/// least-squares model.
///
/// Purpose
/// -------
/// Expose the [`linear::LinearFit`] API to Python callers while preserving
/// the core Rust invariants and error handling.
///
/// Key behaviors
/// -------------
/// - Validate and convert Python arrays into `ndarray` containers at
///   construction time.
/// - Provide a `fit` method and result getters that delegate to the core
///   implementation, returning plain Python lists.
/// - Provide `display_results` / `display_correlations` methods that print
///   formatted reports to stdout.
///
/// Parameters
/// ----------
/// Constructed from Python via
/// `LinearFit(dependent_variable, independent_variable, covariance_matrix=None)`:
/// - `dependent_variable`: `&PyAny`
///   One-dimensional array-like of `f64` observations, length N ≥ 1.
/// - `independent_variable`: `&PyAny`
///   Two-dimensional K×N array-like holding one basis function per row.
/// - `covariance_matrix`: `Option<&PyAny>`
///   Optional N×N data covariance; omitting it selects an ordinary
///   (unweighted) least-squares fit.
///
/// Fields
/// ------
/// - `inner`: [`linear::LinearFit`]
///   Fully validated model that owns the inputs and cached results.
///
/// Invariants
/// ----------
/// - `inner` always holds inputs that passed the construction-time contract:
///   finite values, consistent shapes, symmetric covariance, and `K ≤ N`.
///
/// Performance
/// -----------
/// - One copy is performed per input array at construction; getters copy
///   results into Python-owned containers.
///
/// Notes
/// -----
/// - Native Rust callers should prefer [`linear::LinearFit`] directly; this
///   type exists solely for the PyO3 binding surface.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_linearfit")]
pub struct LinearFit {
    /// Underlying Rust model.
    pub inner: LinearFitModel,
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl LinearFit {
    #[new]
    #[pyo3(
        signature = (dependent_variable, independent_variable, covariance_matrix = None),
        text_signature = "(dependent_variable, independent_variable, /, covariance_matrix=None)"
    )]
    pub fn new<'py>(
        py: Python<'py>, dependent_variable: &Bound<'py, PyAny>,
        independent_variable: &Bound<'py, PyAny>, covariance_matrix: Option<&Bound<'py, PyAny>>,
    ) -> PyResult<LinearFit> {
        let observations_ro = extract_f64_array(py, dependent_variable)?;
        let observations = observations_ro.as_array().to_owned();
        let design_ro = extract_f64_matrix(py, independent_variable)?;
        let design = design_ro.as_array().to_owned();
        let covariance: Option<Array2<f64>> = match covariance_matrix {
            Some(raw) => Some(extract_f64_matrix(py, raw)?.as_array().to_owned()),
            None => None,
        };
        let inner = LinearFitModel::new(observations, covariance, design)?;
        Ok(LinearFit { inner })
    }

    /// Solve the least-squares problem and cache all fit products.
    pub fn fit(&mut self) -> PyResult<()> {
        self.inner.fit()?;
        Ok(())
    }

    /// Estimated parameter vector, length K.
    #[getter]
    pub fn params(&self) -> PyResult<Vec<f64>> {
        Ok(self.inner.params()?.to_vec())
    }

    /// Formal 1-sigma parameter uncertainties, length K.
    #[getter]
    pub fn formal_uncertainty(&self) -> PyResult<Vec<f64>> {
        Ok(self.inner.parameter_uncertainties()?.to_vec())
    }

    /// Chi-square-normalized parameter uncertainties, or `None` for
    /// exactly-determined systems.
    #[getter]
    pub fn normalized_uncertainty(&self) -> PyResult<Option<Vec<f64>>> {
        Ok(self.inner.normalized_uncertainties()?.map(|u| u.to_vec()))
    }

    /// Formal parameter covariance matrix as nested lists, K×K.
    #[getter]
    pub fn formal_covariance(&self) -> PyResult<Vec<Vec<f64>>> {
        Ok(matrix_to_rows(self.inner.parameter_covariance()?))
    }

    /// Chi-square-normalized parameter covariance matrix, or `None` for
    /// exactly-determined systems.
    #[getter]
    pub fn normalized_covariance(&self) -> PyResult<Option<Vec<Vec<f64>>>> {
        Ok(self.inner.normalized_covariance()?.map(matrix_to_rows))
    }

    /// Parameter correlation matrix as nested lists, K×K.
    #[getter]
    pub fn correlation_matrix(&self) -> PyResult<Vec<Vec<f64>>> {
        Ok(matrix_to_rows(self.inner.correlation_matrix()?))
    }

    /// Model predictions at the observation points, length N.
    #[getter]
    pub fn fitted_values(&self) -> PyResult<Vec<f64>> {
        Ok(self.inner.fitted_values()?.to_vec())
    }

    /// Residuals (observed minus computed), length N.
    #[getter]
    pub fn residuals(&self) -> PyResult<Vec<f64>> {
        Ok(self.inner.residuals()?.to_vec())
    }

    /// Weighted sum of squared residuals.
    #[getter]
    pub fn chi_square(&self) -> PyResult<f64> {
        Ok(self.inner.chi_square()?)
    }

    /// Reduced chi-square, or `None` for exactly-determined systems.
    #[getter]
    pub fn reduced_chi_square(&self) -> PyResult<Option<f64>> {
        Ok(self.inner.reduced_chi_square()?)
    }

    /// Degrees of freedom N − K.
    #[getter]
    pub fn degrees_of_freedom(&self) -> usize {
        self.inner.degrees_of_freedom()
    }

    /// Print the per-parameter result table to stdout.
    #[pyo3(
        signature = (par_names = None, format = None, precision = 3, scale_factor = 1.0, nformat = "f"),
        text_signature = "(par_names=None, format=None, precision=3, scale_factor=1.0, nformat='f')"
    )]
    pub fn display_results(
        &self, par_names: Option<Vec<String>>, format: Option<&str>, precision: usize,
        scale_factor: f64, nformat: &str,
    ) -> PyResult<()> {
        let options = build_report_options(par_names, format, precision, scale_factor, nformat)?;
        let summary = self.inner.summary()?;
        report::display_results(summary, &options);
        Ok(())
    }

    /// Print the parameter correlation matrix to stdout.
    #[pyo3(
        signature = (par_names = None, format = None),
        text_signature = "(par_names=None, format=None)"
    )]
    pub fn display_correlations(
        &self, par_names: Option<Vec<String>>, format: Option<&str>,
    ) -> PyResult<()> {
        let options = build_report_options(par_names, format, 3, 1.0, "f")?;
        let summary = self.inner.summary()?;
        report::display_correlations(summary, &options);
        Ok(())
    }
}

#[cfg(feature = "python-bindings")]
fn matrix_to_rows(matrix: &Array2<f64>) -> Vec<Vec<f64>> {
    matrix.outer_iter().map(|row| row.to_vec()).collect()
}

#[cfg(feature = "python-bindings")]
fn build_report_options(
    par_names: Option<Vec<String>>, format: Option<&str>, precision: usize, scale_factor: f64,
    nformat: &str,
) -> PyResult<ReportOptions> {
    let table_format = match format {
        None => TableFormat::Plain,
        Some("latex") => TableFormat::Latex,
        Some(other) => {
            return Err(PyValueError::new_err(format!(
                "invalid format {:?} (expected None or 'latex')",
                other
            )));
        }
    };
    let number_format = match nformat {
        "f" => NumberFormat::Fixed,
        "e" => NumberFormat::Exponential,
        other => {
            return Err(PyValueError::new_err(format!(
                "invalid nformat {:?} (expected 'f' or 'e')",
                other
            )));
        }
    };
    Ok(ReportOptions { par_names, precision, scale_factor, number_format, table_format })
}

/// Initialize the `_rust_linearfit` Python extension module.
///
/// Purpose
/// -------
/// Register the Python-facing `LinearFit` class on the extension module when
/// it is imported from Python.
///
/// Parameters
/// ----------
/// - `_py`: [`Python`]
///   GIL token provided by PyO3 during module initialization.
/// - `m`: `&Bound<PyModule>`
///   Module object representing `_rust_linearfit`.
///
/// Returns
/// -------
/// `PyResult<()>`
///   `Ok(())` on success, or a Python exception if registration fails.
///
/// Notes
/// -----
/// - This function is invoked automatically by Python when importing the
///   compiled extension; it is not called directly by user code.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_linearfit<'py>(_py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    m.add_class::<LinearFit>()?;
    Ok(())
}

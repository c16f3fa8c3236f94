//! linear — generalized linear least-squares stack: core data, the fitting
//! model, reporting, and errors.
//!
//! Purpose
//! -------
//! Provide a cohesive weighted linear least-squares layer that bundles
//! validated input containers, the closed-form normal-equations solver,
//! result summaries, human-readable reporting, and shared error types under
//! a single namespace. This is the main entry point for fitting models of
//! the form `y = Cᵀ·a` in the crate, and is the surface most consumers
//! (including Python bindings) should depend on.
//!
//! Key behaviors
//! -------------
//! - Collect the structural building blocks in [`core`]: the validated
//!   [`FitData`] input bundle, the [`FitSummary`] result record, and the
//!   validation helpers behind them.
//! - Expose the user-facing model API in [`models`] via [`LinearFit`]:
//!   construction from raw arrays, the closed-form `fit`, and
//!   `NotFitted`-guarded accessors for every fit product.
//! - Format results for human consumption in [`report`]: per-parameter
//!   tables with formal and chi-square-normalized uncertainties, and
//!   plain or LaTeX correlation-matrix tables.
//! - Centralize fit-specific error types in [`errors`] ([`FitError`] and
//!   the [`FitResult`] alias) so callers see a uniform error surface.
//!
//! Invariants & assumptions
//! ------------------------
//! - Inputs are carried in validated [`FitData`] instances: finite
//!   observations of length N, a finite symmetric N×N covariance (identity
//!   when none is supplied), and a finite K×N design with `1 ≤ K ≤ N`.
//! - The data covariance and the normal matrix are inverted by Cholesky
//!   factorization; loss of positive-definiteness is a hard error, never a
//!   silent fallback to a pseudo-inverse.
//! - `N == K` (zero degrees of freedom) is admissible: the parameters are
//!   still identified while the reduced chi-square and the normalized
//!   covariance are reported as `None`.
//! - Fitting never mutates the inputs, so repeated `fit` calls on the same
//!   model reproduce identical results.
//!
//! Conventions
//! -----------
//! - The design matrix stores basis functions in rows (K×N): row k holds
//!   the k-th basis function evaluated at every observation, so the model
//!   reads `y = Cᵀ·a`.
//! - Indexing is 0-based throughout; error variants carry the offending
//!   positions and values.
//! - The fitting stack itself performs no I/O; the [`report`] module is the
//!   only place that writes to stdout, and only through explicit
//!   `display_*` calls.
//!
//! Downstream usage
//! ----------------
//! - Typical end-to-end flow:
//!   1. Assemble the observation vector `M`, optional covariance `S`, and
//!      design matrix `C`.
//!   2. Construct a model via `LinearFit::new(M, Some(S), C)` (pass `None`
//!      for an ordinary least-squares fit).
//!   3. Call `fit()`, then read estimates and diagnostics through the
//!      accessors or the full [`FitSummary`].
//!   4. Optionally print a report via [`report::display_results`] and
//!      [`report::display_correlations`].
//! - Python bindings are expected to import from this module (or its
//!   [`prelude`]) and rely on the `FitError` conversion into `PyErr`
//!   defined in [`errors`].
//!
//! Testing notes
//! -------------
//! - Unit tests in [`core`] cover validation of each input contract clause
//!   and the construction defaults.
//! - Unit tests in [`models`] cover the closed-form solve against pinned
//!   reference values, the failure modes of both Cholesky inversions, the
//!   `NotFitted` error paths, and the exactly-determined boundary.
//! - Unit tests in [`report`] cover line shapes, name/scale/precision
//!   options, and the `undefined` rendering for zero degrees of freedom.
//! - Integration tests exercise full pipelines through the public
//!   [`linear`](self) API, including weight-scaling semantics.

pub mod core;
pub mod errors;
pub mod models;
pub mod report;

// ---- Re-exports (primary public surface) ----------------------------------
//
// These are the “everyday” types most users need. Lower-level items
// (validation helpers, raw formatting functions) remain under their
// respective submodules.

pub use self::core::{FitData, FitSummary};

pub use self::errors::{FitError, FitResult};

pub use self::models::LinearFit;

pub use self::report::{NumberFormat, ReportOptions, TableFormat};

// ---- Optional convenience prelude for downstream crates -------------------
//
// Downstream crates can write
//
//     use rust_linearfit::linear::prelude::*;
//
// to import the main fitting surface in a single line, without pulling in
// lower-level internals.

pub mod prelude {
    pub use super::{
        FitData, FitError, FitResult, FitSummary, LinearFit, NumberFormat, ReportOptions,
        TableFormat,
    };
}

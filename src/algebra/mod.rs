//! algebra — dense symmetric linear algebra for the fitting stack.
//!
//! Purpose
//! -------
//! Provide the small amount of factorization-based linear algebra the
//! least-squares engine needs: an explicit bridge from `ndarray` matrices
//! into `nalgebra`, and symmetric positive-definite inversion with
//! structured error reporting.
//!
//! Key behaviors
//! -------------
//! - Define a unified error and result type, [`AlgebraError`] and
//!   [`AlgebraResult`], for structural and numerical failures.
//! - Invert SPD matrices via Cholesky factorization with
//!   [`invert_spd`]; a failed factorization is surfaced as
//!   [`AlgebraError::NotPositiveDefinite`] rather than silently degrading
//!   to a pseudo-inverse.
//!
//! Conventions
//! -----------
//! - Public surfaces exchange `ndarray` types; `nalgebra` is an internal
//!   implementation detail of the factorizations.
//! - All functions are pure with respect to I/O: no logging, no global
//!   state, and no `unsafe` code paths. Failures are reported via
//!   [`AlgebraResult`] only.
//!
//! Downstream usage
//! ----------------
//! - The generalized least-squares engine in [`crate::linear`] uses
//!   [`invert_spd`] for both the data-covariance inversion (precision
//!   matrix) and the normal-equations inversion (parameter covariance),
//!   mapping failures onto fit-stage-specific error variants.

pub mod errors;
pub mod solve;

// ---- Re-exports (primary surface) -----------------------------------------

pub use self::errors::{AlgebraError, AlgebraResult};
pub use self::solve::invert_spd;

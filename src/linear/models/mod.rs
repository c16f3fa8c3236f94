//! Fitting models. Currently the single generalized linear least-squares
//! model; the module level leaves room for constrained or robust variants.
pub mod gls;

pub use gls::LinearFit;

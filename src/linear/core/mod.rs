//! Core data structures for linear least-squares fitting: validated input
//! bundles, result summaries, and the validation helpers behind them.
pub mod data;
pub mod summary;
pub mod validation;

pub use data::FitData;
pub use summary::FitSummary;

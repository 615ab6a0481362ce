//! crimescope-classifiers: risk prediction for regional crime statistics.
//!
//! This crate provides the full pipeline behind the crimescope CLI: a CSV
//! spreadsheet loader, per-category label derivation and train/test
//! splitting, leakage-free feature standardization, an independently
//! trained binary classifier per crime category, and the session object
//! that ties them together and produces predictions for the latest data
//! row plus an aggregate risk-by-region summary.
//!
//! The design favors small, testable modules; the only non-deterministic
//! input (the train/test shuffle) is driven by a fixed seed so repeated
//! runs over the same spreadsheet are reproducible.
pub mod categories;
pub mod config;
pub mod data_handling;
pub mod error;
pub mod io;
pub mod models;
pub mod preprocessing;
pub mod report;
pub mod session;
pub mod summary;

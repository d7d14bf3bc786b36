//! # Engine Module
//!
//! This module turns a parsed [`Structure`](crate::core::models::structure::Structure)
//! into residue points and pairwise maps.
//!
//! ## Architecture
//!
//! - **Center Estimation** ([`center`]) - Element masses, center policies and the per-residue estimator
//! - **Pairwise Maps** ([`matrix`]) - Symmetric distance matrices and thresholded contact matrices
//! - **Configuration** ([`config`]) - Run parameters and their builder
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//! - **Error Handling** ([`error`]) - Engine-specific error types
//!
//! Every computation here is a pure function of its inputs. With the
//! `parallel` feature enabled, per-residue and per-row work is spread over the
//! rayon thread pool; results are identical either way.

pub mod center;
pub mod config;
pub mod error;
pub mod matrix;
pub mod progress;
pub(crate) mod tasks;

//! # Core Module
//!
//! This module provides the stateless building blocks of BioContact: the data
//! models for atoms, residues and structures, the geometric primitives used by
//! the map builder, and the structural file reader.
//!
//! ## Architecture
//!
//! - **Structure Representation** ([`models`]) - Atom records, residue groups and residue points
//! - **File I/O** ([`io`]) - Reading PDB files into a [`models::structure::Structure`]
//! - **Geometry** ([`utils`]) - Distances and (weighted) centroids
//!
//! Nothing in this module keeps state between calls; the [`crate::engine`]
//! layer composes these pieces into the residue center estimator and the
//! pairwise map builder.

pub mod io;
pub mod models;
pub mod utils;

//! # Core Models Module
//!
//! This module contains the data structures used to represent a protein
//! structure and the per-residue values derived from it.
//!
//! ## Key Components
//!
//! - [`atom`] - Immutable atom records with coordinates and element symbols
//! - [`structure`] - Atoms grouped by residue number in first-encounter order
//! - [`builder`] - Incremental construction of a [`structure::Structure`]
//! - [`residue`] - Representative residue points and the ordered point table
//!
//! ## Usage
//!
//! ```
//! use biocontact::core::models::{atom::AtomRecord, builder::StructureBuilder};
//! use nalgebra::Point3;
//!
//! let mut builder = StructureBuilder::new();
//! builder.add_atom(AtomRecord::new("N", "N", 1, Point3::new(0.0, 0.0, 0.0)), "GLY");
//! builder.add_atom(AtomRecord::new("CA", "C", 1, Point3::new(1.5, 0.0, 0.0)), "GLY");
//! let structure = builder.build();
//!
//! assert_eq!(structure.len(), 1);
//! assert_eq!(structure.atom_count(), 2);
//! ```

pub mod atom;
pub mod builder;
pub mod residue;
pub mod structure;

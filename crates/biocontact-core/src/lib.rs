//! # BioContact Core Library
//!
//! Estimates one representative point per residue of a protein structure and
//! builds the residue-by-residue distance map and binary contact map from
//! those points.
//!
//! ## Architectural Philosophy
//!
//! The library is split into three layers, each depending only on the ones
//! below it.
//!
//! - **[`core`]: The Foundation.** Stateless data models (`AtomRecord`,
//!   `Structure`, `ResiduePointTable`), geometric primitives and the PDB reader.
//!
//! - **[`engine`]: The Numeric Kernel.** The residue center estimator with its
//!   center policies, the pairwise `DistanceMatrix` and `ContactMatrix`, plus
//!   run configuration and progress reporting. It has no file I/O and no
//!   rendering.
//!
//! - **[`workflows`]: The Public API.** Runs a complete computation, from a
//!   parsed structure to both maps, in a single call.
//!
//! ## Example
//!
//! ```
//! use biocontact::core::io::pdb::PdbFile;
//! use biocontact::core::io::traits::StructureFile;
//! use biocontact::engine::config::ContactMapConfigBuilder;
//! use biocontact::engine::progress::ProgressReporter;
//! use biocontact::workflows::contact_map;
//!
//! let pdb = "\
//! ATOM      1  N   GLY A   1       0.000   0.000   0.000  1.00  0.00           N
//! ATOM      2  N   GLY A   2       3.000   4.000   0.000  1.00  0.00           N
//! ";
//! let (structure, _) = PdbFile::read_from_str(pdb).unwrap();
//! let config = ContactMapConfigBuilder::new().threshold(5.0).build().unwrap();
//!
//! let result = contact_map::run(&structure, &config, &ProgressReporter::new()).unwrap();
//! assert_eq!(result.distances.distance_between(1, 2), Some(5.0));
//! assert_eq!(result.contacts.in_contact(1, 2), Some(true));
//! ```

pub mod core;
pub mod engine;
pub mod workflows;

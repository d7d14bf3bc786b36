//! Provides input functionality for structural file formats.
//!
//! The reader groups `ATOM` records by residue number and hands back a
//! [`Structure`](crate::core::models::structure::Structure); everything
//! downstream works on that in-memory table and never touches files.

pub mod pdb;
pub mod traits;

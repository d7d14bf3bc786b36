//! # Workflows Module
//!
//! High-level entry points that run a complete computation from a parsed
//! structure to its final artifacts.
//!
//! - **Contact Map Workflow** ([`contact_map`]) - Residue centers, the distance
//!   map and the thresholded contact map in one call.

pub mod contact_map;

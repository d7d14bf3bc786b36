//! Computational units of a contact-map run.
//!
//! Each task performs one step over in-memory data and reports its progress;
//! the [`crate::workflows`] layer strings them together.

pub mod centers;
pub mod distance_map;

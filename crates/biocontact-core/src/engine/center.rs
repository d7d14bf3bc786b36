use crate::core::models::atom::AtomRecord;
use crate::core::utils::geometry;
use nalgebra::Point3;
use phf::{Map, phf_map};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Atomic masses of the elements found in amino acids, in daltons.
pub static ATOMIC_MASSES: Map<&'static str, f64> = phf_map! {
    "C" => 12.011,
    "O" => 15.999,
    "S" => 32.065,
    "H" => 1.008,
    "N" => 14.007,
};

// N, CA, C and O lead every residue in PDB atom order.
const BACKBONE_ATOM_COUNT: usize = 4;
const MIN_ATOMS_WITH_SIDECHAIN: usize = BACKBONE_ATOM_COUNT + 1;

pub fn atomic_mass(element: &str) -> Option<f64> {
    ATOMIC_MASSES.get(element).copied()
}

/// Selects how a residue's atoms are reduced to one representative point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CenterPolicy {
    /// Mass-weighted centroid of the side chain (atoms after the first four).
    /// Residues with fewer than five atoms use their first atom instead.
    #[default]
    MassWeighted,
    /// Unweighted mean of every atom position; element identity is ignored.
    UnweightedMean,
}

#[derive(Debug, Error)]
#[error("Invalid center policy '{0}'. Expected 'mass-weighted' or 'unweighted-mean'.")]
pub struct ParseCenterPolicyError(pub String);

impl FromStr for CenterPolicy {
    type Err = ParseCenterPolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "mass-weighted" => Ok(CenterPolicy::MassWeighted),
            "unweighted-mean" | "mean" => Ok(CenterPolicy::UnweightedMean),
            _ => Err(ParseCenterPolicyError(s.to_string())),
        }
    }
}

impl fmt::Display for CenterPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CenterPolicy::MassWeighted => "mass-weighted",
            CenterPolicy::UnweightedMean => "unweighted-mean",
        })
    }
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum CenterError {
    #[error("Residue has no atoms")]
    EmptyResidue,
    #[error("Unsupported element '{element}' on atom {serial} ('{atom_name}')")]
    UnsupportedElement {
        element: String,
        serial: usize,
        atom_name: String,
    },
}

/// Reduces the atoms of one residue to a single representative point.
#[derive(Debug, Clone, Copy, Default)]
pub struct CenterEstimator {
    policy: CenterPolicy,
}

impl CenterEstimator {
    pub fn new(policy: CenterPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> CenterPolicy {
        self.policy
    }

    /// Estimates the representative point of one residue.
    ///
    /// # Arguments
    ///
    /// * `atoms` - The residue's atoms in input order.
    ///
    /// # Errors
    ///
    /// Returns [`CenterError::EmptyResidue`] for an empty slice, and under
    /// [`CenterPolicy::MassWeighted`] returns
    /// [`CenterError::UnsupportedElement`] if any atom's element has no known
    /// mass, even when that atom would not take part in the centroid.
    pub fn estimate(&self, atoms: &[AtomRecord]) -> Result<Point3<f64>, CenterError> {
        match self.policy {
            CenterPolicy::MassWeighted => mass_weighted_center(atoms),
            CenterPolicy::UnweightedMean => {
                geometry::centroid(atoms.iter().map(|a| &a.position))
                    .ok_or(CenterError::EmptyResidue)
            }
        }
    }
}

fn mass_weighted_center(atoms: &[AtomRecord]) -> Result<Point3<f64>, CenterError> {
    let first = atoms.first().ok_or(CenterError::EmptyResidue)?;

    let masses = atoms
        .iter()
        .map(|atom| {
            atomic_mass(&atom.element).ok_or_else(|| CenterError::UnsupportedElement {
                element: atom.element.clone(),
                serial: atom.serial,
                atom_name: atom.name.clone(),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    if atoms.len() < MIN_ATOMS_WITH_SIDECHAIN {
        // Glycine: the side chain is a lone hydrogen, the backbone N stands in.
        return Ok(first.position);
    }

    let sidechain = atoms[BACKBONE_ATOM_COUNT..]
        .iter()
        .zip(&masses[BACKBONE_ATOM_COUNT..])
        .map(|(atom, &mass)| (&atom.position, mass));

    // Every supported element has a positive mass, so the total is never zero.
    Ok(geometry::weighted_centroid(sidechain).unwrap_or(first.position))
}

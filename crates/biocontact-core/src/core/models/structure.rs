use super::atom::AtomRecord;
use std::collections::HashMap;

/// The atoms belonging to one residue, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct ResidueAtoms {
    /// Residue sequence number from the source file.
    pub number: isize,
    /// Name of the residue as first seen (e.g., "ALA", "GLY").
    pub name: String,
    pub(crate) atoms: Vec<AtomRecord>,
}

impl ResidueAtoms {
    pub(crate) fn new(number: isize, name: &str) -> Self {
        Self {
            number,
            name: name.to_string(),
            atoms: Vec::new(),
        }
    }

    pub fn atoms(&self) -> &[AtomRecord] {
        &self.atoms
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }
}

/// Represents a protein structure as residue groups of atom records.
///
/// Residues are keyed by residue number alone and kept in the order their
/// numbers are first encountered in the atom stream. A structure is assembled
/// through [`StructureBuilder`](super::builder::StructureBuilder) and is
/// read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Structure {
    /// Residue groups in first-encounter order.
    pub(crate) residues: Vec<ResidueAtoms>,
    /// Lookup map from residue number to position in `residues`.
    pub(crate) residue_index: HashMap<isize, usize>,
}

impl Structure {
    /// Creates a new, empty structure.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the residue groups in first-encounter order.
    pub fn residues(&self) -> &[ResidueAtoms] {
        &self.residues
    }

    /// Retrieves a residue group by its residue number.
    ///
    /// # Arguments
    ///
    /// * `number` - The residue sequence number to look up.
    ///
    /// # Return
    ///
    /// Returns `Some(&ResidueAtoms)` if the residue exists, otherwise `None`.
    pub fn residue(&self, number: isize) -> Option<&ResidueAtoms> {
        self.residue_index
            .get(&number)
            .map(|&index| &self.residues[index])
    }

    /// Returns an iterator over every atom, residue by residue.
    pub fn atoms(&self) -> impl Iterator<Item = &AtomRecord> {
        self.residues.iter().flat_map(|residue| residue.atoms.iter())
    }

    pub fn atom_count(&self) -> usize {
        self.residues.iter().map(ResidueAtoms::len).sum()
    }

    /// Returns the number of distinct residues.
    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::builder::StructureBuilder;
    use nalgebra::Point3;

    fn atom(name: &str, residue_number: isize) -> AtomRecord {
        AtomRecord::new(name, &name[..1], residue_number, Point3::origin())
    }

    #[test]
    fn new_structure_is_empty() {
        let structure = Structure::new();
        assert!(structure.is_empty());
        assert_eq!(structure.len(), 0);
        assert_eq!(structure.atom_count(), 0);
        assert!(structure.residue(1).is_none());
    }

    #[test]
    fn residue_lookup_by_number_returns_matching_group() {
        let mut builder = StructureBuilder::new();
        builder.add_atom(atom("N", 10), "GLY");
        builder.add_atom(atom("CA", 10), "GLY");
        builder.add_atom(atom("N", 11), "ALA");
        let structure = builder.build();

        let residue = structure.residue(11).unwrap();
        assert_eq!(residue.number, 11);
        assert_eq!(residue.name, "ALA");
        assert_eq!(residue.len(), 1);
        assert!(structure.residue(12).is_none());
    }

    #[test]
    fn atoms_iterates_residue_by_residue() {
        let mut builder = StructureBuilder::new();
        builder.add_atom(atom("N", 1), "GLY");
        builder.add_atom(atom("N", 2), "GLY");
        builder.add_atom(atom("CA", 1), "GLY");
        let structure = builder.build();

        let names: Vec<_> = structure
            .atoms()
            .map(|a| (a.residue_number, a.name.as_str()))
            .collect();
        assert_eq!(names, vec![(1, "N"), (1, "CA"), (2, "N")]);
        assert_eq!(structure.atom_count(), 3);
    }
}

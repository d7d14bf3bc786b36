use super::atom::AtomRecord;
use super::structure::{ResidueAtoms, Structure};

pub struct StructureBuilder {
    structure: Structure,
}

impl Default for StructureBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl StructureBuilder {
    pub fn new() -> Self {
        Self {
            structure: Structure::new(),
        }
    }

    /// Appends an atom to the group for its residue number.
    ///
    /// A new group is opened the first time a residue number is seen, so the
    /// final residue order is first-encounter order even when atoms of one
    /// residue are not contiguous in the input.
    pub fn add_atom(&mut self, atom: AtomRecord, residue_name: &str) -> &mut Self {
        let residues = &mut self.structure.residues;
        let index = *self
            .structure
            .residue_index
            .entry(atom.residue_number)
            .or_insert_with(|| {
                let index = residues.len();
                residues.push(ResidueAtoms::new(atom.residue_number, residue_name));
                index
            });
        residues[index].atoms.push(atom);
        self
    }

    pub fn build(self) -> Structure {
        self.structure
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn atom(name: &str, residue_number: isize, x: f64) -> AtomRecord {
        AtomRecord::new(name, &name[..1], residue_number, Point3::new(x, 0.0, 0.0))
    }

    #[test]
    fn groups_atoms_by_residue_number_in_first_encounter_order() {
        let mut builder = StructureBuilder::new();
        builder
            .add_atom(atom("N", 5, 0.0), "SER")
            .add_atom(atom("CA", 5, 1.0), "SER")
            .add_atom(atom("N", 3, 2.0), "GLY")
            .add_atom(atom("CA", 3, 3.0), "GLY");
        let structure = builder.build();

        let numbers: Vec<_> = structure.residues().iter().map(|r| r.number).collect();
        assert_eq!(numbers, vec![5, 3]);
        assert_eq!(structure.residues()[0].len(), 2);
        assert_eq!(structure.residues()[1].name, "GLY");
    }

    #[test]
    fn non_contiguous_atoms_join_their_existing_residue() {
        let mut builder = StructureBuilder::new();
        builder
            .add_atom(atom("N", 1, 0.0), "ALA")
            .add_atom(atom("N", 2, 1.0), "GLY")
            .add_atom(atom("CB", 1, 2.0), "ALA");
        let structure = builder.build();

        assert_eq!(structure.len(), 2);
        let first = structure.residue(1).unwrap();
        let names: Vec<_> = first.atoms().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["N", "CB"]);
    }

    #[test]
    fn residue_keeps_first_seen_name() {
        let mut builder = StructureBuilder::new();
        builder
            .add_atom(atom("N", 1, 0.0), "ALA")
            .add_atom(atom("CA", 1, 1.0), "GLY");
        let structure = builder.build();
        assert_eq!(structure.residue(1).unwrap().name, "ALA");
    }

    #[test]
    fn empty_builder_builds_empty_structure() {
        let structure = StructureBuilder::default().build();
        assert!(structure.is_empty());
    }
}

use nalgebra::Point3;

/// Represents a single atom record read from a structure file.
///
/// Atom records are immutable once read: every downstream computation works on
/// borrowed records and derives new values from them. The element symbol is
/// stored exactly as found in the source (trimmed and upper-cased), so that
/// consumers decide for themselves which elements they support.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    /// The atom serial number from the source file.
    pub serial: usize,
    /// The name of the atom (e.g., "CA", "N", "OG1").
    pub name: String,
    /// The three-letter name of the owning residue (e.g., "GLY").
    pub residue_name: String,
    /// The chain identifier, `' '` when the source leaves it blank.
    pub chain_id: char,
    /// The residue sequence number linking this atom to its residue.
    pub residue_number: isize,
    /// The element symbol (e.g., "C", "N", "SE").
    pub element: String,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
}

impl AtomRecord {
    /// Creates a new `AtomRecord` with the minimal set of fields.
    ///
    /// The serial is set to `0`, the chain to `' '` and the residue name is
    /// left empty. The element symbol is normalized to upper case.
    ///
    /// # Arguments
    ///
    /// * `name` - The atom name.
    /// * `element` - The element symbol.
    /// * `residue_number` - The residue sequence number.
    /// * `position` - The 3D coordinates of the atom.
    pub fn new(name: &str, element: &str, residue_number: isize, position: Point3<f64>) -> Self {
        Self {
            serial: 0,
            name: name.to_string(),
            residue_name: String::new(),
            chain_id: ' ',
            residue_number,
            element: element.trim().to_ascii_uppercase(),
            position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_atom_has_expected_default_fields() {
        let atom = AtomRecord::new("CA", "C", 7, Point3::new(1.0, 2.0, 3.0));

        assert_eq!(atom.serial, 0);
        assert_eq!(atom.name, "CA");
        assert_eq!(atom.residue_name, "");
        assert_eq!(atom.chain_id, ' ');
        assert_eq!(atom.residue_number, 7);
        assert_eq!(atom.element, "C");
        assert_eq!(atom.position, Point3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn new_atom_normalizes_element_symbol() {
        let atom = AtomRecord::new("SE", " se ", 1, Point3::origin());
        assert_eq!(atom.element, "SE");
    }

    #[test]
    fn atom_equality_and_clone_works() {
        let mut atom1 = AtomRecord::new("N", "N", 1, Point3::new(0.0, 0.0, 0.0));
        atom1.chain_id = 'A';
        let atom2 = atom1.clone();
        assert_eq!(atom1, atom2);
    }
}

use nalgebra::Point3;
use std::collections::HashMap;
use thiserror::Error;

/// One representative point per residue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResiduePoint {
    pub residue_number: isize, // Residue sequence number, unique within one structure
    pub center: Point3<f64>,   // Representative coordinate in Angstroms
}

impl ResiduePoint {
    pub fn new(residue_number: isize, center: Point3<f64>) -> Self {
        Self {
            residue_number,
            center,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TableError {
    #[error("Residue {0} already has a point in the table")]
    DuplicateResidue(isize),
}

/// An ordered table of residue points.
///
/// Row order is insertion order and fixes the row/column order of any matrix
/// built from the table. Rows are also reachable by residue number through an
/// index map maintained on insertion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResiduePointTable {
    points: Vec<ResiduePoint>,
    index: HashMap<isize, usize>,
}

impl ResiduePointTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            points: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Appends a point and returns its row index.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::DuplicateResidue`] if the residue number is
    /// already present; the table is left unchanged.
    pub fn push(&mut self, point: ResiduePoint) -> Result<usize, TableError> {
        if self.index.contains_key(&point.residue_number) {
            return Err(TableError::DuplicateResidue(point.residue_number));
        }
        let row = self.points.len();
        self.index.insert(point.residue_number, row);
        self.points.push(point);
        Ok(row)
    }

    pub fn points(&self) -> &[ResiduePoint] {
        &self.points
    }

    pub fn get(&self, residue_number: isize) -> Option<&ResiduePoint> {
        self.row_of(residue_number).map(|row| &self.points[row])
    }

    pub fn row_of(&self, residue_number: isize) -> Option<usize> {
        self.index.get(&residue_number).copied()
    }

    /// Residue numbers in row order.
    pub fn labels(&self) -> Vec<isize> {
        self.points.iter().map(|p| p.residue_number).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ResiduePoint> {
        self.points.iter()
    }
}

impl TryFrom<Vec<ResiduePoint>> for ResiduePointTable {
    type Error = TableError;

    fn try_from(points: Vec<ResiduePoint>) -> Result<Self, Self::Error> {
        let mut table = Self::with_capacity(points.len());
        for point in points {
            table.push(point)?;
        }
        Ok(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_rows_in_insertion_order() {
        let mut table = ResiduePointTable::new();
        assert_eq!(table.push(ResiduePoint::new(7, Point3::origin())), Ok(0));
        assert_eq!(
            table.push(ResiduePoint::new(3, Point3::new(1.0, 0.0, 0.0))),
            Ok(1)
        );

        assert_eq!(table.len(), 2);
        assert_eq!(table.labels(), vec![7, 3]);
        assert_eq!(table.row_of(3), Some(1));
        assert_eq!(table.get(3).unwrap().center, Point3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn push_rejects_duplicate_residue_number() {
        let mut table = ResiduePointTable::new();
        table.push(ResiduePoint::new(1, Point3::origin())).unwrap();

        let result = table.push(ResiduePoint::new(1, Point3::new(5.0, 5.0, 5.0)));

        assert_eq!(result, Err(TableError::DuplicateResidue(1)));
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(1).unwrap().center, Point3::origin());
    }

    #[test]
    fn lookup_of_missing_residue_returns_none() {
        let table = ResiduePointTable::new();
        assert!(table.is_empty());
        assert!(table.get(42).is_none());
        assert!(table.row_of(42).is_none());
    }

    #[test]
    fn try_from_vec_builds_table_or_fails_on_duplicates() {
        let ok = ResiduePointTable::try_from(vec![
            ResiduePoint::new(1, Point3::origin()),
            ResiduePoint::new(2, Point3::origin()),
        ])
        .unwrap();
        assert_eq!(ok.labels(), vec![1, 2]);

        let err = ResiduePointTable::try_from(vec![
            ResiduePoint::new(1, Point3::origin()),
            ResiduePoint::new(1, Point3::origin()),
        ]);
        assert_eq!(err, Err(TableError::DuplicateResidue(1)));
    }
}

use crate::core::models::residue::ResiduePointTable;
use crate::core::utils::geometry;
use crate::engine::error::EngineError;
use itertools::Itertools;
use nalgebra::DMatrix;
use std::collections::HashMap;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

fn index_labels(labels: &[isize]) -> HashMap<isize, usize> {
    labels
        .iter()
        .enumerate()
        .map(|(index, &label)| (label, index))
        .collect()
}

/// Pairwise Euclidean distances between residue points.
///
/// Rows and columns share the same residue labels, in the row order of the
/// table the matrix was built from. The matrix is symmetric and its diagonal
/// is exactly zero.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    labels: Vec<isize>,
    index: HashMap<isize, usize>,
    values: DMatrix<f64>,
}

impl DistanceMatrix {
    /// Builds the full N×N distance matrix for a point table.
    pub fn from_points(table: &ResiduePointTable) -> Self {
        Self::from_points_with(table, || {})
    }

    /// Builds the matrix, calling `on_row` once per finished row.
    ///
    /// Only the upper triangle (diagonal included) is computed; the lower
    /// triangle mirrors it. Rows are independent and each one writes its own
    /// buffer, so with the `parallel` feature they are spread over the rayon
    /// pool without any locking.
    pub(crate) fn from_points_with<F>(table: &ResiduePointTable, on_row: F) -> Self
    where
        F: Fn() + Sync,
    {
        let points = table.points();
        let n = points.len();

        let upper_row = |i: usize| -> Vec<f64> {
            let row = points[i..]
                .iter()
                .map(|other| geometry::distance(&points[i].center, &other.center))
                .collect();
            on_row();
            row
        };

        #[cfg(not(feature = "parallel"))]
        let upper: Vec<Vec<f64>> = (0..n).map(upper_row).collect();

        #[cfg(feature = "parallel")]
        let upper: Vec<Vec<f64>> = (0..n).into_par_iter().map(upper_row).collect();

        let values = DMatrix::from_fn(n, n, |i, j| {
            if i <= j {
                upper[i][j - i]
            } else {
                upper[j][i - j]
            }
        });

        let labels = table.labels();
        Self {
            index: index_labels(&labels),
            labels,
            values,
        }
    }

    pub fn labels(&self) -> &[isize] {
        &self.labels
    }

    pub fn values(&self) -> &DMatrix<f64> {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Distance at a row/column position.
    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        self.values.get((row, column)).copied()
    }

    /// Distance between two residues, looked up by residue number.
    pub fn distance_between(&self, a: isize, b: isize) -> Option<f64> {
        let row = *self.index.get(&a)?;
        let column = *self.index.get(&b)?;
        self.get(row, column)
    }
}

/// Binary contact map derived from a [`DistanceMatrix`].
///
/// A cell is `1` when the corresponding distance is at most the threshold and
/// `0` otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactMatrix {
    labels: Vec<isize>,
    index: HashMap<isize, usize>,
    values: DMatrix<u8>,
    threshold: f64,
}

impl ContactMatrix {
    /// Thresholds a distance matrix (boundary inclusive).
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidThreshold`] for a NaN or infinite
    /// threshold. Negative thresholds are accepted and produce an all-zero map.
    pub fn from_distances(distances: &DistanceMatrix, threshold: f64) -> Result<Self, EngineError> {
        if !threshold.is_finite() {
            return Err(EngineError::InvalidThreshold(threshold));
        }
        let values = distances.values.map(|d| u8::from(d <= threshold));
        Ok(Self {
            labels: distances.labels.clone(),
            index: distances.index.clone(),
            values,
            threshold,
        })
    }

    pub fn labels(&self) -> &[isize] {
        &self.labels
    }

    pub fn values(&self) -> &DMatrix<u8> {
        &self.values
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn get(&self, row: usize, column: usize) -> Option<u8> {
        self.values.get((row, column)).copied()
    }

    /// Whether two residues are in contact, looked up by residue number.
    pub fn in_contact(&self, a: isize, b: isize) -> Option<bool> {
        let row = *self.index.get(&a)?;
        let column = *self.index.get(&b)?;
        self.get(row, column).map(|v| v == 1)
    }

    /// Distinct residue pairs in contact, each listed once as `(row, column)`
    /// labels with the row before the column. Self-contacts are excluded.
    pub fn contact_pairs(&self) -> impl Iterator<Item = (isize, isize)> + '_ {
        (0..self.len())
            .tuple_combinations()
            .filter(|&(i, j)| self.values[(i, j)] == 1)
            .map(|(i, j)| (self.labels[i], self.labels[j]))
    }

    pub fn contact_count(&self) -> usize {
        self.contact_pairs().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::residue::ResiduePoint;
    use nalgebra::Point3;

    fn table(points: &[(isize, [f64; 3])]) -> ResiduePointTable {
        ResiduePointTable::try_from(
            points
                .iter()
                .map(|&(n, [x, y, z])| ResiduePoint::new(n, Point3::new(x, y, z)))
                .collect::<Vec<_>>(),
        )
        .unwrap()
    }

    fn three_residues() -> ResiduePointTable {
        table(&[
            (1, [0.0, 0.0, 0.0]),
            (2, [1.0, 0.0, 0.0]),
            (3, [0.0, 3.0, 0.0]),
        ])
    }

    #[test]
    fn distance_matrix_matches_worked_example() {
        let distances = DistanceMatrix::from_points(&three_residues());
        let sqrt10 = 10.0f64.sqrt();
        let expected = DMatrix::from_row_slice(
            3,
            3,
            &[0.0, 1.0, 3.0, 1.0, 0.0, sqrt10, 3.0, sqrt10, 0.0],
        );
        assert_eq!(distances.values(), &expected);
        assert_eq!(distances.labels(), &[1, 2, 3]);
    }

    #[test]
    fn contact_matrix_matches_worked_example() {
        let distances = DistanceMatrix::from_points(&three_residues());
        let contacts = ContactMatrix::from_distances(&distances, 2.0).unwrap();
        let expected = DMatrix::from_row_slice(3, 3, &[1u8, 1, 0, 1, 1, 0, 0, 0, 1]);
        assert_eq!(contacts.values(), &expected);
        assert_eq!(contacts.threshold(), 2.0);
        assert_eq!(contacts.labels(), distances.labels());
    }

    #[test]
    fn distance_matrix_is_square_symmetric_with_zero_diagonal() {
        let points = table(&[
            (10, [1.2, -3.4, 5.6]),
            (11, [-7.8, 9.0, 0.1]),
            (12, [2.2, 2.2, 2.2]),
            (13, [0.0, -0.5, 14.25]),
            (14, [3.3, 1.1, -6.6]),
        ]);
        let distances = DistanceMatrix::from_points(&points);
        let values = distances.values();

        assert_eq!(values.nrows(), 5);
        assert_eq!(values.ncols(), 5);
        for i in 0..5 {
            assert_eq!(values[(i, i)], 0.0);
            for j in 0..5 {
                assert_eq!(values[(i, j)], values[(j, i)]);
            }
        }
    }

    #[test]
    fn triangular_build_equals_naive_full_loop() {
        let points = table(&[
            (1, [0.123, 4.56, -7.89]),
            (2, [10.0, -2.5, 3.75]),
            (3, [-1.0, -1.0, -1.0]),
            (4, [6.02, 2.71, 3.14]),
        ]);
        let distances = DistanceMatrix::from_points(&points);
        let p = points.points();
        for i in 0..p.len() {
            for j in 0..p.len() {
                let naive = geometry::distance(&p[i].center, &p[j].center);
                assert_eq!(distances.get(i, j), Some(naive));
            }
        }
    }

    #[test]
    fn contact_cells_follow_distance_cells_inclusive() {
        let points = table(&[
            (1, [0.0, 0.0, 0.0]),
            (2, [4.0, 0.0, 0.0]),
            (3, [0.0, 5.0, 0.0]),
            (4, [9.0, 9.0, 9.0]),
        ]);
        let distances = DistanceMatrix::from_points(&points);
        let threshold = 4.0;
        let contacts = ContactMatrix::from_distances(&distances, threshold).unwrap();

        for i in 0..4 {
            for j in 0..4 {
                let d = distances.get(i, j).unwrap();
                let c = contacts.get(i, j).unwrap();
                assert!(c == 0 || c == 1);
                assert_eq!(c == 1, d <= threshold);
            }
        }
        assert_eq!(contacts.in_contact(1, 2), Some(true));
        assert_eq!(contacts.in_contact(1, 3), Some(false));
    }

    #[test]
    fn zero_threshold_gives_identity_for_distinct_points() {
        let points = table(&[
            (1, [0.0, 0.0, 0.0]),
            (2, [0.5, 0.0, 0.0]),
            (3, [0.0, 0.0, 0.25]),
        ]);
        let distances = DistanceMatrix::from_points(&points);
        let contacts = ContactMatrix::from_distances(&distances, 0.0).unwrap();
        assert_eq!(contacts.values(), &DMatrix::<u8>::identity(3, 3));
        assert_eq!(contacts.contact_count(), 0);
    }

    #[test]
    fn negative_threshold_gives_all_zero_map() {
        let distances = DistanceMatrix::from_points(&three_residues());
        let contacts = ContactMatrix::from_distances(&distances, -1.0).unwrap();
        assert!(contacts.values().iter().all(|&v| v == 0));
    }

    #[test]
    fn non_finite_threshold_is_rejected() {
        let distances = DistanceMatrix::from_points(&three_residues());
        for threshold in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                ContactMatrix::from_distances(&distances, threshold),
                Err(EngineError::InvalidThreshold(_))
            ));
        }
    }

    #[test]
    fn empty_table_gives_empty_matrices() {
        let distances = DistanceMatrix::from_points(&ResiduePointTable::new());
        let contacts = ContactMatrix::from_distances(&distances, 8.0).unwrap();

        assert!(distances.is_empty());
        assert_eq!(distances.values().shape(), (0, 0));
        assert!(contacts.is_empty());
        assert_eq!(contacts.values().shape(), (0, 0));
        assert_eq!(contacts.contact_pairs().count(), 0);
    }

    #[test]
    fn label_lookup_uses_residue_numbers_not_positions() {
        let points = table(&[(42, [0.0, 0.0, 0.0]), (7, [0.0, 0.0, 2.0])]);
        let distances = DistanceMatrix::from_points(&points);

        assert_eq!(distances.distance_between(42, 7), Some(2.0));
        assert_eq!(distances.distance_between(7, 42), Some(2.0));
        assert_eq!(distances.distance_between(42, 42), Some(0.0));
        assert_eq!(distances.distance_between(42, 1), None);
    }

    #[test]
    fn contact_pairs_lists_each_off_diagonal_contact_once() {
        let distances = DistanceMatrix::from_points(&three_residues());
        let contacts = ContactMatrix::from_distances(&distances, 3.0).unwrap();

        let pairs: Vec<_> = contacts.contact_pairs().collect();
        assert_eq!(pairs, vec![(1, 2), (1, 3)]);
        assert_eq!(contacts.contact_count(), 2);
    }

    #[test]
    fn row_callback_fires_once_per_row() {
        use std::sync::atomic::{AtomicUsize, Ordering};

        let rows = AtomicUsize::new(0);
        DistanceMatrix::from_points_with(&three_residues(), || {
            rows.fetch_add(1, Ordering::Relaxed);
        });
        assert_eq!(rows.load(Ordering::Relaxed), 3);
    }
}

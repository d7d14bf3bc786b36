use crate::error::{CliError, Result};
use biocontact::core::models::residue::ResiduePointTable;
use nalgebra::{DMatrix, Scalar};
use std::fmt::Display;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Paths of every artifact written for one structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub centers: PathBuf,
    pub distance_table: PathBuf,
    pub contact_table: PathBuf,
    pub distance_figure: PathBuf,
    pub contact_figure: PathBuf,
}

impl OutputPaths {
    pub fn new(dir: &Path, label: &str) -> Self {
        Self {
            centers: dir.join(format!("{label}_centers.csv")),
            distance_table: dir.join(format!("{label}_distance_map.csv")),
            contact_table: dir.join(format!("{label}_contact_map.csv")),
            distance_figure: dir.join(format!("{label}_distance_map.svg")),
            contact_figure: dir.join(format!("{label}_contact_map.svg")),
        }
    }
}

/// Writes one `residue,x,y,z` row per residue point.
pub fn write_centers_to(writer: impl io::Write, table: &ResiduePointTable) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["residue", "x", "y", "z"])?;
    for point in table.iter() {
        wtr.write_record([
            point.residue_number.to_string(),
            point.center.x.to_string(),
            point.center.y.to_string(),
            point.center.z.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes a labelled square matrix: a `residue,<labels…>` header, then one row
/// per residue starting with its label.
pub fn write_matrix_to<T>(
    writer: impl io::Write,
    labels: &[isize],
    values: &DMatrix<T>,
) -> csv::Result<()>
where
    T: Scalar + Display,
{
    let mut wtr = csv::Writer::from_writer(writer);

    let header = std::iter::once("residue".to_string()).chain(labels.iter().map(|l| l.to_string()));
    wtr.write_record(header)?;

    for (row, label) in labels.iter().enumerate() {
        let row_values = values.row(row);
        let cells =
            std::iter::once(label.to_string()).chain(row_values.iter().map(|v| v.to_string()));
        wtr.write_record(cells)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_centers(path: &Path, table: &ResiduePointTable) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_centers_to(file, table).map_err(|source| CliError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(rows = table.len(), "Wrote residue centers to {:?}", path);
    Ok(())
}

pub fn write_matrix<T>(path: &Path, labels: &[isize], values: &DMatrix<T>) -> Result<()>
where
    T: Scalar + Display,
{
    let file = std::fs::File::create(path)?;
    write_matrix_to(file, labels, values).map_err(|source| CliError::Csv {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(size = labels.len(), "Wrote matrix to {:?}", path);
    Ok(())
}

use crate::core::models::residue::ResiduePointTable;
use crate::engine::error::EngineError;
use crate::engine::matrix::{ContactMatrix, DistanceMatrix};
use crate::engine::progress::{Progress, ProgressReporter};
use tracing::{debug, info, instrument};

#[instrument(skip_all, name = "distance_map_task")]
pub fn run(table: &ResiduePointTable, reporter: &ProgressReporter) -> DistanceMatrix {
    let n = table.len();
    info!(residues = n, "Building pairwise distance map.");

    reporter.report(Progress::TaskStart {
        total_steps: n as u64,
    });
    let distances =
        DistanceMatrix::from_points_with(table, || reporter.report(Progress::TaskIncrement));
    reporter.report(Progress::TaskFinish);

    debug!(cells = n * n, "Distance map complete.");
    distances
}

#[instrument(skip_all, name = "contact_map_task")]
pub fn threshold(distances: &DistanceMatrix, threshold: f64) -> Result<ContactMatrix, EngineError> {
    let contacts = ContactMatrix::from_distances(distances, threshold)?;
    info!(
        threshold,
        contacts = contacts.contact_count(),
        "Contact map thresholded."
    );
    Ok(contacts)
}

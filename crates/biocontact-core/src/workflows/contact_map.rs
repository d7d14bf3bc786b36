use crate::core::models::residue::ResiduePointTable;
use crate::core::models::structure::Structure;
use crate::engine::center::CenterEstimator;
use crate::engine::config::ContactMapConfig;
use crate::engine::error::EngineError;
use crate::engine::matrix::{ContactMatrix, DistanceMatrix};
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::tasks;
use tracing::{info, instrument};

#[derive(Debug, Clone)]
pub struct ContactMapResult {
    pub points: ResiduePointTable,
    pub distances: DistanceMatrix,
    pub contacts: ContactMatrix,
}

/// Computes residue centers, the distance map and the contact map.
///
/// The threshold is validated before any work is done, so a bad threshold
/// never costs a full distance computation.
#[instrument(skip_all, name = "contact_map_workflow")]
pub fn run(
    structure: &Structure,
    config: &ContactMapConfig,
    reporter: &ProgressReporter,
) -> Result<ContactMapResult, EngineError> {
    config.validate()?;
    info!(
        residues = structure.len(),
        atoms = structure.atom_count(),
        threshold = config.threshold,
        policy = %config.center_policy,
        "Starting contact map workflow."
    );

    let estimator = CenterEstimator::new(config.center_policy);

    let points = reporter.phase("Estimating residue centers", || {
        tasks::centers::run(structure, &estimator, reporter)
    })?;

    let distances = reporter.phase("Building distance map", || {
        tasks::distance_map::run(&points, reporter)
    });

    let contacts = reporter.phase("Thresholding contact map", || {
        tasks::distance_map::threshold(&distances, config.threshold)
    })?;
    reporter.report(Progress::Message(format!(
        "Found {} contacting residue pairs among {} residues",
        contacts.contact_count(),
        points.len()
    )));

    info!(
        residues = points.len(),
        contacts = contacts.contact_count(),
        "Workflow complete."
    );
    Ok(ContactMapResult {
        points,
        distances,
        contacts,
    })
}

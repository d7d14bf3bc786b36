use crate::core::models::residue::{ResiduePoint, ResiduePointTable};
use crate::core::models::structure::Structure;
use crate::engine::center::CenterEstimator;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use tracing::{info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Reduces every residue of `structure` to one point, keeping first-encounter
/// order. Any residue that cannot be estimated aborts the whole run.
#[instrument(skip_all, name = "residue_centers_task")]
pub fn run(
    structure: &Structure,
    estimator: &CenterEstimator,
    reporter: &ProgressReporter,
) -> Result<ResiduePointTable, EngineError> {
    info!(
        residues = structure.len(),
        policy = %estimator.policy(),
        "Estimating residue centers."
    );

    reporter.report(Progress::TaskStart {
        total_steps: structure.len() as u64,
    });

    #[cfg(not(feature = "parallel"))]
    let iterator = structure.residues().iter();

    #[cfg(feature = "parallel")]
    let iterator = structure.residues().par_iter();

    let points = iterator
        .map(|residue| {
            let center = estimator
                .estimate(residue.atoms())
                .map_err(|source| EngineError::Center {
                    residue_number: residue.number,
                    source,
                })?;
            reporter.report(Progress::TaskIncrement);
            Ok(ResiduePoint::new(residue.number, center))
        })
        .collect::<Result<Vec<_>, EngineError>>()?;

    reporter.report(Progress::TaskFinish);

    let table = ResiduePointTable::try_from(points)?;
    info!(points = table.len(), "Residue centers estimated.");
    Ok(table)
}

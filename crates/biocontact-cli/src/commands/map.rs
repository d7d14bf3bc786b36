use crate::cli::MapArgs;
use crate::config::{self, AppConfig, StructureSource};
use crate::error::{CliError, Result};
use crate::fetch::{FetchProgress, StructureCache};
use crate::output::{self, OutputPaths};
use crate::render;
use crate::utils::progress::{CliProgressHandler, download_bar};
use biocontact::{
    core::io::{pdb::PdbFile, traits::StructureFile},
    engine::progress::ProgressReporter,
    workflows::contact_map::{self, ContactMapResult},
};
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn};

pub async fn run(args: MapArgs) -> Result<()> {
    info!("Resolving configuration from defaults, file and CLI arguments...");
    let config = config::build_config(&args)?;

    let structure_path = locate_structure(&config).await?;

    info!("Loading input structure from {:?}", &structure_path);
    let (structure, metadata) =
        PdbFile::read_from_path(&structure_path).map_err(|e| CliError::FileParsing {
            path: structure_path.clone(),
            source: e.into(),
        })?;
    if metadata.skipped_hetatm_records > 0 {
        info!(
            skipped = metadata.skipped_hetatm_records,
            "HETATM records are not part of the map."
        );
    }
    if let Some(title) = &metadata.title {
        info!("Structure title: {}", title);
    }

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    println!(
        "Mapping {} ({} residues, threshold {} Å, {} centers)...",
        config.label,
        structure.len(),
        config.core_config.threshold,
        config.core_config.center_policy
    );

    let result = tokio::task::block_in_place(|| {
        contact_map::run(&structure, &config.core_config, &reporter)
    })?;

    let paths = tokio::task::block_in_place(|| write_outputs(&config, &result))?;

    println!(
        "✓ {} residues, {} contacting residue pairs.",
        result.points.len(),
        result.contacts.contact_count()
    );
    println!("  Residue centers: {}", paths.centers.display());
    println!("  Distance map:    {}", paths.distance_table.display());
    println!("  Contact map:     {}", paths.contact_table.display());
    if config.render_plots {
        println!("  Figures:         {}", paths.distance_figure.display());
        println!("                   {}", paths.contact_figure.display());
    }

    Ok(())
}

async fn locate_structure(config: &AppConfig) -> Result<PathBuf> {
    let pdb_id = match &config.source {
        StructureSource::Local(path) => return Ok(path.clone()),
        StructureSource::Remote { pdb_id } => pdb_id,
    };

    let cache = StructureCache::new()?;
    let pb = download_bar(pdb_id);

    let progress_callback = |progress: FetchProgress| match progress {
        FetchProgress::DownloadStarted { total_size } => {
            if let Some(size) = total_size {
                pb.set_length(size);
            }
        }
        FetchProgress::Downloading { downloaded } => pb.set_position(downloaded),
    };

    match cache
        .fetch(
            pdb_id,
            &config.fetch_base_url,
            config.refresh,
            progress_callback,
        )
        .await
    {
        Ok(path) => {
            pb.finish_and_clear();
            Ok(path)
        }
        Err(e) => {
            pb.abandon_with_message("✗ Download failed.");
            warn!("Could not fetch {}: {}", pdb_id, e);
            Err(e)
        }
    }
}

/// Writes the tables, and the figures when enabled, into the output directory.
fn write_outputs(config: &AppConfig, result: &ContactMapResult) -> Result<OutputPaths> {
    fs::create_dir_all(&config.output_dir)?;
    let paths = OutputPaths::new(&config.output_dir, &config.label);

    output::write_centers(&paths.centers, &result.points)?;
    output::write_matrix(
        &paths.distance_table,
        result.distances.labels(),
        result.distances.values(),
    )?;
    output::write_matrix(
        &paths.contact_table,
        result.contacts.labels(),
        result.contacts.values(),
    )?;

    if config.render_plots {
        render::render_distance_map(&paths.distance_figure, &config.label, &result.distances)?;
        render::render_contact_map(&paths.contact_figure, &config.label, &result.contacts)?;
    } else {
        info!("Figure rendering disabled.");
    }

    info!("Outputs written to {:?}", &config.output_dir);
    Ok(paths)
}

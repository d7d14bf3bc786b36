use super::defaults::DefaultsConfig;
use super::file::FileConfig;
use super::models::{AppConfig, StructureSource};
use crate::cli::MapArgs;
use crate::error::{CliError, Result};
use crate::utils::parser;
use biocontact::engine::center::CenterPolicy;
use biocontact::engine::config::ContactMapConfigBuilder;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub fn build_config(args: &MapArgs) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let (source, label) = resolve_source(&args.structure, args.local)?;

    let threshold = args.threshold.or(file_config.threshold).ok_or_else(|| {
        CliError::Config(
            "A contact threshold is required: pass --threshold, set `threshold` in the config file, or use -S threshold=<FLOAT>.".to_string(),
        )
    })?;

    let center_policy = match &args.center_policy {
        Some(name) => parse_center_policy(name)?,
        None => file_config
            .center_policy
            .unwrap_or(defaults.center_policy),
    };

    let output_file = file_config.output.take().unwrap_or_default();
    let output_dir = args
        .output_dir
        .clone()
        .or(output_file.directory)
        .unwrap_or_else(|| PathBuf::from(&defaults.output_dir));
    let render_plots = !args.no_plots && output_file.plots.unwrap_or(defaults.render_plots);

    let fetch_base_url = file_config
        .fetch
        .take()
        .and_then(|f| f.base_url)
        .unwrap_or(defaults.fetch_base_url);

    let core_config = ContactMapConfigBuilder::new()
        .threshold(threshold)
        .center_policy(center_policy)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    Ok(AppConfig {
        source,
        label,
        output_dir,
        render_plots,
        fetch_base_url: fetch_base_url.trim_end_matches('/').to_string(),
        refresh: args.refresh,
        core_config,
    })
}

fn resolve_source(structure: &str, local: bool) -> Result<(StructureSource, String)> {
    if local {
        let path = Path::new(structure);
        if !path.is_file() {
            return Err(CliError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Provided path does not exist: {}", structure),
            )));
        }
        let label = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "structure".to_string());
        return Ok((StructureSource::Local(path.to_path_buf()), label));
    }

    let pdb_id =
        parser::parse_pdb_id(structure).map_err(|e| CliError::Argument(e.to_string()))?;
    Ok((
        StructureSource::Remote {
            pdb_id: pdb_id.clone(),
        },
        pdb_id,
    ))
}

fn parse_center_policy(value: &str) -> Result<CenterPolicy> {
    CenterPolicy::from_str(value).map_err(|e| CliError::Config(e.to_string()))
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };

        match key.trim() {
            "threshold" => {
                config.threshold = Some(value_str.trim().parse().map_err(|_| {
                    CliError::Config(format!("Invalid float value for {}: {}", key, value_str))
                })?);
            }
            "center-policy" => {
                config.center_policy = Some(parse_center_policy(value_str)?);
            }
            "output.directory" => {
                config
                    .output
                    .get_or_insert_with(Default::default)
                    .directory = Some(PathBuf::from(value_str));
            }
            "output.plots" => {
                config.output.get_or_insert_with(Default::default).plots =
                    Some(value_str.trim().parse().map_err(|_| {
                        CliError::Config(format!(
                            "Invalid boolean value for {}: {}",
                            key, value_str
                        ))
                    })?);
            }
            "fetch.base-url" => {
                config.fetch.get_or_insert_with(Default::default).base_url =
                    Some(value_str.to_string());
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}

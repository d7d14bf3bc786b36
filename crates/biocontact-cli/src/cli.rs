use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Sarah Wait",
    version,
    about = "BioContact CLI - Residue distance maps and contact maps from protein structures.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads for parallel computation.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute residue centers, the distance map and the contact map of a structure.
    Map(MapArgs),
    /// Manage the local cache of downloaded PDB files.
    Cache(CacheArgs),
}

/// Arguments for the `map` subcommand.
#[derive(Args, Debug)]
pub struct MapArgs {
    /// A four-character PDB id (e.g., 1CRN), or a file path when --local is given.
    #[arg(required = true, value_name = "STRUCTURE")]
    pub structure: String,

    /// Treat STRUCTURE as the path of a local PDB file instead of a PDB id.
    #[arg(long)]
    pub local: bool,

    /// Contact distance threshold in Angstroms (inclusive).
    #[arg(short, long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub threshold: Option<f64>,

    /// How residue centers are estimated: 'mass-weighted' or 'unweighted-mean'.
    #[arg(short = 'p', long, value_name = "POLICY")]
    pub center_policy: Option<String>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Directory the tables and figures are written to.
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Skip rendering the SVG heatmaps.
    #[arg(long)]
    pub no_plots: bool,

    /// Download the structure again even if it is already cached.
    #[arg(long, conflicts_with = "local")]
    pub refresh: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S threshold=8.0
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `cache` subcommand.
#[derive(Args, Debug)]
pub struct CacheArgs {
    #[command(subcommand)]
    pub command: CacheCommands,
}

/// Available commands for cache management.
#[derive(Subcommand, Debug)]
pub enum CacheCommands {
    /// Show the absolute path to the structure cache directory.
    Path,
    /// Delete every cached structure file.
    Clear,
    /// Set a custom absolute path for the structure cache directory.
    SetPath {
        /// The new path to use for storing downloaded structures.
        #[arg(required = true)]
        path: PathBuf,
    },
    /// Reset the cache path to its default, OS-specific location.
    ResetPath,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn map_accepts_pdb_id_and_overrides() {
        let cli = Cli::parse_from([
            "biocontact",
            "-vv",
            "map",
            "1crn",
            "-t",
            "8.5",
            "-p",
            "unweighted-mean",
            "--no-plots",
            "-S",
            "output.directory=out",
        ]);
        assert_eq!(cli.verbose, 2);
        let Commands::Map(args) = cli.command else {
            panic!("expected map command");
        };
        assert_eq!(args.structure, "1crn");
        assert!(!args.local);
        assert_eq!(args.threshold, Some(8.5));
        assert_eq!(args.center_policy.as_deref(), Some("unweighted-mean"));
        assert!(args.no_plots);
        assert_eq!(args.set_values, vec!["output.directory=out".to_string()]);
    }

    #[test]
    fn map_accepts_negative_threshold() {
        let cli = Cli::parse_from(["biocontact", "map", "--local", "a.pdb", "-t", "-1"]);
        let Commands::Map(args) = cli.command else {
            panic!("expected map command");
        };
        assert_eq!(args.threshold, Some(-1.0));
    }

    #[test]
    fn refresh_conflicts_with_local() {
        let result = Cli::try_parse_from(["biocontact", "map", "--local", "--refresh", "a.pdb"]);
        assert!(result.is_err());
    }

    #[test]
    fn cache_set_path_requires_path() {
        assert!(Cli::try_parse_from(["biocontact", "cache", "set-path"]).is_err());
        let cli = Cli::parse_from(["biocontact", "cache", "set-path", "/tmp/pdb"]);
        assert!(matches!(
            cli.command,
            Commands::Cache(CacheArgs {
                command: CacheCommands::SetPath { .. }
            })
        ));
    }
}

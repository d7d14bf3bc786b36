use biocontact::engine::config::ContactMapConfig;
use std::path::PathBuf;

/// Where the input structure comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StructureSource {
    Local(PathBuf),
    Remote { pdb_id: String },
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub source: StructureSource,
    /// Prefix of every output file and figure title.
    pub label: String,
    pub output_dir: PathBuf,
    pub render_plots: bool,
    pub fetch_base_url: String,
    pub refresh: bool,
    pub core_config: ContactMapConfig,
}

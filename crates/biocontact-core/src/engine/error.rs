use thiserror::Error;

use super::center::CenterError;
use super::config::ConfigError;
use crate::core::models::residue::TableError;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Failed to estimate center of residue {residue_number}: {source}")]
    Center {
        residue_number: isize,
        #[source]
        source: CenterError,
    },

    #[error("Invalid contact threshold {0}: must be a finite number")]
    InvalidThreshold(f64),

    #[error("Residue point table error: {source}")]
    Table {
        #[from]
        source: TableError,
    },

    #[error("Invalid configuration: {source}")]
    Config {
        #[from]
        source: ConfigError,
    },
}

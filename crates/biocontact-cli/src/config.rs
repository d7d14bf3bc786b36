//! Layered configuration for the `map` command.
//!
//! Values are resolved in increasing order of precedence: built-in defaults,
//! the TOML file given with `--config`, `--set KEY=VALUE` overrides, and
//! finally explicit command-line flags.

mod builder;
mod defaults;
mod file;
mod models;

pub use builder::build_config;
pub use models::{AppConfig, StructureSource};

use crate::cli::{CacheArgs, CacheCommands};
use crate::error::{CliError, Result};
use crate::fetch::StructureCache;
use std::path::PathBuf;
use tracing::info;

pub async fn run(args: CacheArgs) -> Result<()> {
    match args.command {
        CacheCommands::Path => handle_path(),
        CacheCommands::Clear => handle_clear(),
        CacheCommands::SetPath { path } => handle_set_path(path),
        CacheCommands::ResetPath => handle_reset_path(),
    }
}

fn handle_path() -> Result<()> {
    let cache = StructureCache::new()?;
    println!("{}", cache.cache_path().display());
    Ok(())
}

fn handle_clear() -> Result<()> {
    let cache = StructureCache::new()?;
    let removed = cache.clear()?;
    println!(
        "✓ Removed {} cached structure file(s) from {}",
        removed,
        cache.cache_path().display()
    );
    Ok(())
}

fn handle_set_path(path: PathBuf) -> Result<()> {
    if !path.is_absolute() {
        return Err(CliError::Argument(format!(
            "Cache path must be absolute: {}",
            path.display()
        )));
    }
    StructureCache::set_custom_path(&path)?;
    info!("Cache path set to {:?}", &path);
    println!("✓ Cache path set to {}", path.display());
    Ok(())
}

fn handle_reset_path() -> Result<()> {
    StructureCache::reset_path()?;
    let cache = StructureCache::new()?;
    println!(
        "✓ Cache path reset to default: {}",
        cache.cache_path().display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_cache_path_is_rejected() {
        assert!(matches!(
            handle_set_path(PathBuf::from("relative/dir")),
            Err(CliError::Argument(_))
        ));
    }
}

use crate::error::{CliError, Result};
use directories::ProjectDirs;
use futures_util::StreamExt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const PATH_CONFIG_FILE: &str = "path.conf";

#[derive(Debug, Clone, Copy)]
pub enum FetchProgress {
    DownloadStarted { total_size: Option<u64> },
    Downloading { downloaded: u64 },
}

/// On-disk cache of structures downloaded from a PDB mirror.
///
/// Files are stored flat as `<ID>.pdb`. The cache directory defaults to the
/// platform cache location and can be redirected with a `path.conf` file in
/// the platform config directory.
#[derive(Debug)]
pub struct StructureCache {
    base_path: PathBuf,
}

impl StructureCache {
    pub fn new() -> Result<Self> {
        let path = Self::determine_cache_path()?;
        debug!("StructureCache initialized with path: {:?}", &path);
        Ok(Self { base_path: path })
    }

    #[cfg(test)]
    pub fn with_custom_path(path: PathBuf) -> Self {
        Self { base_path: path }
    }

    pub fn cache_path(&self) -> &Path {
        &self.base_path
    }

    pub fn structure_path(&self, pdb_id: &str) -> PathBuf {
        self.base_path
            .join(format!("{}.pdb", pdb_id.to_ascii_uppercase()))
    }

    /// Returns the cached file for `pdb_id`, downloading it first when it is
    /// missing or `refresh` is set.
    pub async fn fetch(
        &self,
        pdb_id: &str,
        base_url: &str,
        refresh: bool,
        progress_callback: impl FnMut(FetchProgress),
    ) -> Result<PathBuf> {
        let target = self.structure_path(pdb_id);
        if target.is_file() && !refresh {
            info!("Using cached structure {:?}", &target);
            return Ok(target);
        }

        fs::create_dir_all(&self.base_path)?;
        let url = format!("{}/{}.pdb", base_url.trim_end_matches('/'), pdb_id);
        let bytes = download(&url, progress_callback).await?;
        if bytes.is_empty() {
            return Err(CliError::Cache(format!(
                "Server returned an empty file for {}",
                pdb_id
            )));
        }

        // Write beside the target first so an interrupted download never
        // leaves a truncated file under the cached name.
        let partial = target.with_extension("pdb.part");
        fs::write(&partial, &bytes)?;
        fs::rename(&partial, &target)?;

        info!(bytes = bytes.len(), "Cached structure at {:?}", &target);
        Ok(target)
    }

    /// Removes every cached structure and returns how many were deleted.
    pub fn clear(&self) -> Result<usize> {
        if !self.base_path.exists() {
            return Ok(0);
        }
        let mut removed = 0;
        for entry in fs::read_dir(&self.base_path)? {
            let path = entry?.path();
            let is_structure = path
                .extension()
                .is_some_and(|ext| ext == "pdb" || ext == "part");
            if path.is_file() && is_structure {
                fs::remove_file(&path)?;
                removed += 1;
            }
        }
        info!(removed, "Cleared structure cache at {:?}", &self.base_path);
        Ok(removed)
    }

    pub fn set_custom_path(path: &Path) -> Result<()> {
        Self::write_path_config(&Self::get_path_config_file()?, path)
    }

    pub fn reset_path() -> Result<()> {
        if let Ok(config_path) = Self::get_path_config_file() {
            if config_path.exists() {
                fs::remove_file(config_path)?;
            }
        }
        Ok(())
    }

    fn write_path_config(config_path: &Path, path: &Path) -> Result<()> {
        let path_str = path.to_str().ok_or_else(|| {
            CliError::Argument(format!("Cache path is not valid UTF-8: {:?}", path))
        })?;
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(config_path, path_str).map_err(CliError::from)
    }

    fn read_path_config(config_path: &Path) -> Result<Option<PathBuf>> {
        if !config_path.exists() {
            return Ok(None);
        }
        let custom_path_str = fs::read_to_string(config_path)?.trim().to_string();
        if custom_path_str.is_empty() {
            warn!("Custom path config file is empty, falling back to default path.");
            return Ok(None);
        }
        Ok(Some(PathBuf::from(custom_path_str)))
    }

    fn determine_cache_path() -> Result<PathBuf> {
        match Self::get_path_config_file() {
            Ok(config_path) => match Self::read_path_config(&config_path)? {
                Some(path) => Ok(path),
                None => Self::get_default_cache_path(),
            },
            Err(_) => Self::get_default_cache_path(),
        }
    }

    fn project_dirs() -> Result<ProjectDirs> {
        ProjectDirs::from("io", "biocontact", "biocontact").ok_or_else(|| {
            CliError::Cache("Could not determine the user's home directory.".to_string())
        })
    }

    fn get_path_config_file() -> Result<PathBuf> {
        Ok(Self::project_dirs()?.config_dir().join(PATH_CONFIG_FILE))
    }

    fn get_default_cache_path() -> Result<PathBuf> {
        Ok(Self::project_dirs()?.cache_dir().join("structures"))
    }
}

async fn download(url: &str, mut progress_callback: impl FnMut(FetchProgress)) -> Result<Vec<u8>> {
    info!("Sending request to {}", url);
    let client = reqwest::Client::new();
    let response = client.get(url).send().await?.error_for_status()?;

    let total_size = response.content_length();
    progress_callback(FetchProgress::DownloadStarted { total_size });

    let mut downloaded: u64 = 0;
    let mut stream = response.bytes_stream();
    let mut buffer: Vec<u8> = Vec::with_capacity(total_size.unwrap_or(0) as usize);

    while let Some(item) = stream.next().await {
        let chunk = item?;
        buffer.extend_from_slice(&chunk);
        downloaded += chunk.len() as u64;
        progress_callback(FetchProgress::Downloading { downloaded });
    }

    debug!(bytes = downloaded, "Download complete.");
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn structure_path_is_upper_case_id_with_pdb_extension() {
        let dir = tempdir().unwrap();
        let cache = StructureCache::with_custom_path(dir.path().to_path_buf());
        assert_eq!(cache.structure_path("1crn"), dir.path().join("1CRN.pdb"));
    }

    #[tokio::test]
    async fn cached_file_is_returned_without_network() {
        let dir = tempdir().unwrap();
        let cache = StructureCache::with_custom_path(dir.path().to_path_buf());
        fs::write(cache.structure_path("1CRN"), "END\n").unwrap();

        let mut calls = 0;
        // An unroutable URL: any network access would fail the test.
        let path = cache
            .fetch("1CRN", "http://127.0.0.1:9", false, |_| calls += 1)
            .await
            .unwrap();

        assert_eq!(path, dir.path().join("1CRN.pdb"));
        assert_eq!(calls, 0);
    }

    #[tokio::test]
    async fn refresh_with_unreachable_server_is_a_network_error() {
        let dir = tempdir().unwrap();
        let cache = StructureCache::with_custom_path(dir.path().to_path_buf());
        fs::write(cache.structure_path("1CRN"), "END\n").unwrap();

        let result = cache
            .fetch("1CRN", "http://127.0.0.1:9", true, |_| {})
            .await;

        assert!(matches!(result, Err(CliError::Network(_))));
        assert_eq!(
            fs::read_to_string(cache.structure_path("1CRN")).unwrap(),
            "END\n"
        );
    }

    #[test]
    fn clear_removes_only_structure_files() {
        let dir = tempdir().unwrap();
        let cache = StructureCache::with_custom_path(dir.path().to_path_buf());
        fs::write(dir.path().join("1CRN.pdb"), "").unwrap();
        fs::write(dir.path().join("4HHB.pdb"), "").unwrap();
        fs::write(dir.path().join("2XYZ.pdb.part"), "").unwrap();
        fs::write(dir.path().join("notes.txt"), "keep").unwrap();

        assert_eq!(cache.clear().unwrap(), 3);
        assert!(dir.path().join("notes.txt").exists());
        assert!(!dir.path().join("1CRN.pdb").exists());
    }

    #[test]
    fn clear_on_missing_directory_is_a_no_op() {
        let dir = tempdir().unwrap();
        let cache = StructureCache::with_custom_path(dir.path().join("never-created"));
        assert_eq!(cache.clear().unwrap(), 0);
    }

    #[test]
    fn path_config_round_trips_and_ignores_blank_files() {
        let dir = tempdir().unwrap();
        let config_file = dir.path().join("config").join(PATH_CONFIG_FILE);

        assert_eq!(StructureCache::read_path_config(&config_file).unwrap(), None);

        let custom = dir.path().join("custom-cache");
        StructureCache::write_path_config(&config_file, &custom).unwrap();
        assert_eq!(
            StructureCache::read_path_config(&config_file).unwrap(),
            Some(custom)
        );

        fs::write(&config_file, "   \n").unwrap();
        assert_eq!(StructureCache::read_path_config(&config_file).unwrap(), None);
    }
}

// Cache path utilities.
// Locates the platform cache directory and the storage file inside it.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

/// File name of the persisted key-value store.
pub const STORAGE_FILE: &str = "storage.json";

/// Get the base cache directory (~/.cache/sitekit on Linux).
pub fn cache_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "sitekit").map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Path to the storage file inside `dir`.
pub fn storage_path(dir: &Path) -> PathBuf {
    dir.join(STORAGE_FILE)
}

/// Path to the storage file in the default cache directory.
pub fn default_storage_path() -> Option<PathBuf> {
    cache_dir().map(|dir| storage_path(&dir))
}

// Key-value string stores backing the response cache and UI preferences.
// The file store keeps one JSON object on disk and rewrites it atomically.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use tracing::warn;

use crate::error::{Error, Result};

/// Synchronous string store, shaped like browser `localStorage`.
pub trait Store: Send + Sync {
    /// Read the value stored under `key`, if any.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: String) -> Result<()>;
}

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>> {
    mutex
        .lock()
        .map_err(|_| Error::Store("store lock poisoned".to_string()))
}

/// In-process store. Contents are lost when it is dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> Result<usize> {
        Ok(lock(&self.items)?.len())
    }

    pub fn is_empty(&self) -> Result<bool> {
        Ok(self.len()? == 0)
    }
}

impl Store for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(lock(&self.items)?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: String) -> Result<()> {
        lock(&self.items)?.insert(key.to_string(), value);
        Ok(())
    }
}

/// Store persisted as a single JSON object file.
///
/// Every call re-reads the file so separate processes sharing the same path
/// observe each other's writes; the mutex only serializes calls within this
/// process.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    guard: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            guard: Mutex::new(()),
        }
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }

        let contents = fs::read_to_string(&self.path)?;
        let map = serde_json::from_str(&contents)?;
        Ok(map)
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<()> {
        // Ensure parent directory exists
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(map)?;

        // Write atomically via temp file
        let temp_path = self.path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
        fs::rename(&temp_path, &self.path)?;

        Ok(())
    }
}

impl Store for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let _guard = lock(&self.guard)?;
        Ok(self.read_map()?.remove(key))
    }

    fn set_item(&self, key: &str, value: String) -> Result<()> {
        let _guard = lock(&self.guard)?;
        let mut map = match self.read_map() {
            Ok(map) => map,
            Err(Error::Json(e)) => {
                warn!("discarding unreadable store {}: {}", self.path.display(), e);
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };
        map.insert(key.to_string(), value);
        self.write_map(&map)
    }
}

// Cache module for time-windowed response caching.
// Stores fetched JSON with its fetch time in a key-value store that survives restarts.

pub mod paths;
pub mod store;
pub mod timed;

pub use paths::{STORAGE_FILE, cache_dir, default_storage_path, storage_path};
pub use store::{FileStore, MemoryStore, Store};
pub use timed::{CachedData, DEFAULT_TTL, TimedCache};

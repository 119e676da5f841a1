//! File-backed key-value store for the CLI.

use std::fs;
use std::path::PathBuf;

use verdict_core::KvStore;

/// Single-file key-value store.
///
/// Keys and values live in one JSON object on disk. A missing or unreadable
/// file behaves like an empty store; failed writes report `false` so the
/// engine's persistence stays best-effort.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_map(&self) -> serde_json::Map<String, serde_json::Value> {
        fs::read_to_string(&self.path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_map()
            .get(key)
            .and_then(|v| v.as_str().map(str::to_string))
    }

    fn set(&mut self, key: &str, value: &str) -> bool {
        let mut map = self.read_map();
        map.insert(key.to_string(), serde_json::Value::String(value.to_string()));
        match serde_json::to_string_pretty(&serde_json::Value::Object(map)) {
            Ok(raw) => fs::write(&self.path, raw).is_ok(),
            Err(_) => false,
        }
    }
}

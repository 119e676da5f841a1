//! Key-value persistence boundary.

use std::collections::HashMap;

/// A minimal key-value persistence collaborator.
///
/// The engine stores its serialized history under a single fixed key.
/// Implementations must tolerate absence (first run); `set` reports success
/// as a boolean so persistence stays best-effort and never interrupts the
/// in-memory model.
pub trait KvStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`. Returns whether the write succeeded.
    fn set(&mut self, key: &str, value: &str) -> bool;
}

/// In-memory store backed by a hash map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> bool {
        self.values.insert(key.to_string(), value.to_string());
        true
    }
}

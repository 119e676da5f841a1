//! Bounded most-recent-first history storage.

use crate::store::KvStore;

use super::record::DecisionRecord;

/// Maximum number of records kept in the history log.
pub const MAX_ENTRIES: usize = 20;

/// A bounded, most-recent-first log of decision records.
///
/// Persisted as a bare JSON array of record objects. Loading tolerates a
/// missing key and corrupt or unexpected data, both of which yield an empty
/// log; writing is best-effort and reports success as a boolean.
#[derive(Debug, Clone, Default)]
pub struct HistoryLog {
    entries: Vec<DecisionRecord>,
}

impl HistoryLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record at the head; truncate the tail beyond [`MAX_ENTRIES`].
    pub fn record(&mut self, record: DecisionRecord) {
        self.entries.insert(0, record);
        self.entries.truncate(MAX_ENTRIES);
    }

    /// All records, most recent first.
    pub fn entries(&self) -> &[DecisionRecord] {
        &self.entries
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop all records.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Parse a persisted JSON array. Corrupt data yields an empty log.
    pub fn from_json(raw: &str) -> Self {
        let mut entries: Vec<DecisionRecord> = serde_json::from_str(raw).unwrap_or_default();
        entries.truncate(MAX_ENTRIES);
        Self { entries }
    }

    /// Serialize to the persisted JSON array form.
    pub fn to_json(&self) -> String {
        serde_json::to_string(&self.entries).unwrap_or_else(|_| "[]".to_string())
    }

    /// Read the log persisted under `key`. Missing or corrupt data is
    /// treated as "no history yet".
    pub fn load(store: &impl KvStore, key: &str) -> Self {
        match store.get(key) {
            Some(raw) => Self::from_json(&raw),
            None => Self::new(),
        }
    }

    /// Best-effort write of the full log under `key`.
    pub fn persist(&self, store: &mut impl KvStore, key: &str) -> bool {
        store.set(key, &self.to_json())
    }
}

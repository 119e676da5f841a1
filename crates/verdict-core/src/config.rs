//! Configuration for a decision session.

/// Storage key the history is persisted under when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "decision_history";

/// Configuration for a [`DecisionSession`](crate::session::DecisionSession).
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// RNG seed for reproducible picks. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Key the serialized history is stored under.
    pub storage_key: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl SessionConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the storage key.
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }
}

//! Session-scoped option list for wheel mode.

use crate::error::{DecisionError, DecisionResult};

/// Maximum number of options in the list.
pub const MAX_OPTIONS: usize = 10;

/// Ordered list of candidate strings for wheel mode.
///
/// Session-only: never persisted. Duplicates are allowed; entries are
/// stored trimmed and non-empty.
#[derive(Debug, Clone, Default)]
pub struct OptionList {
    entries: Vec<String>,
}

impl OptionList {
    /// Create an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an option to the end of the list.
    ///
    /// Rejects text that is empty after trimming and additions beyond
    /// [`MAX_OPTIONS`]. Duplicates are permitted.
    pub fn add(&mut self, text: &str) -> DecisionResult<()> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DecisionError::EmptyOption);
        }
        if self.entries.len() >= MAX_OPTIONS {
            return Err(DecisionError::OptionsFull { max: MAX_OPTIONS });
        }
        self.entries.push(text.to_string());
        Ok(())
    }

    /// Remove and return the option at `index`.
    pub fn remove_at(&mut self, index: usize) -> DecisionResult<String> {
        if index >= self.entries.len() {
            return Err(DecisionError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index))
    }

    /// All options in insertion order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether wheel select is permitted (at least two options).
    pub fn can_spin(&self) -> bool {
        self.entries.len() >= 2
    }

    /// Drop all options.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

//! Bounded decision history: record types and the persisted log.

pub mod log;
pub mod record;

pub use log::{HistoryLog, MAX_ENTRIES};
pub use record::{DecisionRecord, Mode};

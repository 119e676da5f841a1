//! Decision-aid engine: yes/no oracle, coin flip, and wheel pick.
//!
//! Provides uniform random-selection operations for the three decision
//! modes, a bounded most-recent-first history of past decisions persisted
//! through a key-value collaborator, a session-scoped option list for wheel
//! mode, and a `DecisionSession` tying them together.

pub mod config;
pub mod engine;
pub mod error;
pub mod feedback;
pub mod history;
pub mod options;
pub mod session;
pub mod store;

pub use config::SessionConfig;
pub use error::{DecisionError, DecisionResult};
pub use feedback::{FeedbackEvent, FeedbackSink};
pub use history::{DecisionRecord, HistoryLog, Mode};
pub use options::OptionList;
pub use session::DecisionSession;
pub use store::{KvStore, MemoryStore};

pub mod ask;
pub mod flip;
pub mod history;
pub mod pick;
pub mod play;

use std::path::Path;

use verdict_core::{DecisionSession, SessionConfig};

use crate::store::FileStore;

/// Open a session backed by the data file.
fn open_session(data_file: &Path, seed: Option<u64>) -> DecisionSession<FileStore> {
    let mut config = SessionConfig::default();
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    DecisionSession::new(FileStore::new(data_file), config)
}

/// Warn when the last write did not reach the data file.
fn warn_if_not_persisted(session: &DecisionSession<FileStore>) {
    if !session.last_persist_ok() {
        eprintln!("warning: could not write history; this decision is not saved");
    }
}

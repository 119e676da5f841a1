//! Decision session tying the engine, history, and option list together.
//!
//! One `DecisionSession` is constructed per UI session and handed to event
//! handlers by reference; commands return the resulting record so a frontend
//! can render it without reaching into the engine. This replaces the
//! ambient-global style of app wiring with explicit dependency injection.

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::SessionConfig;
use crate::engine;
use crate::error::{DecisionError, DecisionResult};
use crate::feedback::{FeedbackEvent, FeedbackSink};
use crate::history::{DecisionRecord, HistoryLog};
use crate::options::OptionList;
use crate::store::KvStore;

/// An interactive decision-aid session.
///
/// Owns the RNG, the session-scoped option list, the bounded history, and a
/// handle to the persistence collaborator. All operations run synchronously
/// to completion; the only reentrancy concern is the wheel spin, guarded so
/// at most one spin is logically outstanding.
pub struct DecisionSession<S: KvStore> {
    store: S,
    storage_key: String,
    history: HistoryLog,
    options: OptionList,
    rng: StdRng,
    feedback: Option<Box<dyn FeedbackSink>>,
    spinning: bool,
    last_persist_ok: bool,
}

impl<S: KvStore> DecisionSession<S> {
    /// Create a session, loading any persisted history from `store`.
    ///
    /// Missing or corrupt persisted data is treated as "no history yet".
    pub fn new(store: S, config: SessionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let history = HistoryLog::load(&store, &config.storage_key);
        Self {
            store,
            storage_key: config.storage_key,
            history,
            options: OptionList::new(),
            rng,
            feedback: None,
            spinning: false,
            last_persist_ok: true,
        }
    }

    /// Attach a feedback sink. Absence of a sink is a valid configuration.
    pub fn with_feedback(mut self, sink: Box<dyn FeedbackSink>) -> Self {
        self.feedback = Some(sink);
        self
    }

    /// The decision history, most recent first.
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// The current wheel option list.
    pub fn options(&self) -> &OptionList {
        &self.options
    }

    /// Whether wheel select is currently permitted.
    pub fn can_spin(&self) -> bool {
        self.options.can_spin()
    }

    /// Whether the most recent persistence attempt succeeded.
    pub fn last_persist_ok(&self) -> bool {
        self.last_persist_ok
    }

    /// The backing store, for inspection by frontends and tests.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Ask the yes/no oracle and record the outcome.
    pub fn ask(&mut self, question: &str) -> DecisionRecord {
        self.emit(FeedbackEvent::ImpactMedium);
        let record = engine::ask(&mut self.rng, question);
        self.record(record.clone());
        record
    }

    /// Flip the coin and record the outcome.
    pub fn flip(&mut self) -> DecisionRecord {
        self.emit(FeedbackEvent::ImpactHeavy);
        let record = engine::flip(&mut self.rng);
        self.record(record.clone());
        record
    }

    /// Spin the wheel in one step: begin, pick, record.
    pub fn spin(&mut self) -> DecisionResult<DecisionRecord> {
        self.begin_spin()?;
        self.finish_spin()
    }

    /// Start a wheel spin.
    ///
    /// Only one spin may be outstanding: a second call before
    /// [`finish_spin`](Self::finish_spin) or
    /// [`cancel_spin`](Self::cancel_spin) is rejected rather than
    /// interleaved, so one request never yields two records.
    pub fn begin_spin(&mut self) -> DecisionResult<()> {
        if self.spinning {
            self.emit(FeedbackEvent::NotifyError);
            return Err(DecisionError::SpinInProgress);
        }
        if !self.options.can_spin() {
            self.emit(FeedbackEvent::NotifyError);
            return Err(DecisionError::NotEnoughOptions {
                have: self.options.len(),
            });
        }
        self.spinning = true;
        self.emit(FeedbackEvent::ImpactMedium);
        Ok(())
    }

    /// An intermediate pick for spin animation frames. Never recorded.
    pub fn spin_preview(&mut self) -> DecisionResult<String> {
        if !self.spinning {
            return Err(DecisionError::NoSpinInProgress);
        }
        engine::preview(&mut self.rng, self.options.entries()).map(str::to_string)
    }

    /// Settle the outstanding spin with the one pick that gets recorded.
    pub fn finish_spin(&mut self) -> DecisionResult<DecisionRecord> {
        if !self.spinning {
            return Err(DecisionError::NoSpinInProgress);
        }
        let result = engine::spin(&mut self.rng, self.options.entries());
        self.spinning = false;
        let record = result?;
        self.record(record.clone());
        Ok(record)
    }

    /// Abandon the outstanding spin without recording anything.
    pub fn cancel_spin(&mut self) {
        self.spinning = false;
    }

    /// Add a wheel option.
    pub fn add_option(&mut self, text: &str) -> DecisionResult<()> {
        match self.options.add(text) {
            Ok(()) => {
                self.emit(FeedbackEvent::ImpactLight);
                Ok(())
            }
            Err(e) => {
                self.emit(FeedbackEvent::NotifyError);
                Err(e)
            }
        }
    }

    /// Remove and return the wheel option at `index`.
    pub fn remove_option(&mut self, index: usize) -> DecisionResult<String> {
        match self.options.remove_at(index) {
            Ok(text) => {
                self.emit(FeedbackEvent::ImpactLight);
                Ok(text)
            }
            Err(e) => {
                self.emit(FeedbackEvent::NotifyError);
                Err(e)
            }
        }
    }

    /// Clear the history and persist the empty state.
    pub fn clear_history(&mut self) {
        self.history.clear();
        self.persist();
        self.emit(FeedbackEvent::NotifySuccess);
    }

    fn record(&mut self, record: DecisionRecord) {
        self.history.record(record);
        self.persist();
        self.emit(FeedbackEvent::NotifySuccess);
    }

    /// Best-effort persistence; in-memory state stays authoritative.
    fn persist(&mut self) {
        self.last_persist_ok = self.history.persist(&mut self.store, &self.storage_key);
        if !self.last_persist_ok {
            self.emit(FeedbackEvent::NotifyError);
        }
    }

    fn emit(&self, event: FeedbackEvent) {
        if let Some(sink) = &self.feedback {
            sink.emit(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::engine::{ANSWERS, COIN_PROMPT};
    use crate::history::Mode;
    use crate::store::MemoryStore;

    fn test_session() -> DecisionSession<MemoryStore> {
        DecisionSession::new(MemoryStore::new(), SessionConfig::default().with_seed(42))
    }

    /// Sink that records every event it receives.
    #[derive(Clone, Default)]
    struct RecordingSink {
        events: Rc<RefCell<Vec<FeedbackEvent>>>,
    }

    impl FeedbackSink for RecordingSink {
        fn emit(&self, event: FeedbackEvent) {
            self.events.borrow_mut().push(event);
        }
    }

    /// Store whose writes always fail.
    #[derive(Default)]
    struct BrokenStore;

    impl KvStore for BrokenStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }

        fn set(&mut self, _key: &str, _value: &str) -> bool {
            false
        }
    }

    #[test]
    fn new_session_is_empty() {
        let s = test_session();
        assert!(s.history().is_empty());
        assert!(s.options().is_empty());
        assert!(!s.can_spin());
        assert!(s.last_persist_ok());
    }

    #[test]
    fn ask_records_and_persists() {
        let mut s = test_session();
        let rec = s.ask("Should I?");
        assert_eq!(rec.mode, Mode::YesNo);
        assert_eq!(rec.prompt, "Should I?");
        assert!(ANSWERS.iter().any(|a| a.text == rec.result));

        assert_eq!(s.history().len(), 1);
        let persisted = s.store().get("decision_history").unwrap();
        assert!(persisted.contains("Should I?"));
    }

    #[test]
    fn flip_records_coin() {
        let mut s = test_session();
        let rec = s.flip();
        assert_eq!(rec.mode, Mode::Coin);
        assert_eq!(rec.prompt, COIN_PROMPT);
        assert!(rec.result == "Heads" || rec.result == "Tails");
        assert_eq!(s.history().len(), 1);
    }

    #[test]
    fn spin_end_to_end() {
        let mut s = test_session();
        s.add_option("Pizza").unwrap();
        s.add_option("Sushi").unwrap();

        let rec = s.spin().unwrap();
        assert_eq!(rec.mode, Mode::Wheel);
        assert!(rec.result == "Pizza" || rec.result == "Sushi");
        assert_eq!(rec.prompt, "Choice among 2 options");
        assert_eq!(s.history().len(), 1);
    }

    #[test]
    fn spin_rejected_below_two_options() {
        let mut s = test_session();
        assert_eq!(s.spin(), Err(DecisionError::NotEnoughOptions { have: 0 }));
        s.add_option("only").unwrap();
        assert_eq!(s.spin(), Err(DecisionError::NotEnoughOptions { have: 1 }));
        assert!(s.history().is_empty());
    }

    #[test]
    fn second_begin_spin_rejected() {
        let mut s = test_session();
        s.add_option("a").unwrap();
        s.add_option("b").unwrap();

        s.begin_spin().unwrap();
        assert_eq!(s.begin_spin(), Err(DecisionError::SpinInProgress));

        s.finish_spin().unwrap();
        // Guard is released after finishing.
        s.begin_spin().unwrap();
        s.cancel_spin();
    }

    #[test]
    fn previews_are_never_recorded() {
        let mut s = test_session();
        s.add_option("Pizza").unwrap();
        s.add_option("Sushi").unwrap();

        s.begin_spin().unwrap();
        for _ in 0..20 {
            let frame = s.spin_preview().unwrap();
            assert!(frame == "Pizza" || frame == "Sushi");
        }
        assert!(s.history().is_empty());

        s.finish_spin().unwrap();
        assert_eq!(s.history().len(), 1);
    }

    #[test]
    fn preview_and_finish_require_begin() {
        let mut s = test_session();
        s.add_option("a").unwrap();
        s.add_option("b").unwrap();
        assert_eq!(s.spin_preview(), Err(DecisionError::NoSpinInProgress));
        assert!(matches!(
            s.finish_spin(),
            Err(DecisionError::NoSpinInProgress)
        ));
    }

    #[test]
    fn cancel_spin_records_nothing() {
        let mut s = test_session();
        s.add_option("a").unwrap();
        s.add_option("b").unwrap();
        s.begin_spin().unwrap();
        s.cancel_spin();
        assert!(s.history().is_empty());
        assert_eq!(s.spin_preview(), Err(DecisionError::NoSpinInProgress));
    }

    #[test]
    fn history_bounded_at_twenty() {
        let mut s = test_session();
        for _ in 0..25 {
            s.flip();
        }
        assert_eq!(s.history().len(), 20);
    }

    #[test]
    fn clear_history_persists_empty_array() {
        let mut s = test_session();
        s.ask("Should I?");
        s.clear_history();
        assert!(s.history().is_empty());
        assert_eq!(s.store().get("decision_history").unwrap(), "[]");
    }

    #[test]
    fn history_survives_reload() {
        let mut s = test_session();
        s.ask("Should I?");
        s.flip();
        let store = MemoryStore::clone(s.store());

        let reloaded = DecisionSession::new(store, SessionConfig::default());
        assert_eq!(reloaded.history().len(), 2);
        assert_eq!(reloaded.history().entries()[0].mode, Mode::Coin);
        assert_eq!(reloaded.history().entries()[1].prompt, "Should I?");
    }

    #[test]
    fn custom_storage_key() {
        let mut s = DecisionSession::new(
            MemoryStore::new(),
            SessionConfig::default().with_seed(1).with_storage_key("alt"),
        );
        s.flip();
        assert!(s.store().get("alt").is_some());
        assert!(s.store().get("decision_history").is_none());
    }

    #[test]
    fn persist_failure_is_non_fatal() {
        let mut s = DecisionSession::new(BrokenStore, SessionConfig::default().with_seed(1));
        let rec = s.flip();
        assert!(!rec.result.is_empty());
        // In-memory state stays authoritative for the session.
        assert_eq!(s.history().len(), 1);
        assert!(!s.last_persist_ok());
    }

    #[test]
    fn persist_failure_notifies_sink() {
        let sink = RecordingSink::default();
        let events = Rc::clone(&sink.events);
        let mut s = DecisionSession::new(BrokenStore, SessionConfig::default().with_seed(1))
            .with_feedback(Box::new(sink));
        s.flip();
        assert!(events.borrow().contains(&FeedbackEvent::NotifyError));
    }

    #[test]
    fn feedback_events_for_a_flip() {
        let sink = RecordingSink::default();
        let events = Rc::clone(&sink.events);
        let mut s = DecisionSession::new(MemoryStore::new(), SessionConfig::default().with_seed(1))
            .with_feedback(Box::new(sink));
        s.flip();
        assert_eq!(
            *events.borrow(),
            vec![FeedbackEvent::ImpactHeavy, FeedbackEvent::NotifySuccess]
        );
    }

    #[test]
    fn feedback_events_for_option_edits() {
        let sink = RecordingSink::default();
        let events = Rc::clone(&sink.events);
        let mut s = DecisionSession::new(MemoryStore::new(), SessionConfig::default().with_seed(1))
            .with_feedback(Box::new(sink));
        s.add_option("a").unwrap();
        s.remove_option(0).unwrap();
        assert!(s.add_option("  ").is_err());
        assert_eq!(
            *events.borrow(),
            vec![
                FeedbackEvent::ImpactLight,
                FeedbackEvent::ImpactLight,
                FeedbackEvent::NotifyError,
            ]
        );
    }

    #[test]
    fn remove_option_out_of_range() {
        let mut s = test_session();
        assert_eq!(
            s.remove_option(3),
            Err(DecisionError::IndexOutOfRange { index: 3, len: 0 })
        );
    }

    #[test]
    fn seeded_sessions_agree() {
        let mut a = test_session();
        let mut b = test_session();
        for _ in 0..10 {
            assert_eq!(a.flip().result, b.flip().result);
        }
    }

    #[test]
    fn corrupt_persisted_history_starts_empty() {
        let mut store = MemoryStore::new();
        store.set("decision_history", "not json at all");
        let s = DecisionSession::new(store, SessionConfig::default());
        assert!(s.history().is_empty());
    }
}

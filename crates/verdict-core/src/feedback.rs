//! Host-platform notification boundary.
//!
//! The engine emits advisory events (haptic impacts, success/error
//! notifications) through an optional sink. Absence of a sink is a
//! legitimate configuration, not an error.

/// Semantic feedback events the engine may emit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackEvent {
    /// Light tap, on option list edits.
    ImpactLight,
    /// Medium tap, when a decision starts.
    ImpactMedium,
    /// Heavy tap, on a coin flip.
    ImpactHeavy,
    /// A decision was recorded or the history cleared.
    NotifySuccess,
    /// Input was rejected or persistence failed.
    NotifyError,
}

/// Sink for advisory feedback events.
///
/// Fire-and-forget: implementations must not fail, and the engine behaves
/// identically whether or not a sink is attached.
pub trait FeedbackSink {
    /// Receive one event.
    fn emit(&self, event: FeedbackEvent);
}

//! Error types for the decision engine.

use thiserror::Error;

/// Result type for decision operations.
pub type DecisionResult<T> = Result<T, DecisionError>;

/// Errors that can occur while driving a decision session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecisionError {
    /// Option text was empty after trimming.
    #[error("option text is empty")]
    EmptyOption,

    /// The option list is at capacity.
    #[error("option list is full (max {max})")]
    OptionsFull {
        /// Maximum number of options allowed.
        max: usize,
    },

    /// Index outside the option list bounds.
    #[error("index {index} out of range (len {len})")]
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Current list length.
        len: usize,
    },

    /// Wheel select needs at least two options.
    #[error("need at least 2 options to spin (have {have})")]
    NotEnoughOptions {
        /// Current option count.
        have: usize,
    },

    /// A wheel spin is already outstanding.
    #[error("a spin is already in progress")]
    SpinInProgress,

    /// No outstanding spin to preview or finish.
    #[error("no spin in progress")]
    NoSpinInProgress,
}

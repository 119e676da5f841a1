//! Decision engine: the three random-selection operations.
//!
//! Each operation is a pure function over a caller-owned RNG producing one
//! [`DecisionRecord`]. Selection is uniform over the candidate set and
//! independent across calls; past picks never influence future ones.

pub mod answers;

use rand::Rng;
use rand::rngs::StdRng;

use crate::error::{DecisionError, DecisionResult};
use crate::history::{DecisionRecord, Mode};

pub use answers::{ANSWERS, Answer, Tone, answer_for_text, random_answer};

/// Prompt stored when the yes/no question is empty.
pub const DEFAULT_QUESTION: &str = "No question given";

/// Fixed prompt label for coin flips.
pub const COIN_PROMPT: &str = "Coin";

/// The two sides of the coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoinSide {
    /// Heads.
    Heads,
    /// Tails.
    Tails,
}

impl std::fmt::Display for CoinSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Heads => write!(f, "Heads"),
            Self::Tails => write!(f, "Tails"),
        }
    }
}

/// Ask the yes/no oracle.
///
/// The question is trimmed; an empty question is stored under the
/// [`DEFAULT_QUESTION`] sentinel. Always succeeds.
pub fn ask(rng: &mut StdRng, question: &str) -> DecisionRecord {
    let question = question.trim();
    let prompt = if question.is_empty() {
        DEFAULT_QUESTION
    } else {
        question
    };
    let answer = answers::random_answer(rng);
    DecisionRecord::new(Mode::YesNo, prompt, answer.text)
}

/// Flip a fair coin (p = 0.5 each side).
pub fn flip(rng: &mut StdRng) -> DecisionRecord {
    let side = if rng.random_bool(0.5) {
        CoinSide::Heads
    } else {
        CoinSide::Tails
    };
    DecisionRecord::new(Mode::Coin, COIN_PROMPT, side.to_string())
}

/// Pick one option uniformly at random and build the wheel record.
///
/// Requires at least two options. Animation frames belong in [`preview`];
/// only the pick made here is ever meant to be recorded.
pub fn spin(rng: &mut StdRng, options: &[String]) -> DecisionResult<DecisionRecord> {
    if options.len() < 2 {
        return Err(DecisionError::NotEnoughOptions {
            have: options.len(),
        });
    }
    let choice = &options[rng.random_range(0..options.len())];
    let prompt = format!("Choice among {} options", options.len());
    Ok(DecisionRecord::new(Mode::Wheel, prompt, choice.clone()))
}

/// A uniform intermediate pick for spin animations. Never recorded.
pub fn preview<'a>(rng: &mut StdRng, options: &'a [String]) -> DecisionResult<&'a str> {
    if options.len() < 2 {
        return Err(DecisionError::NotEnoughOptions {
            have: options.len(),
        });
    }
    Ok(&options[rng.random_range(0..options.len())])
}

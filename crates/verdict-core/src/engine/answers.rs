//! Fixed answer table for the yes/no oracle.
//!
//! Eight entries weighted by presence: three affirmative, three negative,
//! two ambiguous. Selection is uniform over the table.

use rand::Rng;
use rand::rngs::StdRng;

/// Which way an oracle answer leans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Affirmative.
    Yes,
    /// Negative.
    No,
    /// Ambiguous.
    Maybe,
}

/// One entry in the oracle answer table.
#[derive(Debug, Clone, Copy)]
pub struct Answer {
    /// Display glyph shown with the answer.
    pub icon: &'static str,
    /// Answer text.
    pub text: &'static str,
    /// Which way the answer leans.
    pub tone: Tone,
}

/// The fixed oracle answer table (8 entries).
pub const ANSWERS: &[Answer] = &[
    Answer {
        icon: "✅",
        text: "Yes!",
        tone: Tone::Yes,
    },
    Answer {
        icon: "❌",
        text: "No!",
        tone: Tone::No,
    },
    Answer {
        icon: "🤔",
        text: "Maybe...",
        tone: Tone::Maybe,
    },
    Answer {
        icon: "💯",
        text: "Definitely yes!",
        tone: Tone::Yes,
    },
    Answer {
        icon: "🚫",
        text: "Definitely no!",
        tone: Tone::No,
    },
    Answer {
        icon: "⏰",
        text: "Not the right time",
        tone: Tone::No,
    },
    Answer {
        icon: "🎯",
        text: "Go for it!",
        tone: Tone::Yes,
    },
    Answer {
        icon: "⚠️",
        text: "Think it over",
        tone: Tone::Maybe,
    },
];

/// Pick a uniformly random answer from the table.
pub fn random_answer(rng: &mut StdRng) -> &'static Answer {
    &ANSWERS[rng.random_range(0..ANSWERS.len())]
}

/// Look up the table entry for a given answer text, if it is one of ours.
pub fn answer_for_text(text: &str) -> Option<&'static Answer> {
    ANSWERS.iter().find(|a| a.text == text)
}

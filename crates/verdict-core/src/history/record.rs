//! Decision record types.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Which decision operation produced a record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Yes/no oracle.
    #[default]
    YesNo,
    /// Coin flip.
    Coin,
    /// Wheel pick among user-entered options.
    Wheel,
}

impl Mode {
    /// Display glyph for this mode.
    pub fn icon(self) -> &'static str {
        match self {
            Self::YesNo => "🤔",
            Self::Coin => "🪙",
            Self::Wheel => "🎯",
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::YesNo => write!(f, "yes/no"),
            Self::Coin => write!(f, "coin"),
            Self::Wheel => write!(f, "wheel"),
        }
    }
}

/// One persisted outcome of a single decision operation.
///
/// Records are immutable once created. Every field carries a serde default
/// so partially written or older persisted data loads without errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionRecord {
    /// The operation that produced this record.
    #[serde(default)]
    pub mode: Mode,
    /// The question or context for the decision.
    #[serde(default)]
    pub prompt: String,
    /// The chosen outcome text.
    #[serde(default)]
    pub result: String,
    /// Display glyph for the mode. Not semantically load-bearing.
    #[serde(default)]
    pub icon: String,
    /// Milliseconds since the Unix epoch, assigned at creation.
    #[serde(default)]
    pub timestamp: i64,
}

impl DecisionRecord {
    /// Create a record stamped with the current time.
    pub fn new(mode: Mode, prompt: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            mode,
            prompt: prompt.into(),
            result: result.into(),
            icon: mode.icon().to_string(),
            timestamp: Utc::now().timestamp_millis(),
        }
    }
}

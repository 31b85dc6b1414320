//! Configuration type definitions

use serde::{Deserialize, Serialize};

/// Default word budget for a summary
pub const DEFAULT_TARGET_WORDS: usize = 60;

/// Summarizer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizerConfig {
    /// Maximum whitespace-delimited words in a summary
    #[serde(default = "default_target_words")]
    pub target_words: usize,

    /// Accumulated word count below which the lede is merged back in.
    /// Defaults to two-thirds of `target_words` when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low_yield_words: Option<usize>,
}

fn default_target_words() -> usize {
    DEFAULT_TARGET_WORDS
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            target_words: DEFAULT_TARGET_WORDS,
            low_yield_words: None,
        }
    }
}

impl SummarizerConfig {
    /// Configuration with the given word budget and the derived low-yield threshold
    pub fn with_target_words(target_words: usize) -> Self {
        Self {
            target_words,
            low_yield_words: None,
        }
    }

    /// Effective low-yield threshold
    pub fn low_yield_threshold(&self) -> usize {
        self.low_yield_words.unwrap_or(self.target_words * 2 / 3)
    }
}

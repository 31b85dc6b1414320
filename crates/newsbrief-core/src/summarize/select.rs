//! Heuristic sentence scoring and word-budgeted summary assembly

use std::fmt;

use serde::Serialize;
use tracing::debug;

use super::segment::segment;
use crate::config::SummarizerConfig;
use crate::text::{first_words, lowercase_words, word_count};

/// News-salience vocabulary. Each entry scores at most once per sentence.
pub const NEWS_KEYWORDS: [&str; 21] = [
    "breaking",
    "announced",
    "reported",
    "said",
    "according",
    "officials",
    "government",
    "company",
    "president",
    "minister",
    "spokesperson",
    "investigation",
    "developing",
    "latest",
    "update",
    "confirmed",
    "denied",
    "revealed",
    "discovered",
    "launched",
    "introduced",
];

const LEDE_BONUS: i32 = 10;
const KICKER_BONUS: i32 = 5;
const IDEAL_LENGTH_BONUS: i32 = 5;
const ACCEPTABLE_LENGTH_BONUS: i32 = 3;
const KEYWORD_BONUS: i32 = 2;
const NOISE_PENALTY: i32 = 3;

const IDEAL_LENGTH: std::ops::RangeInclusive<usize> = 8..=25;
const ACCEPTABLE_LENGTH: std::ops::RangeInclusive<usize> = 5..=35;

/// Characters counted against a sentence by the noise penalty
const NOISE_SYMBOLS: &str = "@#$%^&*()_+=[]{}|\\:\";'<>?,./";

const ELLIPSIS: &str = "...";

/// Which branch of the selector produced a summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Text already fit the budget and was returned as-is
    Unchanged,
    /// Two or fewer sentences; the leading words were kept
    Truncated,
    /// Greedy assembly of the highest-scoring sentences
    Scored,
    /// Assembly fell short and the lede was prepended
    LowYieldPrepend,
    /// Assembly fell short and the lede itself was cut to the remaining budget
    LowYieldTruncated,
}

impl Strategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Strategy::Unchanged => "unchanged",
            Strategy::Truncated => "truncated",
            Strategy::Scored => "scored",
            Strategy::LowYieldPrepend => "low_yield_prepend",
            Strategy::LowYieldTruncated => "low_yield_truncated",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A summary together with the branch that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub text: String,
    pub strategy: Strategy,
}

impl Selection {
    pub fn word_count(&self) -> usize {
        word_count(&self.text)
    }
}

/// A sentence with its score, only meaningful relative to its siblings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredSentence<'a> {
    pub text: &'a str,
    pub index: usize,
    pub score: i32,
    pub word_count: usize,
}

fn is_noise_char(c: char) -> bool {
    c.is_ascii_digit() || NOISE_SYMBOLS.contains(c)
}

/// Score a sentence by position, length, keyword hits and symbol noise.
///
/// `index` is the 0-based position among `total` sentences.
pub fn score_sentence(sentence: &str, index: usize, total: usize) -> i32 {
    let words = lowercase_words(sentence);
    let mut score = 0;

    if index == 0 {
        score += LEDE_BONUS;
    }
    if index + 1 == total {
        score += KICKER_BONUS;
    }

    let length = words.len();
    if IDEAL_LENGTH.contains(&length) {
        score += IDEAL_LENGTH_BONUS;
    } else if ACCEPTABLE_LENGTH.contains(&length) {
        score += ACCEPTABLE_LENGTH_BONUS;
    }

    let keyword_hits = NEWS_KEYWORDS
        .iter()
        .filter(|keyword| words.iter().any(|word| word.contains(*keyword)))
        .count();
    score += KEYWORD_BONUS * keyword_hits as i32;

    // More than 30% noise characters per word
    let noise = sentence.chars().filter(|c| is_noise_char(*c)).count();
    if noise * 10 > length * 3 {
        score -= NOISE_PENALTY;
    }

    score
}

/// Segment `text` and score every sentence, in original order
pub fn score_sentences(text: &str) -> Vec<ScoredSentence<'_>> {
    let sentences: Vec<&str> = segment(text).collect();
    score_all(&sentences)
}

fn score_all<'a>(sentences: &[&'a str]) -> Vec<ScoredSentence<'a>> {
    let total = sentences.len();
    sentences
        .iter()
        .enumerate()
        .map(|(index, &sentence)| ScoredSentence {
            text: sentence,
            index,
            score: score_sentence(sentence, index, total),
            word_count: word_count(sentence),
        })
        .collect()
}

/// Keep the first `limit` words, adding an ellipsis unless the cut ends a sentence
pub fn truncate(text: &str, limit: usize) -> String {
    if word_count(text) <= limit {
        return text.to_string();
    }

    let summary = first_words(text, limit);
    if summary.ends_with('.') {
        summary
    } else {
        summary + ELLIPSIS
    }
}

/// Reduce normalized text to at most `target_words` words
pub fn select(text: &str, target_words: usize) -> String {
    select_detailed(text, &SummarizerConfig::with_target_words(target_words)).text
}

/// Reduce normalized text according to `config`, reporting the branch taken.
///
/// Sentences are drawn in descending score order; equal scores keep their
/// original order. Drawn sentences are not restored to text order, and the
/// first one that does not fit ends the assembly.
pub fn select_detailed(text: &str, config: &SummarizerConfig) -> Selection {
    let target = config.target_words;

    let total_words = word_count(text);
    if total_words <= target {
        return Selection {
            text: text.to_string(),
            strategy: Strategy::Unchanged,
        };
    }

    let sentences: Vec<&str> = segment(text).collect();
    if sentences.len() <= 2 {
        debug!(
            sentences = sentences.len(),
            total_words, "select_truncation_fallback"
        );
        return Selection {
            text: truncate(text, target),
            strategy: Strategy::Truncated,
        };
    }

    let mut scored = score_all(&sentences);
    // Stable: ties keep original sentence order
    scored.sort_by(|a, b| b.score.cmp(&a.score));

    let mut summary = String::new();
    let mut accumulated = 0;
    for sentence in &scored {
        if accumulated + sentence.word_count > target {
            break;
        }
        if !summary.is_empty() {
            summary.push(' ');
        }
        summary.push_str(sentence.text);
        accumulated += sentence.word_count;
    }

    let mut strategy = Strategy::Scored;
    if accumulated < config.low_yield_threshold() {
        let remaining = target - accumulated;
        let lede = sentences[0];

        if word_count(lede) > remaining {
            summary = first_words(lede, remaining) + ELLIPSIS;
            strategy = Strategy::LowYieldTruncated;
        } else {
            summary = if summary.is_empty() {
                lede.to_string()
            } else {
                format!("{} {}", lede, summary)
            };
            strategy = Strategy::LowYieldPrepend;
        }
    }

    debug!(
        sentences = sentences.len(),
        total_words,
        accumulated,
        %strategy,
        "select_scored"
    );

    Selection {
        text: summary.trim().to_string(),
        strategy,
    }
}

//! Whitespace word utilities shared by the summarization stages
//!
//! Words are whatever `split_whitespace` yields. Budgets are counted this way
//! rather than with a linguistic tokenizer.

/// Number of whitespace-delimited words in `text`
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// The first `limit` words of `text`, joined by single spaces
pub fn first_words(text: &str, limit: usize) -> String {
    text.split_whitespace()
        .take(limit)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lowercased words of `text`, for case-insensitive matching
pub fn lowercase_words(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

//! Extractive summarization of article title and description text
//!
//! The pipeline runs three pure stages in order:
//! - [`normalize`]: strips metadata noise such as bylines, timestamps and URLs
//! - [`segment`]: splits the cleaned text into sentences
//! - [`select`]: scores sentences and assembles a word-budgeted summary
//!
//! Output is always built from input sentences; nothing is paraphrased.

mod article;
mod normalize;
mod segment;
mod select;

use std::time::Instant;

use tracing::debug;

use crate::config::SummarizerConfig;
use crate::error::Result;
use crate::trace_time;

pub use article::{Article, BatchReport};
pub use normalize::normalize;
pub use segment::{segment, Sentences};
pub use select::{
    score_sentence, score_sentences, select, select_detailed, truncate, ScoredSentence,
    Selection, Strategy, NEWS_KEYWORDS,
};

/// Separator placed between title and description
const PART_SEPARATOR: &str = ". ";

/// Join the present, non-empty parts of an article into one text
pub fn combine(title: Option<&str>, description: Option<&str>) -> String {
    [title, description]
        .into_iter()
        .flatten()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(PART_SEPARATOR)
}

/// Summarize with the default 60-word budget
pub fn summarize_article(title: Option<&str>, description: Option<&str>) -> Option<String> {
    Summarizer::default().summarize(title, description)
}

/// Summarization engine bound to a validated configuration.
///
/// Holds no mutable state; a single instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Summarizer {
    config: SummarizerConfig,
}

impl Summarizer {
    pub fn new(config: SummarizerConfig) -> Result<Self> {
        config.validate()?;
        debug!(
            target_words = config.target_words,
            low_yield_words = config.low_yield_threshold(),
            "summarizer_ready"
        );
        Ok(Self { config })
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    /// Summarize a title and description.
    ///
    /// Returns `None` only when both parts are absent or empty.
    pub fn summarize(&self, title: Option<&str>, description: Option<&str>) -> Option<String> {
        self.summarize_detailed(title, description)
            .map(|selection| selection.text)
    }

    /// Like [`Summarizer::summarize`], also reporting which strategy was used
    pub fn summarize_detailed(
        &self,
        title: Option<&str>,
        description: Option<&str>,
    ) -> Option<Selection> {
        let full_text = combine(title, description);
        if full_text.is_empty() {
            return None;
        }

        Some(self.summarize_text(&full_text))
    }

    /// Normalize and select from already-combined text
    pub fn summarize_text(&self, text: &str) -> Selection {
        let start = Instant::now();

        let cleaned = normalize(text);
        trace_time!(start, "normalize", input_len = text.len(), cleaned_len = cleaned.len());

        let selection = select_detailed(&cleaned, &self.config);
        trace_time!(start, "summarize", words = selection.word_count());

        selection
    }

    /// Summarize an [`Article`]
    pub fn summarize_article(&self, article: &Article) -> Option<String> {
        self.summarize(article.title.as_deref(), article.description.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_combine_skips_missing_parts() {
        assert_eq!(combine(Some("Title"), Some("Body text")), "Title. Body text");
        assert_eq!(combine(Some("Title"), None), "Title");
        assert_eq!(combine(None, Some("Body")), "Body");
        assert_eq!(combine(Some(""), Some("Body")), "Body");
        assert_eq!(combine(None, None), "");
    }

    #[test]
    fn test_absent_input_yields_none() {
        assert_eq!(summarize_article(None, None), None);
        assert_eq!(summarize_article(Some(""), Some("")), None);
    }

    #[test]
    fn test_short_article_returned_normalized() {
        assert_eq!(
            summarize_article(Some("Reuters - Dam opens"), Some("Water flows (finally) today")),
            Some("Dam opens. Water flows today".to_string())
        );
    }

    #[test]
    fn test_noise_only_input_yields_empty_summary() {
        assert_eq!(
            summarize_article(Some("[photo] (video)"), None),
            Some(String::new())
        );
    }

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = SummarizerConfig {
            target_words: 0,
            low_yield_words: None,
        };
        assert!(Summarizer::new(config).is_err());
    }

    #[test]
    fn test_summarize_detailed_reports_strategy() {
        let summarizer = Summarizer::new(SummarizerConfig::with_target_words(5)).unwrap();
        let selection = summarizer
            .summarize_detailed(Some("One two three four five six seven"), None)
            .unwrap();
        assert_eq!(selection.strategy, Strategy::Truncated);
        assert_eq!(selection.text, "One two three four five...");
    }

    #[test]
    fn test_summarizer_is_shareable_across_threads() {
        let summarizer = std::sync::Arc::new(Summarizer::default());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let summarizer = summarizer.clone();
                std::thread::spawn(move || summarizer.summarize(Some("Hello"), Some("World")))
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), Some("Hello. World".to_string()));
        }
    }
}

//! Article records exchanged with the ingestion and persistence layers

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use super::Summarizer;
use crate::text::word_count;

/// An article as supplied by ingestion. Fields beyond the ones the
/// summarizer reads are carried through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Article {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,

    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub summary: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Article {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            description: Some(description.into()),
            ..Self::default()
        }
    }

    /// Whether the stored summary is absent or empty
    pub fn needs_summary(&self) -> bool {
        self.summary.as_deref().is_none_or(str::is_empty)
    }

    /// Identifier for log output
    pub fn label(&self) -> String {
        match &self.id {
            Some(Value::String(id)) => id.clone(),
            Some(other) => other.to_string(),
            None => "-".to_string(),
        }
    }
}

/// Counts from a batch summarization run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    /// Articles that were summarized
    pub processed: usize,
    /// Articles that received a summary
    pub generated: usize,
    /// Articles skipped because they already had a summary
    pub skipped: usize,
    /// Articles with no text left to summarize
    pub missing: usize,
}

impl Summarizer {
    /// Fill in summaries for articles that lack one, or for every article
    /// when `force` is set.
    pub fn fill_summaries(&self, articles: &mut [Article], force: bool) -> BatchReport {
        let mut report = BatchReport::default();

        for article in articles.iter_mut() {
            if !force && !article.needs_summary() {
                report.skipped += 1;
                continue;
            }

            report.processed += 1;
            // An empty summary is treated the same as none and never stored
            match self
                .summarize_article(article)
                .filter(|summary| !summary.is_empty())
            {
                Some(summary) => {
                    debug!(
                        article = %article.label(),
                        words = word_count(&summary),
                        "summary_generated"
                    );
                    article.summary = Some(summary);
                    report.generated += 1;
                }
                None => {
                    warn!(article = %article.label(), "no summary generated");
                    report.missing += 1;
                }
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_preserves_extra_fields() {
        let json = r#"{"id": 7, "title": "T", "description": null, "url": "https://example.com/a"}"#;
        let article: Article = serde_json::from_str(json).unwrap();
        assert_eq!(article.id, Some(Value::from(7)));
        assert_eq!(article.title.as_deref(), Some("T"));
        assert_eq!(article.description, None);
        assert_eq!(article.extra["url"], "https://example.com/a");

        let round_trip = serde_json::to_value(&article).unwrap();
        assert_eq!(round_trip["url"], "https://example.com/a");
        assert_eq!(round_trip["id"], 7);
    }

    #[test]
    fn test_needs_summary() {
        let mut article = Article::new("Title", "Body");
        assert!(article.needs_summary());
        article.summary = Some(String::new());
        assert!(article.needs_summary());
        article.summary = Some("Done".to_string());
        assert!(!article.needs_summary());
    }

    #[test]
    fn test_label() {
        let mut article = Article::default();
        assert_eq!(article.label(), "-");
        article.id = Some(Value::from("a-1"));
        assert_eq!(article.label(), "a-1");
        article.id = Some(Value::from(12));
        assert_eq!(article.label(), "12");
    }

    #[test]
    fn test_fill_summaries_counts() {
        let mut articles = vec![
            Article::new("Dam opens", "Water flows"),
            Article {
                summary: Some("Existing".to_string()),
                ..Article::new("Kept", "Body")
            },
            Article::default(),
        ];

        let report = Summarizer::default().fill_summaries(&mut articles, false);
        assert_eq!(
            report,
            BatchReport {
                processed: 2,
                generated: 1,
                skipped: 1,
                missing: 1,
            }
        );
        assert_eq!(articles[0].summary.as_deref(), Some("Dam opens. Water flows"));
        assert_eq!(articles[1].summary.as_deref(), Some("Existing"));
        assert_eq!(articles[2].summary, None);
    }

    #[test]
    fn test_fill_summaries_noise_only_article_gets_no_summary() {
        let mut articles = vec![
            Article {
                title: Some("[photo] (video)".to_string()),
                ..Article::default()
            },
            Article {
                title: Some("(updated)".to_string()),
                summary: Some(String::new()),
                ..Article::default()
            },
        ];

        let report = Summarizer::default().fill_summaries(&mut articles, false);
        assert_eq!(
            report,
            BatchReport {
                processed: 2,
                generated: 0,
                skipped: 0,
                missing: 2,
            }
        );
        assert_eq!(articles[0].summary, None);
        assert_eq!(articles[1].summary.as_deref(), Some(""));
    }

    #[test]
    fn test_fill_summaries_force_regenerates() {
        let mut articles = vec![Article {
            summary: Some("Stale".to_string()),
            ..Article::new("Fresh", "Text")
        }];

        let report = Summarizer::default().fill_summaries(&mut articles, true);
        assert_eq!(report.generated, 1);
        assert_eq!(report.skipped, 0);
        assert_eq!(articles[0].summary.as_deref(), Some("Fresh. Text"));
    }
}

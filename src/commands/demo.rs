//! `newsbrief demo` command - summarize a built-in sample article

use crate::cli::{Cli, OutputFormat};
use newsbrief_core::error::Result;
use newsbrief_core::records::{header, quoted};
use newsbrief_core::summarize::combine;
use newsbrief_core::text::word_count;
use newsbrief_core::{Article, Summarizer};

const SAMPLE_TITLE: &str = "Breaking: Major Tech Company Announces Revolutionary AI Breakthrough";

const SAMPLE_DESCRIPTION: &str = "A leading technology company has announced a groundbreaking \
artificial intelligence system that can process natural language with unprecedented accuracy. \
The new system, developed over three years by a team of 200 researchers, promises to \
revolutionize how computers understand and interact with human language. The company's CEO \
stated that this breakthrough represents a significant leap forward in AI capabilities and \
could have applications across multiple industries including healthcare, education, and \
customer service. The announcement comes at a time when AI technology is rapidly advancing \
and becoming more integrated into everyday applications.";

/// The sample article used by the demo
pub fn sample_article() -> Article {
    Article::new(SAMPLE_TITLE, SAMPLE_DESCRIPTION)
}

/// Execute the demo command
pub fn execute(cli: &Cli, summarizer: &Summarizer) -> Result<()> {
    let article = sample_article();
    let original = combine(article.title.as_deref(), article.description.as_deref());
    let summary = summarizer.summarize_article(&article).unwrap_or_default();

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "original": original,
                "original_words": word_count(&original),
                "summary": summary,
                "summary_words": word_count(&summary),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("Original text:");
            println!("{}", original);
            println!();
            println!("Word count: {}", word_count(&original));
            println!();
            println!("Generated summary:");
            println!("{}", summary);
            println!();
            println!("Summary word count: {}", word_count(&summary));
        }
        OutputFormat::Records => {
            println!("{}", header("demo"));
            println!("O words={} {}", word_count(&original), quoted(&original));
            println!("S words={} {}", word_count(&summary), quoted(&summary));
        }
    }

    Ok(())
}

//! `newsbrief summarize` command - summarize one article
//!
//! Example usage:
//! - `newsbrief summarize --title "Dam opens" --description "..."`
//! - `curl -s $FEED_ITEM | jq -r .description | newsbrief summarize`

use std::time::Instant;

use tracing::{debug, warn};

use crate::cli::{Cli, OutputFormat};
use crate::commands::input::read_stdin;
use newsbrief_core::error::Result;
use newsbrief_core::records::{header, quoted};
use newsbrief_core::summarize::combine;
use newsbrief_core::text::word_count;
use newsbrief_core::Summarizer;

/// Execute the summarize command
pub fn execute(
    cli: &Cli,
    summarizer: &Summarizer,
    title: Option<&str>,
    description: Option<&str>,
) -> Result<()> {
    let start = Instant::now();

    // With neither part given, the description comes from stdin
    let stdin_description;
    let description = if title.is_none() && description.is_none() {
        stdin_description = read_stdin()?;
        debug!(content_len = stdin_description.len(), "read_stdin");
        Some(stdin_description.trim_end())
    } else {
        description
    };

    let original_words = word_count(&combine(title, description));
    let selection = summarizer.summarize_detailed(title, description);

    if selection.is_none() {
        warn!("no summary generated: title and description are empty");
    }

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "summary": selection.as_ref().map(|s| s.text.as_str()),
                "words": selection.as_ref().map_or(0, |s| s.word_count()),
                "original_words": original_words,
                "target_words": summarizer.config().target_words,
                "strategy": selection.as_ref().map(|s| s.strategy),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            if let Some(selection) = &selection {
                println!("{}", selection.text);
            }
        }
        OutputFormat::Records => {
            println!("{}", header("summarize"));
            if let Some(selection) = &selection {
                println!(
                    "S words={} strategy={} {}",
                    selection.word_count(),
                    selection.strategy,
                    quoted(&selection.text)
                );
            }
        }
    }

    debug!(elapsed = ?start.elapsed(), "execute_command");
    Ok(())
}

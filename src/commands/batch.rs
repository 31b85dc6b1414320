//! `newsbrief batch` command - fill in missing summaries
//!
//! Reads a JSON array of articles (`id`, `title`, `description`, `summary`
//! plus any other fields, which pass through unchanged). Articles whose
//! summary is absent or empty get one; `--force` regenerates all of them.
//!
//! Example usage:
//! - `newsbrief batch articles.json --format json > summarized.json`
//! - `psql -tA -c "..." | newsbrief batch --format records`

use std::path::Path;
use std::time::Instant;

use tracing::{debug, info};

use crate::cli::{Cli, OutputFormat};
use crate::commands::input::read_articles;
use newsbrief_core::error::Result;
use newsbrief_core::records::{header, quoted, single_line};
use newsbrief_core::text::word_count;
use newsbrief_core::Summarizer;

/// Execute the batch command
pub fn execute(cli: &Cli, summarizer: &Summarizer, file: Option<&Path>, force: bool) -> Result<()> {
    let start = Instant::now();

    let (mut articles, source_name) = read_articles(file)?;
    info!(source = %source_name, articles = articles.len(), force, "batch_start");

    let report = summarizer.fill_summaries(&mut articles, force);
    debug!(elapsed = ?start.elapsed(), "fill_summaries");

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&articles)?);
        }
        OutputFormat::Human => {
            for article in &articles {
                println!(
                    "{}\t{}",
                    single_line(&article.label()),
                    single_line(article.summary.as_deref().unwrap_or(""))
                );
            }
        }
        OutputFormat::Records => {
            println!("{}", header("batch"));
            for article in &articles {
                let summary = article.summary.as_deref().unwrap_or("");
                println!(
                    "A id={} words={} {}",
                    quoted(&article.label()),
                    word_count(summary),
                    quoted(summary)
                );
            }
        }
    }

    if !cli.quiet {
        eprintln!(
            "Processed: {}, generated: {}, skipped: {}, without summary: {}",
            report.processed, report.generated, report.skipped, report.missing
        );
    }

    debug!(elapsed = ?start.elapsed(), "execute_command");
    Ok(())
}

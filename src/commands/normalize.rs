//! `newsbrief normalize` command - show text after noise removal

use crate::cli::{Cli, OutputFormat};
use crate::commands::input::text_or_stdin;
use newsbrief_core::error::Result;
use newsbrief_core::records::{header, quoted};
use newsbrief_core::summarize::normalize;
use newsbrief_core::text::word_count;

/// Execute the normalize command
pub fn execute(cli: &Cli, text: Option<&str>) -> Result<()> {
    let raw = text_or_stdin(text)?;
    let cleaned = normalize(&raw);

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "text": cleaned,
                "words": word_count(&cleaned),
                "original_words": word_count(&raw),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            println!("{}", cleaned);
        }
        OutputFormat::Records => {
            println!("{}", header("normalize"));
            println!("N words={} {}", word_count(&cleaned), quoted(&cleaned));
        }
    }

    Ok(())
}

//! `newsbrief score` command - show how each sentence is scored
//!
//! Text is normalized first, exactly as `summarize` would see it. Sentences
//! are listed in original order with their 0-based index.

use crate::cli::{Cli, OutputFormat};
use crate::commands::input::text_or_stdin;
use newsbrief_core::error::Result;
use newsbrief_core::records::{header, quoted};
use newsbrief_core::summarize::{normalize, score_sentences};

/// Execute the score command
pub fn execute(cli: &Cli, text: Option<&str>) -> Result<()> {
    let raw = text_or_stdin(text)?;
    let cleaned = normalize(&raw);
    let scored = score_sentences(&cleaned);

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&scored)?);
        }
        OutputFormat::Human => {
            if scored.is_empty() && !cli.quiet {
                eprintln!("No sentences found");
            }
            for sentence in &scored {
                println!(
                    "{:>3}  score={:<3} words={:<3} {}",
                    sentence.index, sentence.score, sentence.word_count, sentence.text
                );
            }
        }
        OutputFormat::Records => {
            println!("{}", header("score"));
            for sentence in &scored {
                println!(
                    "T index={} score={} words={} {}",
                    sentence.index,
                    sentence.score,
                    sentence.word_count,
                    quoted(sentence.text)
                );
            }
        }
    }

    Ok(())
}

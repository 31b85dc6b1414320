//! Command dispatch logic for newsbrief
use std::time::Instant;

use tracing::debug;

use crate::cli::{Cli, Commands};
use crate::commands;
use newsbrief_core::config::SummarizerConfig;
use newsbrief_core::error::Result;
use newsbrief_core::Summarizer;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    match &cli.command {
        None => handle_no_command(),

        Some(Commands::Summarize { title, description }) => {
            let summarizer = build_summarizer(cli)?;
            debug!(elapsed = ?start.elapsed(), "load_config");
            commands::summarize::execute(
                cli,
                &summarizer,
                title.as_deref(),
                description.as_deref(),
            )
        }

        Some(Commands::Normalize { text }) => commands::normalize::execute(cli, text.as_deref()),

        Some(Commands::Score { text }) => commands::score::execute(cli, text.as_deref()),

        Some(Commands::Batch { file, force }) => {
            let summarizer = build_summarizer(cli)?;
            debug!(elapsed = ?start.elapsed(), "load_config");
            commands::batch::execute(cli, &summarizer, file.as_deref(), *force)
        }

        Some(Commands::Demo) => {
            let summarizer = build_summarizer(cli)?;
            commands::demo::execute(cli, &summarizer)
        }
    }
}

/// Resolve configuration from the config file and CLI overrides
fn build_summarizer(cli: &Cli) -> Result<Summarizer> {
    let mut config = match &cli.config {
        Some(path) => SummarizerConfig::load_from(path)?,
        None => SummarizerConfig::load()?,
    };

    if let Some(target_words) = cli.target_words {
        config.target_words = target_words as usize;
        // An explicit budget re-derives the threshold unless it still fits
        if config
            .low_yield_words
            .is_some_and(|low_yield| low_yield > config.target_words)
        {
            config.low_yield_words = None;
        }
    }

    Summarizer::new(config)
}

fn handle_no_command() -> Result<()> {
    println!("newsbrief {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Extractive summaries for news articles.");
    println!();
    println!("Run `newsbrief --help` for usage information.");
    Ok(())
}

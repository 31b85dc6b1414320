//! CLI argument parsing for newsbrief
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json,
//! --config, --target-words

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use newsbrief_core::format::OutputFormat;

/// Newsbrief - extractive summaries for news articles
#[derive(Parser, Debug)]
#[command(name = "newsbrief")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json, records)
    #[arg(long, global = true, default_value = "human")]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log filter (e.g. `debug` or `newsbrief_core=trace`)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Emit logs as JSON on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Path to a config.toml (defaults to the user config directory)
    #[arg(long, global = true, env = "NEWSBRIEF_CONFIG")]
    pub config: Option<PathBuf>,

    /// Word budget for summaries, overriding the config file
    #[arg(long, global = true, value_parser = clap::value_parser!(u32).range(1..))]
    pub target_words: Option<u32>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Summarize an article title and description
    Summarize {
        /// Article title
        #[arg(long, short = 't')]
        title: Option<String>,

        /// Article description (read from stdin when no title or description is given)
        #[arg(long, short = 'd')]
        description: Option<String>,
    },

    /// Show text after metadata noise removal
    Normalize {
        /// Text to normalize (read from stdin when omitted)
        text: Option<String>,
    },

    /// Show per-sentence importance scores
    Score {
        /// Text to score (read from stdin when omitted)
        text: Option<String>,
    },

    /// Fill in missing summaries for a JSON array of articles
    Batch {
        /// JSON file with an array of articles (stdin when omitted or `-`)
        file: Option<PathBuf>,

        /// Regenerate summaries that already exist
        #[arg(long)]
        force: bool,
    },

    /// Summarize a built-in sample article
    Demo,
}

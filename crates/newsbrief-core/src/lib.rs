//! Newsbrief Core Library
//!
//! Extractive summarization engine for news article text. Raw title and
//! description text goes in, a word-budgeted summary made of the original
//! sentences comes out.

pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod records;
pub mod summarize;
pub mod text;

pub use summarize::{summarize_article, Article, Summarizer};

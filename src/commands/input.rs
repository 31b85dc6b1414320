//! Reading command input from arguments, files and stdin

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use newsbrief_core::error::{BriefError, Result};
use newsbrief_core::Article;

/// Read all of stdin
pub fn read_stdin() -> Result<String> {
    let mut content = String::new();
    io::stdin().read_to_string(&mut content)?;
    Ok(content)
}

/// Use the positional text argument, falling back to stdin
pub fn text_or_stdin(text: Option<&str>) -> Result<String> {
    match text {
        Some(text) => Ok(text.to_string()),
        None => read_stdin(),
    }
}

/// Load a JSON array of articles from a file, or stdin for `None` / `-`
pub fn read_articles(file: Option<&Path>) -> Result<(Vec<Article>, String)> {
    let (content, source_name) = match file {
        Some(path) if path != Path::new("-") => {
            if !path.exists() {
                return Err(BriefError::not_found("input file", path.display()));
            }
            (fs::read_to_string(path)?, path.display().to_string())
        }
        _ => (read_stdin()?, "stdin".to_string()),
    };

    let articles: Vec<Article> = serde_json::from_str(&content)
        .map_err(|e| BriefError::invalid_input(&source_name, e))?;

    Ok((articles, source_name))
}

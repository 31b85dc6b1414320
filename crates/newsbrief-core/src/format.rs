//! Output format handling for newsbrief
//!
//! Supports three output formats:
//! - human: Readable, concise output for terminal use
//! - json: Stable, machine-readable JSON
//! - records: Line-oriented format for piping into other tools

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BriefError;

/// Output format for newsbrief commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output for machine consumption
    Json,
    /// Records output, one line per item
    Records,
}

impl FromStr for OutputFormat {
    type Err = BriefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "records" => Ok(OutputFormat::Records),
            other => Err(BriefError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Records => write!(f, "records"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_formats() {
        assert_eq!("human".parse::<OutputFormat>().unwrap(), OutputFormat::Human);
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("records".parse::<OutputFormat>().unwrap(), OutputFormat::Records);
    }

    #[test]
    fn test_unknown_format() {
        let err = "xml".parse::<OutputFormat>().unwrap_err();
        assert!(matches!(err, BriefError::UnknownFormat(ref f) if f == "xml"));
    }

    #[test]
    fn test_display_round_trips() {
        for format in [OutputFormat::Human, OutputFormat::Json, OutputFormat::Records] {
            assert_eq!(format.to_string().parse::<OutputFormat>().unwrap(), format);
        }
    }
}

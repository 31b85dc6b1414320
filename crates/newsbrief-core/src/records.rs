//! Utilities for records output format
//!
//! Every records stream starts with a header line
//! `H newsbrief=1 records=1 mode=<command>` followed by one line per item.
//! Free text is always double-quoted with embedded quotes and line breaks
//! escaped, so every record stays on one line.

/// Records format version
pub const RECORDS_VERSION: u32 = 1;

/// Escape double quotes in a string for records format.
/// Replaces `"` with `\"` to allow safe embedding in quoted fields.
pub fn escape_quotes(s: &str) -> String {
    s.replace('\"', r#"\""#)
}

/// Escape line breaks and tabs as `\n`, `\r` and `\t`
pub fn escape_control(s: &str) -> String {
    s.replace('\n', r"\n")
        .replace('\r', r"\r")
        .replace('\t', r"\t")
}

/// Wrap free text as a quoted records field
pub fn quoted(s: &str) -> String {
    format!("\"{}\"", escape_control(&escape_quotes(s)))
}

/// Collapse all whitespace runs to single spaces, for line-oriented output
pub fn single_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Header line for a records stream
pub fn header(mode: &str) -> String {
    format!(
        "H newsbrief={} records={} mode={}",
        RECORDS_VERSION, RECORDS_VERSION, mode
    )
}

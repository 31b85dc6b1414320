//! Metadata noise removal for raw article text

use std::sync::OnceLock;

use regex::Regex;

/// Ordered rewrite rules. Later rules assume the earlier cleanup has run.
struct Rules {
    brackets: Regex,
    parentheticals: Regex,
    whitespace: Regex,
    leading_byline: Regex,
    trailing_byline: Regex,
    clock_time: Regex,
    us_date: Regex,
    iso_date: Regex,
    url: Regex,
    period_run: Regex,
    comma_run: Regex,
}

static RULES: OnceLock<Rules> = OnceLock::new();

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("invalid normalization regex pattern")
}

fn rules() -> &'static Rules {
    RULES.get_or_init(|| Rules {
        brackets: compile(r"\[.*?\]"),
        parentheticals: compile(r"\(.*?\)"),
        whitespace: compile(r"\s+"),
        leading_byline: compile(r"(?i)^(Reuters|AP|AFP|CNN|BBC|NPR|Associated Press)\s*[-–]\s*"),
        trailing_byline: compile(r"(?i)\s*[-–]\s*(Reuters|AP|AFP|CNN|BBC|NPR|Associated Press)$"),
        clock_time: compile(r"(?i)[0-9]{1,2}:[0-9]{2}\s*(AM|PM)"),
        us_date: compile(r"[0-9]{1,2}/[0-9]{1,2}/[0-9]{2,4}"),
        iso_date: compile(r"[0-9]{4}-[0-9]{2}-[0-9]{2}"),
        url: compile(r"https?://\S+"),
        period_run: compile(r"\.{2,}"),
        comma_run: compile(r",{2,}"),
    })
}

/// Strip editorial asides, wire bylines, timestamps, URLs and punctuation runs.
///
/// Empty input yields an empty string. Whitespace is collapsed before the
/// timestamp/URL passes, so removing those tokens can leave doubled spaces
/// behind; word counting splits on any whitespace and is unaffected.
pub fn normalize(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let rules = rules();

    let text = rules.brackets.replace_all(text, "");
    let text = rules.parentheticals.replace_all(&text, "");
    let text = rules.whitespace.replace_all(&text, " ");
    let text = text.trim();

    let text = rules.leading_byline.replace(text, "");
    let text = rules.trailing_byline.replace(&text, "");

    let text = rules.clock_time.replace_all(&text, "");
    let text = rules.us_date.replace_all(&text, "");
    let text = rules.iso_date.replace_all(&text, "");

    let text = rules.url.replace_all(&text, "");

    let text = rules.period_run.replace_all(&text, ".");
    let text = rules.comma_run.replace_all(&text, ",");

    text.trim().to_string()
}

//! End-to-end tests for the summarization pipeline

use newsbrief_core::config::SummarizerConfig;
use newsbrief_core::summarize::{normalize, score_sentence, segment, Strategy};
use newsbrief_core::text::word_count;
use newsbrief_core::{summarize_article, Summarizer};

fn filler(word: &str, count: usize) -> String {
    vec![word; count].join(" ")
}

#[test]
fn test_null_and_empty_inputs() {
    assert_eq!(summarize_article(None, None), None);
    assert_eq!(summarize_article(Some(""), Some("")), None);
    assert_eq!(summarize_article(Some(""), None), None);
}

#[test]
fn test_short_text_passes_through_normalized() {
    let description = "Officials met on 2024-01-05 to review the budget (again).";
    let summary = summarize_article(Some("Budget review"), Some(description)).unwrap();
    assert_eq!(summary, "Budget review. Officials met on  to review the budget .");
}

#[test]
fn test_fallback_truncation_of_run_on_text() {
    let words: Vec<String> = (0..200).map(|i| format!("token{}", i)).collect();
    let summary = summarize_article(None, Some(&words.join(" "))).unwrap();
    assert_eq!(summary, format!("{}...", words[..60].join(" ")));
}

#[test]
fn test_two_long_sentences_are_truncated_not_scored() {
    let plain = filler("river", 40);
    let keyword_heavy = filler("officials announced", 20);
    let summary = summarize_article(Some(&plain), Some(&keyword_heavy)).unwrap();

    // Prefix of the text, not the keyword-heavy sentence first
    assert!(summary.starts_with("river river"));
    assert!(summary.ends_with("..."));
    assert_eq!(word_count(&summary), 60);
}

#[test]
fn test_budget_never_exceeded() {
    let cases = [
        (
            "Council approves transit plan",
            format!(
                "{}. {}. {}. {}.",
                filler("alpha", 12),
                filler("beta", 30),
                filler("gamma", 9),
                filler("delta", 14)
            ),
        ),
        (
            "Storm",
            format!("{}. Short. Tiny. Small bit.", filler("wind", 70)),
        ),
        (
            "Officials said the latest update was confirmed",
            format!(
                "{}. {}. {}.",
                filler("harbor", 26),
                filler("the minister denied", 5),
                filler("quay", 40)
            ),
        ),
    ];

    for (title, description) in &cases {
        let summary = summarize_article(Some(title), Some(description)).unwrap();
        assert!(
            word_count(&summary) <= 60,
            "{} words: {}",
            word_count(&summary),
            summary
        );
    }
}

#[test]
fn test_low_yield_truncated_lede_is_exactly_budget_plus_ellipsis() {
    let title = filler("lede", 70);
    let summary =
        summarize_article(Some(&title), Some("Short one. Another short one")).unwrap();
    assert_eq!(summary, format!("{}...", filler("lede", 60)));
}

#[test]
fn test_keyword_monotonicity() {
    let plain = "The team finished the review of the new plan quickly";
    let loaded = "The officials finished the investigation of the company plan quickly";
    assert_eq!(word_count(plain), word_count(loaded));
    assert!(score_sentence(loaded, 2, 5) > score_sentence(plain, 2, 5));
}

#[test]
fn test_noise_removal_invariants() {
    let out = normalize("Breaking news [update] (per AP) at 3:45 PM on 5/4/2024 see https://x.co");
    for fragment in ["[", "(", "3:45 PM", "5/4/2024", "https://x.co"] {
        assert!(!out.contains(fragment), "{:?} still in {:?}", fragment, out);
    }
}

#[test]
fn test_segment_never_yields_blank_sentences() {
    let text = normalize("... !! Hello there?! ... General Kenobi. ?");
    assert!(segment(&text).all(|s| !s.trim().is_empty()));
    assert_eq!(segment(&text).count(), 2);
}

#[test]
fn test_pathological_inputs_do_not_panic() {
    let summarizer = Summarizer::default();
    let long_punctuation = "!?.".repeat(500);
    let inputs = [
        "....!!!???",
        "[[[[]]]] (((())))",
        "— – - — –",
        long_punctuation.as_str(),
        "https://a.example https://b.example",
    ];
    for input in inputs {
        let _ = summarizer.summarize(Some(input), Some(input));
    }
}

#[test]
fn test_configured_summarizer_uses_its_budget() {
    let summarizer = Summarizer::new(SummarizerConfig::with_target_words(20)).unwrap();
    let selection = summarizer
        .summarize_detailed(
            Some("The government announced new rail funding on Monday"),
            Some(&format!(
                "{}. {}. {}.",
                filler("station", 12),
                filler("platform", 12),
                filler("track", 6)
            )),
        )
        .unwrap();

    assert!(selection.word_count() <= 20);
    assert_eq!(selection.strategy, Strategy::Scored);
    assert!(selection
        .text
        .starts_with("The government announced new rail funding on Monday"));
}

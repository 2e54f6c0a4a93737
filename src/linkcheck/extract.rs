use regex::Regex;
use std::sync::LazyLock;

// A match runs from the scheme through non-whitespace, non-quote,
// non-angle-bracket characters; the final character class refuses sentence
// punctuation so "http://example.com." keeps the URL but drops the period.
// Punctuation inside the URL (query strings, paths) survives because only
// the last character is constrained.
static URL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"https?://[^\s"'<>]*[^\s"'<>.,);!?]"#).expect("Failed to compile URL regex")
});

/// Scan free text for embedded HTTP(S) URLs.
///
/// This is deliberately a cheap pattern scan, not a parser: candidates found
/// here are handed to the classifier, which performs the authoritative parse.
/// Matches are returned in source order, one entry per occurrence.
pub fn extract_urls(text: &str) -> Vec<String> {
    URL_PATTERN
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

use crate::linkcheck::{LinkPolicy, Reason, UrlClassifier, check_text, extract_urls};

// --- extraction ---

#[test]
fn test_no_urls_in_plain_text() {
    assert!(extract_urls("Hello world, no links here").is_empty());
    assert!(extract_urls("").is_empty());
    assert!(extract_urls("Go to www.example.com for details").is_empty());
}

#[test]
fn test_extracts_single_urls() {
    assert_eq!(
        extract_urls("Check out http://example.com for more"),
        ["http://example.com"]
    );
    assert_eq!(
        extract_urls("Visit https://secure.example.com/page"),
        ["https://secure.example.com/page"]
    );
}

#[test]
fn test_extracts_multiple_urls_in_order() {
    assert_eq!(
        extract_urls("See http://one.com and https://two.com/path for info"),
        ["http://one.com", "https://two.com/path"]
    );
    assert_eq!(
        extract_urls("https://start.com is great and so is https://end.com"),
        ["https://start.com", "https://end.com"]
    );
}

#[test]
fn test_query_and_fragment_survive() {
    assert_eq!(
        extract_urls("Link: https://example.com/search?q=test&lang=da#results"),
        ["https://example.com/search?q=test&lang=da#results"]
    );
}

#[test]
fn test_extracts_from_markup() {
    assert_eq!(
        extract_urls(r#"<a href="https://blog.example.com/post">Read more</a> or http://other.com"#),
        ["https://blog.example.com/post", "http://other.com"]
    );
}

#[test]
fn test_trailing_sentence_punctuation_is_stripped() {
    assert_eq!(extract_urls("Check http://example.com."), ["http://example.com"]);
    assert_eq!(
        extract_urls("(http://example.com/page)"),
        ["http://example.com/page"]
    );
    assert_eq!(
        extract_urls("See http://example.com/page, and also http://other.com"),
        ["http://example.com/page", "http://other.com"]
    );
}

#[test]
fn test_repeated_urls_are_not_deduplicated() {
    assert_eq!(
        extract_urls("http://twice.com then http://twice.com"),
        ["http://twice.com", "http://twice.com"]
    );
}

#[test]
fn test_idn_text_extracts_without_panicking() {
    let urls = extract_urls("Visit http://københavn.dk or https://æøå.com for info");
    assert_eq!(urls.len(), 2);
}

// --- classification ---

#[test]
fn test_blacklisted_hostnames_are_blocked() {
    let classifier = UrlClassifier::default();
    for url in [
        "https://malware.example.com/path",
        "https://phishing.example.com",
        "http://bad-reputation.com/page",
        "http://virus.exe/malware",
        "https://www.google.com/search",
    ] {
        let result = classifier.classify(url);
        assert!(!result.safe, "{url} should be unsafe");
        assert_eq!(result.reason, Reason::Blacklisted, "{url}");
    }
}

#[test]
fn test_blacklist_matches_terms_anywhere_in_url() {
    let classifier = UrlClassifier::default();
    let result = classifier.classify("https://example.com/downloads/virus.exe");
    assert_eq!(result.reason, Reason::Blacklisted);

    let result = classifier.classify("https://safe.com/malware.example.com");
    assert_eq!(result.reason, Reason::Blacklisted);
}

#[test]
fn test_blacklist_is_case_insensitive() {
    let classifier = UrlClassifier::default();
    let upper = classifier.classify("http://VIRUS.EXE/payload");
    let lower = classifier.classify("http://virus.exe/payload");
    assert_eq!(upper.reason, Reason::Blacklisted);
    assert_eq!(upper.reason, lower.reason);
}

#[test]
fn test_keywords_flag_urls_as_malicious() {
    let classifier = UrlClassifier::default();
    assert_eq!(
        classifier.classify("https://example.com/unsafe-page").reason,
        Reason::Malicious
    );
    assert_eq!(
        classifier.classify("https://example.com/risky-download").reason,
        Reason::Malicious
    );
    // case-insensitive
    assert_eq!(
        classifier.classify("https://example.com/UNSAFE").reason,
        Reason::Malicious
    );
}

#[test]
fn test_blacklist_takes_precedence_over_keywords() {
    let policy = LinkPolicy::new(["virus.exe"], ["unsafe"]);
    let classifier = UrlClassifier::new(policy);
    let result = classifier.classify("http://virus.exe/unsafe");
    assert_eq!(result.reason, Reason::Blacklisted);
}

#[test]
fn test_clean_urls_are_safe() {
    let classifier = UrlClassifier::default();
    for url in ["https://safe-site.com", "https://example.org/page"] {
        let result = classifier.classify(url);
        assert!(result.safe);
        assert_eq!(result.reason, Reason::Safe);
        assert_eq!(result.url, url);
    }
}

#[test]
fn test_malformed_inputs_never_panic() {
    let classifier = UrlClassifier::default();
    for url in ["not-a-valid-url", "", "://missing-scheme", "mailto:x@y.test"] {
        let result = classifier.classify(url);
        assert!(!result.safe, "{url:?} should be unsafe");
        assert_eq!(result.reason, Reason::Malformed, "{url:?}");
        assert_eq!(result.url, url);
    }
}

#[test]
fn test_classification_is_deterministic() {
    let classifier = UrlClassifier::default();
    let first = classifier.classify("https://example.org/page");
    let second = classifier.classify("https://example.org/page");
    assert_eq!(first, second);
}

#[test]
fn test_original_casing_is_preserved_in_result() {
    let classifier = UrlClassifier::default();
    let url = "https://MALWARE.EXAMPLE.COM/Some/Path?q=1";
    assert_eq!(classifier.classify(url).url, url);
}

#[test]
fn test_classify_all_preserves_order_and_length() {
    let classifier = UrlClassifier::default();
    let results = classifier.classify_all([
        "https://safe-site.com",
        "https://malware.example.com",
        "not-a-url",
    ]);

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].reason, Reason::Safe);
    assert_eq!(results[1].reason, Reason::Blacklisted);
    assert_eq!(results[2].reason, Reason::Malformed);

    assert!(classifier.classify_all(Vec::<String>::new()).is_empty());
}

#[test]
fn test_idn_urls_classify_without_panicking() {
    let classifier = UrlClassifier::default();
    for url in ["http://københavn.dk", "https://æøå.com"] {
        let result = classifier.classify(url);
        assert_eq!(result.url, url);
        assert_eq!(result.safe, result.reason == Reason::Safe);
    }
}

// --- pipeline ---

#[test]
fn test_check_text_round_trip() {
    let classifier = UrlClassifier::default();
    let report = check_text(
        &classifier,
        "Check http://example.com. and http://virus.exe/y",
    );

    let results = report.results();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].url, "http://example.com");
    assert_eq!(results[0].reason, Reason::Safe);
    assert_eq!(results[1].url, "http://virus.exe/y");
    assert_eq!(results[1].reason, Reason::Blacklisted);

    assert!(!report.all_safe());
    assert_eq!(report.unsafe_urls(), ["http://virus.exe/y"]);
}

#[test]
fn test_check_text_without_urls_is_all_safe() {
    let classifier = UrlClassifier::default();
    let report = check_text(&classifier, "just words, nothing else");
    assert!(report.all_safe());
    assert!(report.results().is_empty());
}

#[cfg(feature = "fuzz")]
mod properties {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn extraction_never_panics_and_results_start_with_scheme(text in ".*") {
            for url in extract_urls(&text) {
                prop_assert!(url.starts_with("http://") || url.starts_with("https://"));
            }
        }

        #[test]
        fn every_classification_is_well_formed(url in ".*") {
            let classifier = UrlClassifier::default();
            let result = classifier.classify(&url);
            prop_assert_eq!(result.safe, result.reason == Reason::Safe);
            prop_assert_eq!(result.url, url);
        }

        #[test]
        fn text_without_scheme_extracts_nothing(text in "[^:]*") {
            // no colon means no "http://" prefix anywhere
            prop_assert!(extract_urls(&text).is_empty());
        }
    }
}

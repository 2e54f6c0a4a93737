#![no_main]

use libfuzzer_sys::fuzz_target;

use quill::linkcheck::{Reason, UrlClassifier, extract_urls};

fuzz_target!(|data: &[u8]| {
    // Convert raw bytes to string, handling invalid UTF-8 gracefully
    let text = String::from_utf8_lossy(data).to_string();

    // Extraction and classification should never panic regardless of input,
    // and every result must be internally consistent.
    let urls = extract_urls(&text);
    let classifier = UrlClassifier::default();
    for result in classifier.classify_all(&urls) {
        assert_eq!(result.safe, result.reason == Reason::Safe);
    }
});

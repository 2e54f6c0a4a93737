use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Illustrative deny-list. Entries are matched against the parsed hostname
/// and as substrings of the whole URL, so a blacklisted domain buried in a
/// path segment is still caught.
static DEFAULT_BLACKLIST: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "malware.example.com",
        "phishing.example.com",
        "badsite.test",
        "danger.example.org",
        "evil.example.net",
        "bad-reputation.com",
        "virus.exe",
        "www.google.com",
    ]
    .into_iter()
    .collect()
});

static DEFAULT_KEYWORDS: &[&str] = &["unsafe", "risky"];

/// Immutable link-safety configuration: a deny-list of hostnames/substrings
/// and a list of keywords that mark a URL as likely malicious.
///
/// All terms are stored lowercase; matching is case-insensitive by
/// construction. A policy is built once and injected into the classifier,
/// so tests can swap lists without shared state.
#[derive(Debug, Clone)]
pub struct LinkPolicy {
    blacklist: HashSet<String>,
    keywords: Vec<String>,
}

impl LinkPolicy {
    pub fn new<B, K>(blacklist: B, keywords: K) -> Self
    where
        B: IntoIterator,
        B::Item: AsRef<str>,
        K: IntoIterator,
        K::Item: AsRef<str>,
    {
        Self {
            blacklist: blacklist
                .into_iter()
                .map(|t| t.as_ref().to_lowercase())
                .collect(),
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Deny-list terms, lowercase.
    pub fn blacklist(&self) -> &HashSet<String> {
        &self.blacklist
    }

    /// Malicious keywords, lowercase.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Exact hostname membership. `host` must already be lowercase, which
    /// `url::Url::host_str` guarantees.
    pub fn contains_host(&self, host: &str) -> bool {
        self.blacklist.contains(host)
    }
}

impl Default for LinkPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_BLACKLIST.iter(), DEFAULT_KEYWORDS.iter())
    }
}

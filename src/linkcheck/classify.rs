use serde::{Deserialize, Serialize};
use url::Url;
use utoipa::ToSchema;

use crate::linkcheck::policy::LinkPolicy;

/// Why a URL was (or was not) allowed through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Reason {
    Safe,
    Malformed,
    Blacklisted,
    Malicious,
}

/// Verdict for a single URL. `safe` is true exactly when `reason` is
/// [`Reason::Safe`]; the original string is carried through untouched so the
/// caller can correlate results with its input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Classification {
    pub url: String,
    pub safe: bool,
    pub reason: Reason,
}

impl Classification {
    pub fn safe(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            safe: true,
            reason: Reason::Safe,
        }
    }

    pub fn rejected(url: impl Into<String>, reason: Reason) -> Self {
        Self {
            url: url.into(),
            safe: false,
            reason,
        }
    }
}

/// Deterministic URL classifier over an immutable [`LinkPolicy`].
///
/// Classification is a pure function of the URL string and the policy; it
/// performs no I/O and keeps no hidden state, so the classifier is freely
/// shareable across request handlers.
#[derive(Debug, Clone, Default)]
pub struct UrlClassifier {
    policy: LinkPolicy,
}

impl UrlClassifier {
    pub fn new(policy: LinkPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &LinkPolicy {
        &self.policy
    }

    /// Classify one URL. Precedence is strict: parse failure wins over a
    /// blacklist hit, which wins over a keyword hit.
    pub fn classify(&self, url: &str) -> Classification {
        let Some(parsed) = parse_absolute(url) else {
            return Classification::rejected(url, Reason::Malformed);
        };

        if self.is_blacklisted(url, &parsed) {
            return Classification::rejected(url, Reason::Blacklisted);
        }

        if self.contains_malicious_keyword(url) {
            return Classification::rejected(url, Reason::Malicious);
        }

        Classification::safe(url)
    }

    /// Element-wise [`classify`](Self::classify); order matches the input so
    /// results correlate back to extracted candidates.
    pub fn classify_all<I>(&self, urls: I) -> Vec<Classification>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        urls.into_iter()
            .map(|url| self.classify(url.as_ref()))
            .collect()
    }

    fn is_blacklisted(&self, url: &str, parsed: &Url) -> bool {
        let lowercased = url.to_lowercase();
        if self
            .policy
            .blacklist()
            .iter()
            .any(|term| lowercased.contains(term))
        {
            return true;
        }
        // Substring matching runs on the raw string; the hostname check also
        // covers the normalized (e.g. punycoded) form the parser produced.
        parsed
            .host_str()
            .is_some_and(|host| self.policy.contains_host(host))
    }

    fn contains_malicious_keyword(&self, url: &str) -> bool {
        let lowercased = url.to_lowercase();
        self.policy
            .keywords()
            .iter()
            .any(|keyword| lowercased.contains(keyword))
    }
}

/// Absolute URL with a hostname, or nothing. `Url::parse` alone accepts
/// host-less schemes like `mailto:`, which the safety check treats as
/// malformed input rather than a classifiable link.
fn parse_absolute(url: &str) -> Option<Url> {
    let parsed = Url::parse(url).ok()?;
    parsed.host_str()?;
    Some(parsed)
}

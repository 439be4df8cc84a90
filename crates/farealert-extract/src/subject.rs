//! Route hint carried by the alert's subject line.

use std::sync::LazyLock;

use regex::Regex;

static TRACKED_ROUTE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)tracked route:\s*(.*?)\s+to\s+(.*?)\s+flights")
        .expect("valid tracked-route regex")
});

/// Free-text origin and destination named in the subject.
///
/// These are place names ("Burbank, Los Angeles"), not airport codes, and are
/// only used when a card carries no route of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubjectHint {
    pub origin: Option<String>,
    pub destination: Option<String>,
}

/// Extracts the `tracked route: <origin> to <destination> flights` hint.
///
/// Matching is case-insensitive; captured names are trimmed and empty
/// captures become `None`.
#[must_use]
pub fn subject_route_hint(subject: &str) -> SubjectHint {
    let Some(caps) = TRACKED_ROUTE_RE.captures(subject) else {
        return SubjectHint::default();
    };
    let capture = |idx: usize| {
        caps.get(idx)
            .map(|m| m.as_str().trim().to_string())
            .filter(|s| !s.is_empty())
    };
    SubjectHint {
        origin: capture(1),
        destination: capture(2),
    }
}

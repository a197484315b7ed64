//! Identification of external course repositories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Branch assumed when a course declaration does not name one.
pub const DEFAULT_BRANCH: &str = "master";

/// A repository and branch an external course is rendered from.
///
/// Identity is `url` plus `branch`: two references agreeing on both
/// point at the same source. `path` only selects the subdirectory
/// holding compiled output within the checkout and does not take part
/// in identity or trust matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoReference {
    pub url: String,
    pub branch: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl RepoReference {
    pub fn new(url: impl Into<String>, branch: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            branch: branch.into(),
            path: None,
        }
    }

    /// The `url#branch` string that trusted-repo patterns are matched
    /// against.
    pub fn checked_url(&self) -> String {
        format!("{}#{}", self.url, self.branch)
    }
}

impl PartialEq for RepoReference {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url && self.branch == other.branch
    }
}

impl Eq for RepoReference {}

impl Hash for RepoReference {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.url.hash(state);
        self.branch.hash(state);
    }
}

impl fmt::Display for RepoReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.url, self.branch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checked_url_joins_url_and_branch() {
        let repo = RepoReference::new("https://github.com/pyvec/course1", "main");
        assert_eq!(repo.checked_url(), "https://github.com/pyvec/course1#main");
    }

    #[test]
    fn identity_ignores_path() {
        let mut a = RepoReference::new("https://x/y", "main");
        let b = RepoReference::new("https://x/y", "main");
        a.path = Some("compiled".into());
        assert_eq!(a, b);
    }

    #[test]
    fn identity_distinguishes_branches() {
        let a = RepoReference::new("https://x/y", "main");
        let b = RepoReference::new("https://x/y", "2024");
        assert_ne!(a, b);
    }
}

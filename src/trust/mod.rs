//! Admission policy for externally-hosted course repositories.
//!
//! Rendering a course means serving that repository's compiled output,
//! so external sources are gated by an operator-provided allow-list of
//! glob patterns over `url#branch` strings (`NAUCSE_TRUSTED_REPOS`).
//! With no patterns configured, no external repository is trusted.

mod glob;

use crate::repo::RepoReference;
use glob::glob_match;

/// Allow-list deciding which external repositories may be rendered.
///
/// Immutable after construction; the predicate is pure and safe to call
/// from concurrent request handlers without synchronization.
#[derive(Debug, Clone, Default)]
pub struct TrustPolicy {
    patterns: Vec<String>,
}

impl TrustPolicy {
    /// The fail-closed default: no external repository is trusted.
    pub fn deny_all() -> Self {
        Self {
            patterns: Vec::new(),
        }
    }

    pub fn from_patterns<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            patterns: patterns.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse the space-separated `NAUCSE_TRUSTED_REPOS` value.
    ///
    /// An unset or blank value yields [`TrustPolicy::deny_all`]. A
    /// single `*` pattern trusts everything and belongs in isolated or
    /// test environments only.
    pub fn from_env_value(value: Option<&str>) -> Self {
        match value {
            None => Self::deny_all(),
            Some(raw) => {
                let patterns: Vec<String> =
                    raw.split_whitespace().map(str::to_owned).collect();
                if patterns.is_empty() {
                    Self::deny_all()
                } else {
                    Self { patterns }
                }
            }
        }
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Whether content from `repo` may be rendered.
    pub fn is_trusted(&self, repo: &RepoReference) -> bool {
        let checked_url = repo.checked_url();
        self.patterns
            .iter()
            .any(|pattern| glob_match(pattern, &checked_url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repo(url: &str, branch: &str) -> RepoReference {
        RepoReference::new(url, branch)
    }

    #[test]
    fn deny_all_trusts_nothing() {
        let policy = TrustPolicy::deny_all();
        assert!(!policy.is_trusted(&repo("https://github.com/pyvec/course1", "main")));
        assert!(!policy.is_trusted(&repo("file:///local", "master")));
    }

    #[test]
    fn unset_or_blank_env_value_is_deny_all() {
        assert!(TrustPolicy::from_env_value(None).patterns().is_empty());
        assert!(TrustPolicy::from_env_value(Some("")).patterns().is_empty());
        assert!(TrustPolicy::from_env_value(Some("   \t ")).patterns().is_empty());
    }

    #[test]
    fn wildcard_trusts_everything() {
        let policy = TrustPolicy::from_env_value(Some("*"));
        assert!(policy.is_trusted(&repo("https://github.com/org/repo", "main")));
        assert!(policy.is_trusted(&repo("", "")));
    }

    #[test]
    fn env_value_splits_on_any_whitespace() {
        let policy = TrustPolicy::from_env_value(Some(
            "https://github.com/pyvec/*  \n https://github.com/org2/repo#main",
        ));
        assert_eq!(policy.patterns().len(), 2);
        assert!(policy.is_trusted(&repo("https://github.com/pyvec/course1", "main")));
        assert!(policy.is_trusted(&repo("https://github.com/org2/repo", "main")));
        assert!(!policy.is_trusted(&repo("https://github.com/org2/repo", "dev")));
        assert!(!policy.is_trusted(&repo("https://github.com/other/repo", "main")));
    }

    #[test]
    fn match_is_over_the_whole_checked_url() {
        // No partial-string matching: the pattern must cover url#branch
        // end to end.
        let policy = TrustPolicy::from_patterns(["https://github.com/pyvec/naucse"]);
        assert!(!policy.is_trusted(&repo("https://github.com/pyvec/naucse", "main")));

        let policy = TrustPolicy::from_patterns(["https://github.com/pyvec/naucse#main"]);
        assert!(policy.is_trusted(&repo("https://github.com/pyvec/naucse", "main")));
    }

    #[test]
    fn unmatchable_patterns_never_match_and_never_panic() {
        let policy = TrustPolicy::from_patterns(["[oops", "https://??", "x#y#z"]);
        assert!(!policy.is_trusted(&repo("https://github.com/org/repo", "main")));
    }

    #[test]
    fn repeated_stars_still_behave_as_a_wildcard() {
        let policy = TrustPolicy::from_patterns(["***"]);
        assert!(policy.is_trusted(&repo("https://x", "y")));
    }

    #[test]
    fn same_source_under_two_slugs_evaluates_identically() {
        let policy = TrustPolicy::from_patterns(["https://x/y#main"]);
        let a = repo("https://x/y", "main");
        let b = repo("https://x/y", "main");
        assert_eq!(policy.is_trusted(&a), policy.is_trusted(&b));
    }
}

//! Process environment configuration.

use crate::trust::TrustPolicy;
use std::env;
use std::path::PathBuf;

/// Filesystem root containing local content and `courses.yml`.
pub const ROOT_PATH_VAR: &str = "NAUCSE_ROOT_PATH";

/// Space-separated glob patterns over `url#branch`; unset or empty
/// means no external repository is trusted.
pub const TRUSTED_REPOS_VAR: &str = "NAUCSE_TRUSTED_REPOS";

#[derive(Debug, Clone)]
pub struct Settings {
    pub root_path: PathBuf,
    pub trust: TrustPolicy,
}

impl Settings {
    /// Read settings from the process environment.
    ///
    /// The root path defaults to the current directory; the trust
    /// policy defaults to deny-all.
    pub fn from_env() -> Self {
        let root_path = env::var_os(ROOT_PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."));
        let trust = TrustPolicy::from_env_value(env::var(TRUSTED_REPOS_VAR).ok().as_deref());
        Self { root_path, trust }
    }
}

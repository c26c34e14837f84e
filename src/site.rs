//! Publishing settings taken from the environment.

use serde::Serialize;

pub const DEFAULT_REPO_OWNER: &str = "unknown";
pub const DEFAULT_REPO_NAME: &str = "debian-collection-repo";

/// Where the repository is published.
///
/// Read once at startup and passed to rendering, so pages never depend on
/// the environment directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteSettings {
    pub repo_owner: String,
    pub repo_name: String,
    pub pages_url: String,
}

impl SiteSettings {
    pub fn new(repo_owner: &str, repo_name: &str) -> Self {
        Self {
            repo_owner: repo_owner.to_string(),
            repo_name: repo_name.to_string(),
            pages_url: format!("https://{}.github.io/{}", repo_owner, repo_name),
        }
    }

    /// Load from `REPO_OWNER` and `REPO_NAME`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let repo_owner = lookup("REPO_OWNER").unwrap_or_else(|| DEFAULT_REPO_OWNER.to_string());
        let repo_name = lookup("REPO_NAME").unwrap_or_else(|| DEFAULT_REPO_NAME.to_string());
        Self::new(&repo_owner, &repo_name)
    }
}

impl Default for SiteSettings {
    fn default() -> Self {
        Self::new(DEFAULT_REPO_OWNER, DEFAULT_REPO_NAME)
    }
}

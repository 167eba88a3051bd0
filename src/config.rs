use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use crate::error::{AuditError, Result};

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_POLICY_PATH: &str = "policy/license-policy.yml";
pub const DEFAULT_COMPLIANCE_REPORT: &str = "license-compliance-report.md";
pub const LICENSES_REPORT: &str = "licenses.md";
pub const VULNERABILITIES_REPORT: &str = "vulnerabilities.md";

/// What to do when a repository's SBOM cannot be fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchErrorPolicy {
    /// Abort the run with a network error.
    Fail,
    /// Log a warning and treat the repository as having no dependencies.
    Skip,
}

/// Process-wide settings, resolved once at startup.
#[derive(Clone)]
pub struct Settings {
    pub token: String,
    pub api_base_url: String,
    pub policy_path: PathBuf,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("token", &"<redacted>")
            .field("api_base_url", &self.api_base_url)
            .field("policy_path", &self.policy_path)
            .finish()
    }
}

impl Settings {
    /// Resolve settings from the process environment.
    pub fn from_env(policy_path: Option<PathBuf>) -> Result<Self> {
        Self::from_env_with(|key| std::env::var(key).ok(), policy_path)
    }

    /// Resolve settings through `lookup`, so tests can inject variables.
    pub fn from_env_with<F>(lookup: F, policy_path: Option<PathBuf>) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = require(&lookup, "GITHUB_TOKEN")?;

        let api_base_url = lookup("GITHUB_API_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Self {
            token,
            api_base_url,
            policy_path: policy_path.unwrap_or_else(|| PathBuf::from(DEFAULT_POLICY_PATH)),
        })
    }
}

/// Read a required, non-empty variable through `lookup`.
pub fn require<F>(lookup: &F, key: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| AuditError::Config(format!("{} must be set in the environment", key)))
}

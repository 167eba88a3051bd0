use serde::{Deserialize, Serialize};
use crate::dependency::Dependency;

/// Sentinel for a repository without a detectable license.
pub const NO_LICENSE: &str = "NO LICENSE";

/// Repository entry from the list-repositories endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Repository {
    pub name: String,
    pub html_url: String,
    #[serde(default)]
    pub license: Option<RepositoryLicense>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryLicense {
    #[serde(default)]
    pub spdx_id: Option<String>,
}

impl Repository {
    /// Declared SPDX id, or [`NO_LICENSE`].
    pub fn license_id(&self) -> String {
        self.license
            .as_ref()
            .and_then(|license| license.spdx_id.as_deref())
            .filter(|id| !id.is_empty())
            .unwrap_or(NO_LICENSE)
            .to_string()
    }
}

/// A repository together with its SBOM dependencies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositorySummary {
    pub name: String,
    pub url: String,
    pub license_id: String,
    pub dependencies: Vec<Dependency>,
}

impl RepositorySummary {
    pub fn new(repository: &Repository, dependencies: Vec<Dependency>) -> Self {
        Self {
            name: repository.name.clone(),
            url: repository.html_url.clone(),
            license_id: repository.license_id(),
            dependencies,
        }
    }
}

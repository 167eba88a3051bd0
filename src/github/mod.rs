pub mod repos;
pub mod sbom;
pub mod transport;

pub use repos::{Repository, RepositoryLicense, RepositorySummary, NO_LICENSE};
pub use transport::{next_link, ApiResponse, HttpTransport, Transport};

use std::fmt;
use std::str::FromStr;
use crate::config::{FetchErrorPolicy, Settings};
use crate::dependency::Dependency;
use crate::error::{AuditError, Result};

/// Repository identifier in `owner/name` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoSlug {
    pub owner: String,
    pub name: String,
}

impl RepoSlug {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl FromStr for RepoSlug {
    type Err = AuditError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(Self::new(owner, name))
            }
            _ => Err(AuditError::Config(format!(
                "Invalid repository '{}', expected owner/name",
                s
            ))),
        }
    }
}

impl fmt::Display for RepoSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// REST API client for SBOMs and repository listings.
pub struct GitHubClient<T: Transport = HttpTransport> {
    transport: T,
    api_base_url: String,
}

impl GitHubClient<HttpTransport> {
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let transport = HttpTransport::new(&settings.token)?;
        Ok(Self::with_transport(transport, &settings.api_base_url))
    }
}

impl<T: Transport> GitHubClient<T> {
    pub fn with_transport(transport: T, api_base_url: &str) -> Self {
        Self {
            transport,
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn sbom_url(&self, repo: &RepoSlug) -> String {
        format!(
            "{}/repos/{}/{}/dependency-graph/sbom",
            self.api_base_url, repo.owner, repo.name
        )
    }

    pub fn repositories_url(&self, owner: &str) -> String {
        format!("{}/users/{}/repos?type=public&per_page=100", self.api_base_url, owner)
    }

    /// Fetch and normalize the SBOM dependencies of `repo`.
    ///
    /// A non-200 answer is fatal under [`FetchErrorPolicy::Fail`] and yields
    /// an empty list under [`FetchErrorPolicy::Skip`].
    pub fn fetch_dependencies(
        &self,
        repo: &RepoSlug,
        on_error: FetchErrorPolicy,
    ) -> Result<Vec<Dependency>> {
        let url = self.sbom_url(repo);
        let response = self.transport.get(&url)?;

        if response.status != 200 {
            return match on_error {
                FetchErrorPolicy::Fail => Err(AuditError::Network {
                    status: response.status,
                    body: response.body,
                }),
                FetchErrorPolicy::Skip => {
                    tracing::warn!(
                        repository = %repo,
                        status = response.status,
                        "failed to fetch dependencies, treating as none"
                    );
                    Ok(Vec::new())
                }
            };
        }

        let dependencies = sbom::parse_dependencies(&response.body)
            .map_err(|source| AuditError::Decode { url, source })?;

        tracing::debug!(repository = %repo, count = dependencies.len(), "fetched dependencies");
        Ok(dependencies)
    }

    /// List every public repository of `owner`, following `next` links.
    pub fn list_repositories(&self, owner: &str) -> Result<Vec<Repository>> {
        let mut repositories = Vec::new();
        let mut next = Some(self.repositories_url(owner));

        while let Some(url) = next {
            let response = self.transport.get(&url)?;
            if !response.is_success() {
                return Err(AuditError::Network {
                    status: response.status,
                    body: response.body,
                });
            }

            let page: Vec<Repository> = serde_json::from_str(&response.body)
                .map_err(|source| AuditError::Decode { url: url.clone(), source })?;
            tracing::debug!(%url, count = page.len(), "fetched repository page");

            repositories.extend(page);
            next = response.link.as_deref().and_then(next_link);
        }

        Ok(repositories)
    }
}

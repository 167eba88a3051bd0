use serde::{Deserialize, Serialize};
use crate::error::Result;
use crate::github::RepoSlug;

/// A published security advisory affecting a repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Advisory {
    pub id: String,
    pub severity: String,
    pub package: String,
    pub summary: String,
}

/// Vulnerability data available for one repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "advisories", rename_all = "snake_case")]
pub enum AdvisoryStatus {
    /// No data source could answer for this repository.
    Unavailable,
    Known(Vec<Advisory>),
}

/// Supplies vulnerability data for the vulnerabilities report.
pub trait AdvisorySource {
    fn advisories(&self, repo: &RepoSlug) -> Result<AdvisoryStatus>;
}

/// The public REST API exposes no listing of vulnerability alerts, so every
/// repository is reported as unavailable.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableAdvisories;

impl AdvisorySource for UnavailableAdvisories {
    fn advisories(&self, _repo: &RepoSlug) -> Result<AdvisoryStatus> {
        Ok(AdvisoryStatus::Unavailable)
    }
}

/// Vulnerability status of one repository, as rendered in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryAdvisories {
    pub name: String,
    pub status: AdvisoryStatus,
}

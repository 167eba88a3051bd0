use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use crate::advisory::{AdvisorySource, RepositoryAdvisories};
use crate::config::{FetchErrorPolicy, Settings, LICENSES_REPORT, VULNERABILITIES_REPORT};
use crate::dependency::Dependency;
use crate::error::Result;
use crate::github::{GitHubClient, RepoSlug, RepositorySummary, Transport};
use crate::output::{
    render_compliance_report, render_license_inventory, render_vulnerability_report, write_report,
};
use crate::policy::{check_compliance, load_policy, Violation};

/// Encoding of the compliance report file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Markdown,
    Json,
}

#[derive(Debug, Clone)]
pub struct CheckOptions {
    pub repository: RepoSlug,
    pub output: PathBuf,
    pub format: ReportFormat,
    pub on_fetch_error: FetchErrorPolicy,
}

#[derive(Debug, Clone)]
pub struct InventoryOptions {
    pub owner: String,
    pub output_dir: PathBuf,
    pub on_fetch_error: FetchErrorPolicy,
}

/// Result of checking one repository against the license policy.
#[derive(Debug, Serialize, Deserialize)]
pub struct ComplianceReport {
    pub repository: String,
    pub generated_at: DateTime<Utc>,
    pub compliant: bool,
    pub violations: Vec<Violation>,
    pub dependencies: Vec<Dependency>,
}

impl ComplianceReport {
    pub fn exit_code(&self) -> i32 {
        if self.compliant {
            0
        } else {
            1
        }
    }
}

/// Paths written by an inventory run, with what was found.
#[derive(Debug)]
pub struct InventoryOutcome {
    pub repositories: Vec<RepositorySummary>,
    pub licenses_path: PathBuf,
    pub vulnerabilities_path: PathBuf,
}

/// Load the policy, fetch the repository's SBOM, evaluate it and write the
/// compliance report.
pub fn run_compliance_check<T: Transport>(
    settings: &Settings,
    client: &GitHubClient<T>,
    options: &CheckOptions,
) -> Result<ComplianceReport> {
    let policy = load_policy(&settings.policy_path)?;

    tracing::info!(repository = %options.repository, "checking license compliance");
    let dependencies = client.fetch_dependencies(&options.repository, options.on_fetch_error)?;
    let violations = check_compliance(&dependencies, &policy);

    let report = ComplianceReport {
        repository: options.repository.to_string(),
        generated_at: Utc::now(),
        compliant: violations.is_empty(),
        violations,
        dependencies,
    };

    let contents = match options.format {
        ReportFormat::Markdown => render_compliance_report(&report.violations, &report.dependencies),
        ReportFormat::Json => serde_json::to_string_pretty(&report)?,
    };
    write_report(&options.output, &contents)?;

    tracing::info!(
        dependencies = report.dependencies.len(),
        violations = report.violations.len(),
        "compliance check finished"
    );
    Ok(report)
}

/// Enumerate the owner's repositories, collect their dependencies and
/// advisories, and write the licenses and vulnerabilities reports.
pub fn run_inventory<T: Transport, A: AdvisorySource>(
    client: &GitHubClient<T>,
    advisories: &A,
    options: &InventoryOptions,
) -> Result<InventoryOutcome> {
    let repositories = client.list_repositories(&options.owner)?;
    tracing::info!(owner = %options.owner, count = repositories.len(), "enumerated repositories");

    let mut summaries = Vec::with_capacity(repositories.len());
    let mut vulnerabilities = Vec::with_capacity(repositories.len());

    for repository in &repositories {
        let slug = RepoSlug::new(options.owner.as_str(), repository.name.as_str());
        let dependencies = client.fetch_dependencies(&slug, options.on_fetch_error)?;

        summaries.push(RepositorySummary::new(repository, dependencies));
        vulnerabilities.push(RepositoryAdvisories {
            name: repository.name.clone(),
            status: advisories.advisories(&slug)?,
        });
    }

    let licenses_path = options.output_dir.join(LICENSES_REPORT);
    let vulnerabilities_path = options.output_dir.join(VULNERABILITIES_REPORT);
    write_report(&licenses_path, &render_license_inventory(&options.owner, &summaries))?;
    write_report(
        &vulnerabilities_path,
        &render_vulnerability_report(&options.owner, &vulnerabilities),
    )?;

    Ok(InventoryOutcome {
        repositories: summaries,
        licenses_path,
        vulnerabilities_path,
    })
}

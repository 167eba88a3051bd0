use anyhow::{Context, Result};
use std::path::PathBuf;
use crate::cli::OnFetchError;
use repo_license_auditor::advisory::UnavailableAdvisories;
use repo_license_auditor::audit::{run_inventory, InventoryOptions};
use repo_license_auditor::config::{require, Settings};
use repo_license_auditor::GitHubClient;

pub fn handle_report(
    owner: Option<String>,
    output_dir: PathBuf,
    on_fetch_error: OnFetchError,
    quiet: bool,
) -> Result<()> {
    // The policy is not consulted by the inventory
    let settings = Settings::from_env(None)?;

    let owner = match owner {
        Some(owner) => owner,
        None => require(&|key: &str| std::env::var(key).ok(), "GITHUB_REPOSITORY_OWNER")?,
    };

    let client = GitHubClient::from_settings(&settings)?;
    let options = InventoryOptions {
        owner,
        output_dir,
        on_fetch_error: on_fetch_error.into(),
    };

    let outcome = run_inventory(&client, &UnavailableAdvisories, &options)
        .with_context(|| format!("Failed to build reports for {}", options.owner))?;

    if !quiet {
        println!(
            "📦 {} repositories audited. Reports written to {} and {}",
            outcome.repositories.len(),
            outcome.licenses_path.display(),
            outcome.vulnerabilities_path.display()
        );
    }

    Ok(())
}

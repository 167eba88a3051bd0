use anyhow::{Context, Result};
use std::path::PathBuf;
use crate::cli::{OnFetchError, OutputFormat};
use repo_license_auditor::audit::{run_compliance_check, CheckOptions, ReportFormat};
use repo_license_auditor::config::{require, Settings};
use repo_license_auditor::{GitHubClient, RepoSlug};

pub fn handle_check(
    policy: Option<PathBuf>,
    repo: Option<String>,
    output: PathBuf,
    format: OutputFormat,
    on_fetch_error: OnFetchError,
    exit_zero: bool,
    quiet: bool,
) -> Result<()> {
    let settings = Settings::from_env(policy)?;

    // --repo wins over $GITHUB_REPOSITORY
    let repository: RepoSlug = match repo {
        Some(repo) => repo.parse()?,
        None => require(&|key: &str| std::env::var(key).ok(), "GITHUB_REPOSITORY")?.parse()?,
    };

    let client = GitHubClient::from_settings(&settings)?;
    let options = CheckOptions {
        repository,
        output,
        format: match format {
            OutputFormat::Markdown => ReportFormat::Markdown,
            OutputFormat::Json => ReportFormat::Json,
        },
        on_fetch_error: on_fetch_error.into(),
    };

    let report = run_compliance_check(&settings, &client, &options)
        .with_context(|| format!("License check failed for {}", options.repository))?;

    if !quiet {
        println!(
            "📦 {} dependencies checked, {} violations. Report written to {}",
            report.dependencies.len(),
            report.violations.len(),
            options.output.display()
        );
    }

    if !report.compliant {
        if !quiet {
            eprintln!("License violations found in {}", report.repository);
        }
        if !exit_zero {
            std::process::exit(report.exit_code());
        }
    }

    Ok(())
}

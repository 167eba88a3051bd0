use std::fs;
use std::path::Path;
use crate::advisory::{AdvisoryStatus, RepositoryAdvisories};
use crate::dependency::Dependency;
use crate::error::{AuditError, Result};
use crate::github::RepositorySummary;
use crate::policy::Violation;

pub const PASS_BANNER: &str = "✅ All dependencies comply with the license policy.";
pub const FAIL_BANNER: &str = "❌ The following dependencies violate the license policy:";
pub const ADVISORIES_UNAVAILABLE: &str =
    "- Vulnerability scanning via REST API is not available for public repositories.";

/// Render the single-repository compliance report.
pub fn render_compliance_report(violations: &[Violation], dependencies: &[Dependency]) -> String {
    let mut output = String::new();

    output.push_str("# License Compliance Report\n\n");
    if violations.is_empty() {
        output.push_str(&format!("{}\n\n", PASS_BANNER));
    } else {
        output.push_str(&format!("{}\n\n", FAIL_BANNER));
        for violation in violations {
            output.push_str(&format!(
                "- **{} {}**: {}\n",
                violation.name, violation.version, violation.license
            ));
        }
    }

    output.push_str("\n---\n");
    output.push_str("## All Dependencies\n");
    for dependency in dependencies {
        output.push_str(&format!(
            "- {} {}: {}\n",
            dependency.name,
            dependency.version,
            dependency.license_label()
        ));
    }

    output
}

/// Render `licenses.md`: every repository with its license and dependencies.
pub fn render_license_inventory(owner: &str, repositories: &[RepositorySummary]) -> String {
    let mut lines = vec![format!("# Licenses for {} Repositories\n", owner)];

    for repo in repositories {
        lines.push(format!("- [{}]({}): {}", repo.name, repo.url, repo.license_id));

        if !repo.dependencies.is_empty() {
            lines.push("  - Dependencies:".to_string());
            for dep in &repo.dependencies {
                lines.push(format!("    - {} {} ({})", dep.name, dep.version, dep.license_label()));
            }
        }
    }

    lines.join("\n")
}

/// Render `vulnerabilities.md`.
pub fn render_vulnerability_report(owner: &str, repositories: &[RepositoryAdvisories]) -> String {
    let mut lines = vec![format!("# Vulnerabilities for {} Repositories\n", owner)];

    for repo in repositories {
        let body = match &repo.status {
            AdvisoryStatus::Unavailable => ADVISORIES_UNAVAILABLE.to_string(),
            AdvisoryStatus::Known(advisories) if advisories.is_empty() => {
                "- No known vulnerabilities.".to_string()
            }
            AdvisoryStatus::Known(advisories) => advisories
                .iter()
                .map(|a| format!("- **{}** {} in {}: {}", a.severity, a.id, a.package, a.summary))
                .collect::<Vec<_>>()
                .join("\n"),
        };
        lines.push(format!("## {}\n{}", repo.name, body));
    }

    lines.join("\n")
}

/// Write `contents` to `path`, replacing any existing file.
pub fn write_report(path: &Path, contents: &str) -> Result<()> {
    let io_error = |source| AuditError::Io {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    fs::write(path, contents).map_err(io_error)?;

    tracing::info!(path = %path.display(), "wrote report");
    Ok(())
}

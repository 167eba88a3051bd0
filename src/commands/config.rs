use anyhow::Result;
use std::path::PathBuf;
use repo_license_auditor::config::{DEFAULT_API_URL, DEFAULT_POLICY_PATH};
use repo_license_auditor::policy::load_policy;

pub fn handle_config(policy: Option<PathBuf>, show: bool, validate: bool, quiet: bool) -> Result<()> {
    if !show && !validate {
        if !quiet {
            eprintln!("Use --show or --validate");
        }
        std::process::exit(1);
    }

    let policy_path = policy.unwrap_or_else(|| PathBuf::from(DEFAULT_POLICY_PATH));

    if show {
        match load_policy(&policy_path) {
            Ok(policy) => {
                if !quiet {
                    let api_base_url = std::env::var("GITHUB_API_URL")
                        .unwrap_or_else(|_| DEFAULT_API_URL.to_string());
                    let shown = serde_json::json!({
                        "api_base_url": api_base_url,
                        "policy_path": policy_path,
                        "policy": policy,
                    });
                    println!("{}", serde_json::to_string_pretty(&shown)?);
                }
            }
            Err(e) => {
                if !quiet {
                    eprintln!("Error loading configuration: {}", e);
                }
                std::process::exit(1);
            }
        }
    }

    if validate {
        match load_policy(&policy_path) {
            Ok(policy) => {
                if !quiet {
                    println!(
                        "✅ Policy is valid ({} allowed, {} blocked)",
                        policy.allowed_licenses.len(),
                        policy.blocked_licenses.len()
                    );
                }
            }
            Err(e) => {
                if !quiet {
                    eprintln!("❌ Policy validation failed: {}", e);
                }
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

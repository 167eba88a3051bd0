use anyhow::Result;
use std::path::PathBuf;
use crate::cli::InitPreset;
use repo_license_auditor::config::DEFAULT_POLICY_PATH;
use repo_license_auditor::init;

pub fn handle_init(policy: Option<PathBuf>, preset: InitPreset, force: bool, quiet: bool) -> Result<()> {
    let init_preset = match preset {
        InitPreset::Green => init::InitPreset::Green,
        InitPreset::Yellow => init::InitPreset::Yellow,
        InitPreset::Red => init::InitPreset::Red,
    };

    let path = policy.unwrap_or_else(|| PathBuf::from(DEFAULT_POLICY_PATH));
    init::generate_policy_at_path(&path, init_preset, force)?;

    if !quiet {
        println!("✅ Policy written to {}", path.display());
    }

    Ok(())
}

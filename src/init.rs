use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use crate::policy::{parse_policy, PolicyFormat};

#[derive(Debug, Clone, Copy)]
pub enum InitPreset {
    Green,
    Yellow,
    Red,
}

/// Write a preset policy to `path`, as YAML or TOML depending on the
/// extension. An existing file is only replaced with `force`.
pub fn generate_policy_at_path<P: AsRef<Path>>(path: P, preset: InitPreset, force: bool) -> Result<()> {
    let policy_path = path.as_ref();

    if policy_path.exists() && !force {
        return Err(anyhow::anyhow!(
            "{} already exists. Use --force to overwrite it.",
            policy_path.display()
        ));
    }

    let content = render_preset(preset, PolicyFormat::from_path(policy_path))?;

    if let Some(parent) = policy_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(policy_path, content)
        .with_context(|| format!("Failed to write policy file: {}", policy_path.display()))?;

    Ok(())
}

fn render_preset(preset: InitPreset, format: PolicyFormat) -> Result<String> {
    let yaml = get_preset_policy(preset);
    match format {
        PolicyFormat::Yaml => Ok(yaml.to_string()),
        PolicyFormat::Toml => {
            let policy = parse_policy(yaml, PolicyFormat::Yaml)?;
            toml::to_string_pretty(&policy).context("Failed to serialize preset as TOML")
        }
    }
}

fn get_preset_policy(preset: InitPreset) -> &'static str {
    match preset {
        InitPreset::Red => include_str!("../presets/red.yml"),
        InitPreset::Green => include_str!("../presets/green.yml"),
        InitPreset::Yellow => include_str!("../presets/yellow.yml"),
    }
}

use std::fs;
use std::path::Path;
use super::config::LicensePolicy;
use crate::error::{AuditError, Result};

/// On-disk encoding of a policy file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyFormat {
    Yaml,
    Toml,
}

impl PolicyFormat {
    /// Picks the format from the file extension; anything but `.toml` is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => PolicyFormat::Toml,
            _ => PolicyFormat::Yaml,
        }
    }
}

/// Load the allowed/blocked license policy from `path`.
pub fn load_policy(path: &Path) -> Result<LicensePolicy> {
    let content = fs::read_to_string(path).map_err(|e| {
        AuditError::Config(format!("Failed to read policy file {}: {}", path.display(), e))
    })?;

    let policy = parse_policy(&content, PolicyFormat::from_path(path)).map_err(|e| match e {
        AuditError::Config(msg) => {
            AuditError::Config(format!("Invalid policy file {}: {}", path.display(), msg))
        }
        other => other,
    })?;

    tracing::debug!(
        path = %path.display(),
        allowed = policy.allowed_licenses.len(),
        blocked = policy.blocked_licenses.len(),
        "loaded license policy"
    );

    Ok(policy)
}

pub fn parse_policy(content: &str, format: PolicyFormat) -> Result<LicensePolicy> {
    match format {
        PolicyFormat::Yaml => {
            serde_yaml::from_str(content).map_err(|e| AuditError::Config(e.to_string()))
        }
        PolicyFormat::Toml => toml::from_str(content).map_err(|e| AuditError::Config(e.to_string())),
    }
}

use serde::{Deserialize, Serialize};
use super::config::LicensePolicy;
use super::matcher::ViolationLevel;
use crate::dependency::Dependency;

/// A (dependency, license) pair that fails the policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub name: String,
    pub version: String,
    pub license: String,
}

/// 依存関係リストから違反を検出
///
/// Violations come out in dependency order, then license order within a
/// dependency. Duplicates are kept.
pub fn check_compliance(dependencies: &[Dependency], policy: &LicensePolicy) -> Vec<Violation> {
    let mut violations = Vec::new();

    for dependency in dependencies {
        for license in dependency.effective_licenses() {
            if policy.check_license(license) != ViolationLevel::Allowed {
                violations.push(Violation {
                    name: dependency.name.clone(),
                    version: dependency.version.clone(),
                    license: license.to_string(),
                });
            }
        }
    }

    violations
}

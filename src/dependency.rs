use serde::{Deserialize, Serialize};

/// Label used for a dependency that declares no license.
pub const UNKNOWN_LICENSE: &str = "Unknown";

/// A package reported by a repository's SBOM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub name: String,
    /// Empty when the SBOM carries no version.
    pub version: String,
    /// Empty when the SBOM carries no license, which is treated as "Unknown".
    pub licenses: Vec<String>,
}

impl Dependency {
    pub fn new(name: impl Into<String>, version: impl Into<String>, licenses: Vec<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            licenses,
        }
    }

    /// Licenses to evaluate, substituting "Unknown" for an empty list.
    pub fn effective_licenses(&self) -> Vec<&str> {
        if self.licenses.is_empty() {
            vec![UNKNOWN_LICENSE]
        } else {
            self.licenses.iter().map(String::as_str).collect()
        }
    }

    /// Licenses joined for display, e.g. "MIT, Apache-2.0".
    pub fn license_label(&self) -> String {
        self.effective_licenses().join(", ")
    }
}

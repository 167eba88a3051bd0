use serde::Deserialize;
use crate::dependency::Dependency;

const NO_ASSERTION: &str = "NOASSERTION";

/// Body of the dependency-graph SBOM endpoint.
///
/// Packages are read from a top-level `packages` array, or from the SPDX
/// document nested under `sbom`.
#[derive(Debug, Deserialize)]
struct SbomResponse {
    #[serde(default)]
    packages: Vec<SbomPackage>,
    #[serde(default)]
    sbom: Option<SbomDocument>,
}

#[derive(Debug, Deserialize)]
struct SbomDocument {
    #[serde(default)]
    packages: Vec<SbomPackage>,
}

#[derive(Debug, Deserialize)]
struct SbomPackage {
    name: String,
    #[serde(default, alias = "versionInfo")]
    version: Option<String>,
    #[serde(default)]
    licenses: Option<Vec<String>>,
    #[serde(default, rename = "licenseConcluded")]
    license_concluded: Option<String>,
    #[serde(default, rename = "licenseDeclared")]
    license_declared: Option<String>,
}

impl SbomPackage {
    fn into_dependency(self) -> Dependency {
        let licenses = match self.licenses {
            Some(licenses) => licenses,
            None => [self.license_concluded, self.license_declared]
                .into_iter()
                .flatten()
                .find(|license| !license.is_empty() && license != NO_ASSERTION)
                .into_iter()
                .collect(),
        };

        Dependency {
            name: self.name,
            version: self.version.unwrap_or_default(),
            licenses,
        }
    }
}

/// Normalize an SBOM response body into dependency records.
pub fn parse_dependencies(body: &str) -> serde_json::Result<Vec<Dependency>> {
    let response: SbomResponse = serde_json::from_str(body)?;

    let packages = if response.packages.is_empty() {
        response.sbom.map(|doc| doc.packages).unwrap_or_default()
    } else {
        response.packages
    };

    Ok(packages.into_iter().map(SbomPackage::into_dependency).collect())
}

use std::path::Path;

use serde::{Deserialize, Deserializer};
use serde_yaml_ng::Value;

use crate::error::ManifestError;
use crate::models::PackageRecord;

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default)]
    third_party_libraries: Option<Vec<ManifestEntry>>,
}

#[derive(Debug, Deserialize)]
struct ManifestEntry {
    #[serde(default, deserialize_with = "lenient_string")]
    package_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    package_version: String,
    #[serde(default, deserialize_with = "lenient_string")]
    repository: String,
    #[serde(default, deserialize_with = "lenient_string")]
    license: String,
    #[serde(default)]
    licenses: Option<Vec<LicenseEntry>>,
}

#[derive(Debug, Deserialize)]
struct LicenseEntry {
    #[serde(default, deserialize_with = "lenient_string")]
    text: String,
}

/// Accept any scalar where a string is expected; `null` and collections become "".
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

/// Load `third_party_libraries` from the manifest at `path`, in file order.
pub fn load_manifest(path: &Path) -> Result<Vec<PackageRecord>, ManifestError> {
    if !path.exists() {
        return Err(ManifestError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| ManifestError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    parse_manifest(&content).map_err(|source| ManifestError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_manifest(content: &str) -> Result<Vec<PackageRecord>, serde_yaml_ng::Error> {
    let manifest: Manifest = serde_yaml_ng::from_str(content)?;

    let records = manifest
        .third_party_libraries
        .unwrap_or_default()
        .into_iter()
        .map(|entry| PackageRecord {
            name: entry.package_name,
            version: entry.package_version,
            repository: entry.repository,
            license: entry.license,
            license_texts: entry
                .licenses
                .unwrap_or_default()
                .into_iter()
                .map(|l| l.text)
                .collect(),
        })
        .collect();

    Ok(records)
}

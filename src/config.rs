use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Manifest read by default, relative to the working directory.
pub const DEFAULT_MANIFEST_PATH: &str = "libdatadog/LICENSE-3rdparty.yml";
/// CSV written by default, relative to the working directory.
pub const DEFAULT_OUTPUT_PATH: &str = "LICENSE-3rdparty.csv";

/// Input and output locations for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Paths {
    pub manifest: PathBuf,
    pub output: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Paths::in_dir(Path::new(""))
    }
}

impl Paths {
    /// The default layout rooted at `dir` instead of the working directory.
    pub fn in_dir(dir: &Path) -> Self {
        Paths {
            manifest: dir.join(DEFAULT_MANIFEST_PATH),
            output: dir.join(DEFAULT_OUTPUT_PATH),
        }
    }
}

/// Root configuration, deserialized from `.license-csv/config.toml`.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Extensions to the copyright extraction rules.
    #[serde(default)]
    pub copyright: CopyrightConfig,
}

/// Additions to the built-in copyright rules; never replaces them.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct CopyrightConfig {
    /// Extra case-insensitive substrings that disqualify a holder candidate.
    #[serde(default)]
    pub extra_exclusions: Vec<String>,
    /// Extra package names attributed to the Rust project when no holder is found.
    #[serde(default)]
    pub runtime_packages: Vec<String>,
}

/// Load `<project_path>/.license-csv/config.toml`, or the built-in
/// [`Config::default`] when the file does not exist.
pub fn load_config(project_path: &Path) -> Result<Config> {
    let path = project_path.join(".license-csv").join("config.toml");
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config = toml::from_str(&content)
        .with_context(|| format!("failed to parse {}", path.display()))?;

    Ok(config)
}

use std::path::Path;

use serde::Deserialize;

use crate::error::{ConventionGuardError, Result};

pub const CONFIG_FILE_NAME: &str = ".convention-guard.toml";

/// Effective configuration for one validation run. Every field has a default,
/// so a missing config file means "run with the built-in conventions".
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scanner: ScannerConfig,
    pub tests: TestsConfig,
    pub manifest: ManifestConfig,
}

/// File discovery settings shared by all validators.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// Extra exclude patterns (glob syntax) on top of the built-in exclusions.
    pub exclude: Vec<String>,

    /// Filename suffixes identifying generated sources, matched case-insensitively.
    pub generated_suffixes: Vec<String>,

    /// Directory names treated as build output and never scanned.
    pub build_dirs: Vec<String>,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            exclude: Vec::new(),
            generated_suffixes: default_generated_suffixes(),
            build_dirs: default_build_dirs(),
        }
    }
}

/// Where test sources live, relative to the solution root.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TestsConfig {
    pub dir: String,
}

impl Default for TestsConfig {
    fn default() -> Self {
        Self {
            dir: "Tests".to_string(),
        }
    }
}

/// Build-manifest requirements.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ManifestConfig {
    /// Required `<LangVersion>` value in the project manifest.
    pub required_lang_version: String,
}

impl Default for ManifestConfig {
    fn default() -> Self {
        Self {
            required_lang_version: "12.0".to_string(),
        }
    }
}

fn default_generated_suffixes() -> Vec<String> {
    vec![
        ".Designer.cs".to_string(),
        ".g.cs".to_string(),
        ".AssemblyInfo.cs".to_string(),
    ]
}

fn default_build_dirs() -> Vec<String> {
    vec![
        "obj".to_string(),
        "bin".to_string(),
        "TestResults".to_string(),
        ".vs".to_string(),
    ]
}

/// Loads configuration from the solution root or an explicit path.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load `.convention-guard.toml` from the solution root, falling back to
    /// defaults when the file does not exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(solution_dir: &Path) -> Result<Config> {
        let path = solution_dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(Config::default());
        }
        Self::load_from_path(&path)
    }

    /// Load configuration from a specific path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_path(path: &Path) -> Result<Config> {
        let text =
            std::fs::read_to_string(path).map_err(|source| ConventionGuardError::FileRead {
                path: path.to_path_buf(),
                source,
            })?;
        toml::from_str(&text).map_err(Into::into)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

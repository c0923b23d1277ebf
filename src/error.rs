use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConventionGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid glob pattern: {pattern}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: globset::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Solution directory not found: no .sln file at or above {0}")]
    SolutionNotFound(PathBuf),

    #[error("Project file '{name}.csproj' was not found under {root}")]
    ProjectNotFound { name: String, root: PathBuf },

    #[error("No project file (.csproj) found under {0}")]
    NoProjectInSolution(PathBuf),

    #[error("Build manifest not found: {0}")]
    ManifestNotFound(PathBuf),

    #[error("Tests directory not found: {0}")]
    TestsDirNotFound(PathBuf),
}

pub type Result<T> = std::result::Result<T, ConventionGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

use std::path::PathBuf;

use crate::config::Config;
use crate::source::SourceUnit;

use super::ProjectContext;

pub(crate) fn unit(path: &str, text: &str) -> SourceUnit {
    SourceUnit::from_parts(PathBuf::from(path), text.to_string())
}

pub(crate) fn context(sources: Vec<SourceUnit>, tests: Vec<SourceUnit>) -> ProjectContext {
    ProjectContext {
        solution_dir: PathBuf::from("."),
        manifest_path: PathBuf::from("App/App.csproj"),
        sources,
        tests,
        config: Config::default(),
    }
}

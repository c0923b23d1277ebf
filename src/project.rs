use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{ConventionGuardError, Result};

/// Sentinel project name meaning "auto-detect the project from the solution root".
pub const AUTO_DETECT: &str = ".";

/// Walk up from `start` until a directory containing a `.sln` file is found.
///
/// # Errors
/// Returns `SolutionNotFound` when no ancestor holds a solution file.
pub fn find_solution_directory(start: &Path) -> Result<PathBuf> {
    let mut current = Some(start);
    while let Some(dir) = current {
        if has_solution_file(dir) {
            return Ok(dir.to_path_buf());
        }
        current = dir.parent();
    }
    Err(ConventionGuardError::SolutionNotFound(start.to_path_buf()))
}

fn has_solution_file(dir: &Path) -> bool {
    std::fs::read_dir(dir)
        .ok()
        .into_iter()
        .flatten()
        .filter_map(std::result::Result::ok)
        .any(|e| e.path().extension().is_some_and(|ext| ext == "sln"))
}

/// Locate `<name>.csproj` under the solution root, skipping build output
/// directories. The sentinel `.` picks the first manifest in path order.
///
/// # Errors
/// Returns `ProjectNotFound` (named project) or `NoProjectInSolution`
/// (auto-detect) when no manifest matches.
pub fn find_project_file(
    solution_dir: &Path,
    name: &str,
    build_dirs: &[String],
) -> Result<PathBuf> {
    let mut manifests: Vec<PathBuf> = WalkDir::new(solution_dir)
        .into_iter()
        .filter_entry(|e| !is_build_dir(e, build_dirs))
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .filter(|p| p.extension().is_some_and(|ext| ext == "csproj"))
        .collect();
    manifests.sort();

    if name == AUTO_DETECT {
        return manifests.into_iter().next().ok_or_else(|| {
            ConventionGuardError::NoProjectInSolution(solution_dir.to_path_buf())
        });
    }

    let wanted = format!("{name}.csproj");
    manifests
        .into_iter()
        .find(|p| p.file_name().and_then(|f| f.to_str()) == Some(wanted.as_str()))
        .ok_or_else(|| ConventionGuardError::ProjectNotFound {
            name: name.to_string(),
            root: solution_dir.to_path_buf(),
        })
}

fn is_build_dir(entry: &walkdir::DirEntry, build_dirs: &[String]) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|n| build_dirs.iter().any(|d| d == n))
}

#[cfg(test)]
#[path = "project_tests.rs"]
mod tests;

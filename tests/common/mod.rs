#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the convention-guard binary.
#[macro_export]
macro_rules! convention_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("convention-guard"))
    };
}

/// A throwaway solution layout for end-to-end runs: a `.sln` marker at the
/// root, one project with a manifest, and a Tests directory.
pub struct SolutionFixture {
    pub dir: TempDir,
}

impl SolutionFixture {
    pub fn new(project: &str) -> Self {
        let fixture = Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        };
        fixture.create_file("App.sln", "");
        fixture.create_file(&format!("{project}/{project}.csproj"), MANIFEST_OK);
        fixture.create_dir("Tests");
        fixture
    }

    /// Returns the path to the solution root.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a file with the given content, creating parent directories.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a directory in the solution root.
    pub fn create_dir(&self, relative_path: &str) {
        fs::create_dir_all(self.dir.path().join(relative_path)).expect("Failed to create directory");
    }

    /// Removes a directory; used to provoke environment errors.
    pub fn remove_dir(&self, relative_path: &str) {
        fs::remove_dir_all(self.dir.path().join(relative_path)).expect("Failed to remove directory");
    }
}

pub const MANIFEST_OK: &str = "<Project Sdk=\"Microsoft.NET.Sdk\">\n  <PropertyGroup>\n    <LangVersion>12.0</LangVersion>\n  </PropertyGroup>\n</Project>\n";

pub const MANIFEST_MISSING_LANG: &str =
    "<Project Sdk=\"Microsoft.NET.Sdk\">\n  <PropertyGroup>\n  </PropertyGroup>\n</Project>\n";

pub const MANIFEST_OLD_LANG: &str = "<Project Sdk=\"Microsoft.NET.Sdk\">\n  <PropertyGroup>\n    <LangVersion>11.0</LangVersion>\n  </PropertyGroup>\n</Project>\n";

/// A fully conventional source file: documented members, matching filename.
pub const CALCULATOR_OK: &str = "/// <summary>Simple arithmetic helpers.</summary>\npublic class Calculator\n{\n    /// <summary>Adds two numbers.</summary>\n    public int Add(int left, int right)\n    {\n        return left + right;\n    }\n}\n";

/// A test file whose name and content cover `Calculator.Add`.
pub const CALCULATOR_TESTS: &str = "/// <summary>Tests for Calculator.</summary>\npublic class CalculatorTests\n{\n    public void Add_ReturnsSum()\n    {\n    }\n}\n";

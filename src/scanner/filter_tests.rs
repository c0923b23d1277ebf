use std::path::Path;

use crate::config::ScannerConfig;

use super::*;

fn default_filter() -> SourceFilter {
    SourceFilter::from_config(&ScannerConfig::default()).unwrap()
}

#[test]
fn includes_plain_source_files() {
    let filter = default_filter();
    assert!(filter.should_include(Path::new("src/Calculator.cs")));
    assert!(filter.should_include(Path::new("Models/Deep/User.cs")));
}

#[test]
fn rejects_other_extensions() {
    let filter = default_filter();
    assert!(!filter.should_include(Path::new("src/App.csproj")));
    assert!(!filter.should_include(Path::new("notes.txt")));
    assert!(!filter.should_include(Path::new("Calculator")));
}

#[test]
fn rejects_generated_files_case_insensitively() {
    let filter = default_filter();
    assert!(!filter.should_include(Path::new("src/Form1.Designer.cs")));
    assert!(!filter.should_include(Path::new("src/View.g.cs")));
    assert!(!filter.should_include(Path::new("src/App.AssemblyInfo.cs")));
    assert!(!filter.should_include(Path::new("src/Form1.DESIGNER.cs")));
}

#[test]
fn rejects_build_output_directories() {
    let filter = default_filter();
    assert!(!filter.should_include(Path::new("App/obj/Debug/Foo.cs")));
    assert!(!filter.should_include(Path::new("App/bin/Release/Foo.cs")));
    assert!(!filter.should_include(Path::new("App/TestResults/Foo.cs")));
    assert!(!filter.should_include(Path::new("App/.vs/cache/Foo.cs")));
}

#[test]
fn applies_user_exclude_globs() {
    let config = ScannerConfig {
        exclude: vec!["**/Migrations/**".to_string()],
        ..Default::default()
    };
    let filter = SourceFilter::from_config(&config).unwrap();
    assert!(!filter.should_include(Path::new("App/Migrations/Init.cs")));
    assert!(filter.should_include(Path::new("App/Models/User.cs")));
}

#[test]
fn invalid_glob_is_an_error() {
    let config = ScannerConfig {
        exclude: vec!["[".to_string()],
        ..Default::default()
    };
    assert!(SourceFilter::from_config(&config).is_err());
}

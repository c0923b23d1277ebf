use std::fs;

use crate::config::ScannerConfig;

use super::*;

fn default_scanner() -> DirectoryScanner<SourceFilter> {
    DirectoryScanner::new(SourceFilter::from_config(&ScannerConfig::default()).unwrap())
}

#[test]
fn scans_only_source_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Foo.cs"), "class Foo {}").unwrap();
    fs::write(dir.path().join("readme.md"), "# readme").unwrap();

    let files = default_scanner().scan(dir.path()).unwrap();
    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("Foo.cs"));
}

#[test]
fn walks_nested_directories() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("Models").join("Deep");
    fs::create_dir_all(&nested).unwrap();
    fs::write(nested.join("User.cs"), "class User {}").unwrap();

    let files = default_scanner().scan(dir.path()).unwrap();
    assert_eq!(files.len(), 1);
}

#[test]
fn skips_generated_and_build_output_files() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("Form.Designer.cs"), "// generated").unwrap();
    let obj = dir.path().join("obj");
    fs::create_dir_all(&obj).unwrap();
    fs::write(obj.join("Cached.cs"), "class Cached {}").unwrap();
    fs::write(dir.path().join("Kept.cs"), "class Kept {}").unwrap();

    let files = default_scanner().scan(dir.path()).unwrap();
    assert_eq!(files.len(), 1);
    assert!(files[0].ends_with("Kept.cs"));
}

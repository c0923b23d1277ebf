use std::path::{Path, PathBuf};

use super::*;

#[test]
fn from_parts_splits_lines_and_exposes_names() {
    let unit = SourceUnit::from_parts(PathBuf::from("src/Foo.cs"), "a\nb\nc".to_string());
    assert_eq!(unit.lines, vec!["a", "b", "c"]);
    assert_eq!(unit.stem(), "Foo");
    assert_eq!(unit.file_name(), "Foo.cs");
}

#[test]
fn load_units_sorts_by_path() {
    let dir = tempfile::tempdir().unwrap();
    let b = dir.path().join("B.cs");
    let a = dir.path().join("A.cs");
    std::fs::write(&b, "class B {}").unwrap();
    std::fs::write(&a, "class A {}").unwrap();

    let units = load_units(vec![b.clone(), a.clone()]).unwrap();
    assert_eq!(units[0].path, a);
    assert_eq!(units[1].path, b);
}

#[test]
fn load_missing_file_reports_the_path() {
    let err = SourceUnit::load(Path::new("does/not/exist.cs")).unwrap_err();
    assert!(err.to_string().contains("does/not/exist.cs"));
}

use crate::validator::Validator;
use crate::validator::test_support::{context, unit};

use super::*;

fn run(source: &str) -> crate::validator::ValidationResult {
    let ctx = context(vec![unit("App/Foo.cs", source)], Vec::new());
    DocCoverageValidator::new().run(&ctx).unwrap()
}

#[test]
fn documented_members_pass() {
    let source = "/// <summary>Docs.</summary>\npublic class Foo\n{\n    /// <summary>Runs.</summary>\n    public void Run()\n    {\n    }\n}\n";
    assert!(run(source).is_passed());
}

#[test]
fn member_on_first_line_is_undocumented() {
    let result = run("public class Foo\n{\n}\n");
    assert_eq!(result.violations.len(), 1);
    assert_eq!(result.violations[0].line, Some(1));
}

#[test]
fn code_directly_above_means_undocumented_even_with_doc_two_lines_up() {
    let source = "/// <summary>Docs.</summary>\nint unrelated;\npublic void Run() { }\n";
    let result = run(source);
    assert_eq!(result.violations.len(), 1);
    assert_eq!(result.violations[0].line, Some(3));
}

#[test]
fn blank_lines_are_skipped_when_looking_for_docs() {
    let source = "/// <summary>Docs.</summary>\n\npublic void Run() { }\n";
    assert!(run(source).is_passed());
}

#[test]
fn plain_comment_does_not_count_as_documentation() {
    let source = "// notes\npublic void Run() { }\n";
    let result = run(source);
    assert_eq!(result.violations.len(), 1);
}

#[test]
fn commented_out_members_are_not_members() {
    let source = "/// <summary>Docs.</summary>\npublic class Foo\n{\n    // public void Ghost() { }\n}\n";
    assert!(run(source).is_passed());
}

#[test]
fn aggregated_message_names_file_and_line() {
    let source = "public class Foo\n{\n    public void Run()\n    {\n    }\n}\n";
    let result = run(source);
    assert_eq!(result.violations.len(), 2);
    let message = result.failure_message().unwrap();
    assert!(message.contains("Foo.cs: line 1"));
    assert!(message.contains("Foo.cs: line 3"));
    assert!(message.contains("missing documentation"));
}

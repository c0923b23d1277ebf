use crate::validator::Validator;
use crate::validator::test_support::{context, unit};

use super::*;

const CALCULATOR: &str = "public class Calculator\n{\n    public int Add(int a, int b)\n    {\n        return a + b;\n    }\n\n    public int Sub(int a, int b)\n    {\n        return a - b;\n    }\n}\n";

#[test]
fn logic_type_with_named_test_file_is_covered() {
    let ctx = context(
        vec![unit("App/Calculator.cs", CALCULATOR)],
        vec![unit(
            "Tests/CalculatorTests.cs",
            "public class CalculatorTests\n{\n}\n",
        )],
    );
    assert!(TestCoverageValidator::new().run(&ctx).unwrap().is_passed());
}

#[test]
fn uncovered_logic_type_yields_exactly_one_entry() {
    // Two uncovered methods, still a single entry for the type.
    let ctx = context(vec![unit("App/Calculator.cs", CALCULATOR)], Vec::new());
    let result = TestCoverageValidator::new().run(&ctx).unwrap();
    assert_eq!(result.violations.len(), 1);
    assert_eq!(result.violations[0].message, "Calculator");
}

#[test]
fn type_without_methods_is_not_a_logic_type() {
    let ctx = context(
        vec![unit(
            "App/Dto.cs",
            "public class Dto\n{\n    public int Id { get; set; }\n}\n",
        )],
        Vec::new(),
    );
    assert!(TestCoverageValidator::new().run(&ctx).unwrap().is_passed());
}

#[test]
fn type_name_substring_of_test_file_name_counts() {
    // Over-approximation kept deliberately: any containing file name covers.
    let ctx = context(
        vec![unit(
            "App/Calc.cs",
            "public class Calc\n{\n    public int Run()\n    {\n        return 1;\n    }\n}\n",
        )],
        vec![unit("Tests/MiscCalcFixture.cs", "// fixture\n")],
    );
    assert!(TestCoverageValidator::new().run(&ctx).unwrap().is_passed());
}

#[test]
fn program_and_assembly_stems_are_exempt() {
    let ctx = context(
        vec![
            unit(
                "App/Program.cs",
                "public class Program\n{\n    public static void Main(string[] args)\n    {\n    }\n}\n",
            ),
            unit("App/MyAssemblyInfo.cs", "public class MyAssemblyInfo\n{\n    public void Touch()\n    {\n    }\n}\n"),
        ],
        Vec::new(),
    );
    assert!(TestCoverageValidator::new().run(&ctx).unwrap().is_passed());
}

#[test]
fn aggregated_message_lists_every_uncovered_type() {
    let ctx = context(
        vec![
            unit("App/Alpha.cs", "public class Alpha\n{\n    public void Go()\n    {\n    }\n}\n"),
            unit("App/Beta.cs", "public class Beta\n{\n    public void Stop()\n    {\n    }\n}\n"),
        ],
        Vec::new(),
    );
    let result = TestCoverageValidator::new().run(&ctx).unwrap();
    assert_eq!(result.violations.len(), 2);
    let message = result.failure_message().unwrap();
    assert!(message.contains("Alpha"));
    assert!(message.contains("Beta"));
}

#[test]
fn generic_logic_type_is_matched_by_canonical_name() {
    let source = "public class Repo<T, K>\n{\n    public void Save(T item)\n    {\n    }\n}\n";
    let covered = context(
        vec![unit("App/RepoTK.cs", source)],
        vec![unit("Tests/RepoTKTests.cs", "// tests\n")],
    );
    assert!(TestCoverageValidator::new().run(&covered).unwrap().is_passed());

    let uncovered = context(
        vec![unit("App/RepoTK.cs", source)],
        vec![unit("Tests/RepoTests.cs", "// tests\n")],
    );
    let result = TestCoverageValidator::new().run(&uncovered).unwrap();
    assert_eq!(result.violations[0].message, "RepoTK");
}

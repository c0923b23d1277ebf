use serde::Serialize;

use crate::error::Result;
use crate::orchestrator::RunReport;
use crate::validator::ValidationResult;

use super::ReportFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    passed: bool,
    failed_validator: Option<&'static str>,
    validators: Vec<ValidatorResult<'a>>,
}

#[derive(Serialize)]
struct ValidatorResult<'a> {
    id: &'static str,
    passed: bool,
    message: Option<String>,
    warnings: &'a [String],
    violations: Vec<Violation<'a>>,
}

#[derive(Serialize)]
struct Violation<'a> {
    file: String,
    line: Option<usize>,
    message: &'a str,
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &RunReport) -> Result<String> {
        let output = JsonOutput {
            passed: report.is_passed(),
            failed_validator: report.failure().map(|(id, _)| id),
            validators: report.results.iter().map(convert_result).collect(),
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_result(result: &ValidationResult) -> ValidatorResult<'_> {
    ValidatorResult {
        id: result.validator_id,
        passed: result.is_passed(),
        message: result.failure_message(),
        warnings: &result.warnings,
        violations: result
            .violations
            .iter()
            .map(|v| Violation {
                file: v.file.display().to_string(),
                line: v.line,
                message: v.message.as_str(),
            })
            .collect(),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;

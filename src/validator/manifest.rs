use regex::Regex;

use crate::error::{ConventionGuardError, Result};

use super::{Delimiter, ProjectContext, ValidationResult, Validator, ViolationRecord};

/// Asserts the project manifest declares a non-empty `<LangVersion>` element.
/// A present value that differs from the required one is reported as a
/// warning, not a violation.
///
/// The element is located lexically, consistent with the rest of the tool;
/// malformed markup simply reads as "element not found".
pub struct ManifestSettingValidator {
    element_pattern: Regex,
}

impl ManifestSettingValidator {
    #[must_use]
    pub fn new() -> Self {
        Self {
            element_pattern: Regex::new(r"<LangVersion>([^<]*)</LangVersion>")
                .expect("Invalid regex"),
        }
    }
}

impl Default for ManifestSettingValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for ManifestSettingValidator {
    fn id(&self) -> &'static str {
        "manifest_setting"
    }

    fn description(&self) -> &'static str {
        "build manifest declares the required settings"
    }

    fn run(&self, ctx: &ProjectContext) -> Result<ValidationResult> {
        let path = &ctx.manifest_path;
        if !path.exists() {
            return Err(ConventionGuardError::ManifestNotFound(path.clone()));
        }
        let text =
            std::fs::read_to_string(path).map_err(|source| ConventionGuardError::FileRead {
                path: path.clone(),
                source,
            })?;

        let value = self
            .element_pattern
            .captures(&text)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim().to_string())
            .filter(|v| !v.is_empty());

        let Some(value) = value else {
            let record = ViolationRecord::new(
                self.id(),
                path.clone(),
                None,
                format!(
                    "no <LangVersion> element found or it is empty in '{}'",
                    path.display()
                ),
            );
            return Ok(ValidationResult::fail(
                self.id(),
                "LangVersion validation failed",
                Delimiter::Comma,
                vec![record],
            ));
        };

        let required = &ctx.config.manifest.required_lang_version;
        let result = ValidationResult::pass(self.id());
        if value == *required {
            Ok(result)
        } else {
            Ok(result.with_warning(format!(
                "LangVersion should be {required} (actual: {value})"
            )))
        }
    }
}

#[cfg(test)]
#[path = "manifest_tests.rs"]
mod tests;

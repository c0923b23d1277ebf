use crate::error::Result;
use crate::validator::{
    DocCoverageValidator, FilenameMatchValidator, ManifestSettingValidator,
    MethodPresenceValidator, ProjectContext, TestCoverageValidator, TodoFixmeValidator,
    ValidationResult, Validator,
};

/// Where a run currently stands. Transitions strictly forward:
/// `NotStarted -> Running(index) -> Passed | Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    NotStarted,
    Running(usize),
    Passed,
    Failed,
}

/// Results of one full run, in execution order. When a validator failed it is
/// the last entry; validators after it never ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    pub results: Vec<ValidationResult>,
}

impl RunReport {
    #[must_use]
    pub fn is_passed(&self) -> bool {
        self.results.iter().all(ValidationResult::is_passed)
    }

    /// The failing validator's id and aggregated message, if any.
    #[must_use]
    pub fn failure(&self) -> Option<(&'static str, String)> {
        self.results
            .iter()
            .find(|r| !r.is_passed())
            .and_then(|r| r.failure_message().map(|m| (r.validator_id, m)))
    }
}

/// Runs validators in a fixed order. The first failing validator terminates
/// the run; each validator has already collected every violation of its own
/// kind by the time it reports, so nothing is silently dropped.
pub struct ValidationOrchestrator {
    validators: Vec<Box<dyn Validator>>,
    state: RunState,
}

impl ValidationOrchestrator {
    /// The standard sequence: manifest setting, filename match, test
    /// coverage, method presence, TODO/FIXME, documentation coverage.
    #[must_use]
    pub fn with_default_validators() -> Self {
        Self::new(vec![
            Box::new(ManifestSettingValidator::new()),
            Box::new(FilenameMatchValidator::new()),
            Box::new(TestCoverageValidator::new()),
            Box::new(MethodPresenceValidator::new()),
            Box::new(TodoFixmeValidator),
            Box::new(DocCoverageValidator::new()),
        ])
    }

    #[must_use]
    pub const fn new(validators: Vec<Box<dyn Validator>>) -> Self {
        Self {
            validators,
            state: RunState::NotStarted,
        }
    }

    #[must_use]
    pub const fn state(&self) -> RunState {
        self.state
    }

    /// Run every validator against the context, stopping at the first failure.
    ///
    /// # Errors
    /// Propagates the first environment error; convention violations are
    /// reported through the `RunReport`, never as errors.
    pub fn run(&mut self, ctx: &ProjectContext) -> Result<RunReport> {
        let mut results = Vec::with_capacity(self.validators.len());

        for (index, validator) in self.validators.iter().enumerate() {
            self.state = RunState::Running(index);
            let result = match validator.run(ctx) {
                Ok(result) => result,
                Err(e) => {
                    self.state = RunState::Failed;
                    return Err(e);
                }
            };

            let failed = !result.is_passed();
            results.push(result);
            if failed {
                self.state = RunState::Failed;
                return Ok(RunReport { results });
            }
        }

        self.state = RunState::Passed;
        Ok(RunReport { results })
    }
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;

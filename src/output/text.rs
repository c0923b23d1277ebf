use std::io::Write as IoWrite;

use crate::error::Result;
use crate::orchestrator::RunReport;
use crate::validator::ValidationResult;

use super::ReportFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                // Respect NO_COLOR environment variable
                if std::env::var("NO_COLOR").is_ok() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.use_colors {
            return text.to_string();
        }
        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_result(&self, result: &ValidationResult, output: &mut Vec<u8>) {
        if result.is_passed() {
            if self.verbose >= 1 {
                let status = self.colorize("passed", ansi::GREEN);
                writeln!(output, "✓ {status}: {}", result.validator_id).ok();
            }
        } else {
            let status = self.colorize("failed", ansi::RED);
            writeln!(output, "✗ {status}: {}", result.validator_id).ok();
        }

        for warning in &result.warnings {
            let tag = self.colorize("warning", ansi::YELLOW);
            writeln!(output, "  {tag}: {warning}").ok();
        }
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new(ColorMode::Auto)
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &RunReport) -> Result<String> {
        let mut output = Vec::new();

        for result in &report.results {
            self.format_result(result, &mut output);
        }

        match report.failure() {
            None => {
                let message =
                    self.colorize("Pre-build validation completed successfully.", ansi::GREEN);
                writeln!(output, "{message}").ok();
            }
            Some((id, message)) => {
                let tag = self.colorize("Pre-build validation failed", ansi::RED);
                writeln!(output, "{tag} ({id}): {message}").ok();
            }
        }

        Ok(String::from_utf8_lossy(&output).to_string())
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;

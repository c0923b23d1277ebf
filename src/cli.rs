use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::output::ReportFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "convention-guard")]
#[command(author, version, about = "Pre-build convention checker - fail the build on violated source conventions")]
#[command(long_about = "Validates a project's source tree before building: every logic type \
    has a test, every public member is documented, no TODO/FIXME markers remain, type names \
    match their files, and the build manifest declares the required settings.\n\n\
    Exit codes:\n  \
    0 - All validators passed\n  \
    1 - Convention violations found\n  \
    2 - Environment or configuration error")]
pub struct Cli {
    /// Project name to validate, or "." to auto-detect from the solution root
    #[arg(default_value = ".")]
    pub project: String,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Skip loading configuration file
    #[arg(long)]
    pub no_config: bool,

    /// Solution root directory (default: walk up from the current directory)
    #[arg(long)]
    pub solution_dir: Option<PathBuf>,

    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Output format [possible values: text, json]
    #[arg(short, long, default_value = "text")]
    pub format: ReportFormat,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;

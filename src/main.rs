use std::path::{Path, PathBuf};

use clap::Parser;

use convention_guard::cli::{Cli, ColorChoice};
use convention_guard::config::{Config, ConfigLoader};
use convention_guard::error::ConventionGuardError;
use convention_guard::orchestrator::ValidationOrchestrator;
use convention_guard::output::{
    ColorMode, JsonFormatter, ReportFormat, ReportFormatter, TextFormatter,
};
use convention_guard::project;
use convention_guard::scanner::{DirectoryScanner, FileScanner, SourceFilter};
use convention_guard::source::load_units;
use convention_guard::validator::ProjectContext;
use convention_guard::{EXIT_ENVIRONMENT_ERROR, EXIT_SUCCESS, EXIT_VIOLATION};

const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

fn main() {
    let cli = Cli::parse();
    std::process::exit(run_validate(&cli));
}

fn run_validate(cli: &Cli) -> i32 {
    match run_validate_impl(cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_ENVIRONMENT_ERROR
        }
    }
}

fn run_validate_impl(cli: &Cli) -> convention_guard::Result<i32> {
    // 1. Locate the solution root and load configuration
    let solution_dir = resolve_solution_dir(cli)?;
    let config = load_config(cli, &solution_dir)?;

    // 2. Locate the project manifest and its source directory
    let manifest_path =
        project::find_project_file(&solution_dir, &cli.project, &config.scanner.build_dirs)?;
    let project_dir = manifest_path
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| {
            ConventionGuardError::Config(format!(
                "project manifest has no parent directory: {}",
                manifest_path.display()
            ))
        })?;

    // 3. Read both file trees once; validators share the loaded units
    let filter = SourceFilter::from_config(&config.scanner)?;
    let scanner = DirectoryScanner::new(filter);
    let sources = load_units(scanner.scan(&project_dir)?)?;

    let tests_dir = solution_dir.join(&config.tests.dir);
    if !tests_dir.is_dir() {
        return Err(ConventionGuardError::TestsDirNotFound(tests_dir));
    }
    let tests = load_units(scanner.scan(&tests_dir)?)?;

    let ctx = ProjectContext {
        solution_dir,
        manifest_path,
        sources,
        tests,
        config,
    };

    // 4. Run the validator sequence and render the report
    let mut orchestrator = ValidationOrchestrator::with_default_validators();
    let report = orchestrator.run(&ctx)?;

    let output = match cli.format {
        ReportFormat::Text => {
            TextFormatter::with_verbose(color_choice_to_mode(cli.color), cli.verbose)
                .format(&report)?
        }
        ReportFormat::Json => JsonFormatter.format(&report)?,
    };

    if !cli.quiet || !report.is_passed() {
        print!("{output}");
    }

    Ok(if report.is_passed() {
        EXIT_SUCCESS
    } else {
        EXIT_VIOLATION
    })
}

fn resolve_solution_dir(cli: &Cli) -> convention_guard::Result<PathBuf> {
    if let Some(dir) = &cli.solution_dir {
        if !dir.is_dir() {
            return Err(ConventionGuardError::SolutionNotFound(dir.clone()));
        }
        return Ok(dir.clone());
    }
    let cwd = std::env::current_dir()?;
    project::find_solution_directory(&cwd)
}

fn load_config(cli: &Cli, solution_dir: &Path) -> convention_guard::Result<Config> {
    if cli.no_config {
        return Ok(Config::default());
    }
    cli.config
        .as_deref()
        .map_or_else(|| ConfigLoader::load(solution_dir), ConfigLoader::load_from_path)
}

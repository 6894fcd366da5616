//! `seo-audit setup` command implementation.

use crate::error::{Result, SeoAuditError};
use crate::setup::{find_python, Bootstrapper};
use std::path::PathBuf;

/// Interpreter tried when neither `--python` nor PATH detection yields one.
const FALLBACK_PYTHON: &str = "python3";

/// Arguments for the setup command.
pub struct SetupArgs {
    pub path: PathBuf,
    pub venv: PathBuf,
    pub requirements: PathBuf,
    pub python: Option<PathBuf>,
    pub strict: bool,
    pub run_hint: String,
}

/// Execute the setup command.
///
/// The completion hint is printed whether or not the steps succeeded; the
/// command fails afterwards if any of them did.
pub fn execute(args: SetupArgs) -> Result<()> {
    let project_dir = args.path.canonicalize().unwrap_or(args.path.clone());
    if !project_dir.is_dir() {
        return Err(SeoAuditError::NotADirectory(project_dir));
    }

    // Undetected interpreters still go through the steps so the failure is
    // recorded and the hint printed.
    let python = match args.python.or_else(find_python) {
        Some(python) => python,
        None => {
            tracing::warn!("no Python interpreter found on PATH, trying {FALLBACK_PYTHON}");
            PathBuf::from(FALLBACK_PYTHON)
        }
    };
    tracing::info!(python = %python.display(), "using base interpreter");

    let report = Bootstrapper::new(project_dir, python)
        .venv_dir(args.venv)
        .requirements(args.requirements)
        .strict(args.strict)
        .run();

    println!();
    println!("Setup complete. Run the tool with: {}", args.run_hint);

    if report.is_success() {
        return Ok(());
    }

    for outcome in report.outcomes.iter().filter(|o| !o.success) {
        if let Some(ref detail) = outcome.detail {
            eprintln!("{} failed: {}", outcome.step, detail);
        }
    }

    let failed: Vec<String> = report
        .failed_steps()
        .iter()
        .map(ToString::to_string)
        .collect();
    Err(SeoAuditError::SetupFailed(failed.join(", ")))
}

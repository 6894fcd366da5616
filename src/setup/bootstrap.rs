//! Virtual environment bootstrap.

use super::detect::venv_python;
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Default virtual environment directory name.
pub const DEFAULT_VENV_DIR: &str = "venv";

/// Default requirements manifest name.
pub const DEFAULT_REQUIREMENTS: &str = "requirements.txt";

/// A single bootstrap step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetupStep {
    CreateVenv,
    InstallRequirements,
}

impl fmt::Display for SetupStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SetupStep::CreateVenv => write!(f, "create-venv"),
            SetupStep::InstallRequirements => write!(f, "install-requirements"),
        }
    }
}

/// How a step finished.
#[derive(Debug, Clone)]
pub struct StepOutcome {
    pub step: SetupStep,
    pub success: bool,
    pub detail: Option<String>,
}

/// Outcomes of every step that ran, in order.
#[derive(Debug, Default)]
pub struct SetupReport {
    pub outcomes: Vec<StepOutcome>,
}

impl SetupReport {
    pub fn failed_steps(&self) -> Vec<SetupStep> {
        self.outcomes
            .iter()
            .filter(|o| !o.success)
            .map(|o| o.step)
            .collect()
    }

    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(|o| o.success)
    }
}

/// Runs the venv creation and dependency install steps.
pub struct Bootstrapper {
    project_dir: PathBuf,
    python: PathBuf,
    venv_dir: PathBuf,
    requirements: PathBuf,
    strict: bool,
}

impl Bootstrapper {
    /// Create a new bootstrapper for `project_dir` using the given base interpreter.
    pub fn new(project_dir: PathBuf, python: PathBuf) -> Self {
        Self {
            project_dir,
            python,
            venv_dir: PathBuf::from(DEFAULT_VENV_DIR),
            requirements: PathBuf::from(DEFAULT_REQUIREMENTS),
            strict: false,
        }
    }

    /// Set the venv directory (relative to the project directory).
    pub fn venv_dir(mut self, venv_dir: PathBuf) -> Self {
        self.venv_dir = venv_dir;
        self
    }

    /// Set the requirements manifest (relative to the project directory).
    pub fn requirements(mut self, requirements: PathBuf) -> Self {
        self.requirements = requirements;
        self
    }

    /// Stop at the first failing step.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn venv_path(&self) -> PathBuf {
        self.project_dir.join(&self.venv_dir)
    }

    pub fn requirements_path(&self) -> PathBuf {
        self.project_dir.join(&self.requirements)
    }

    /// Arguments passed to the base interpreter to create the venv.
    pub fn venv_args(&self) -> Vec<OsString> {
        vec!["-m".into(), "venv".into(), self.venv_path().into_os_string()]
    }

    /// Arguments passed to the venv interpreter to install the manifest.
    pub fn install_args(&self) -> Vec<OsString> {
        vec![
            "-m".into(),
            "pip".into(),
            "install".into(),
            "-r".into(),
            self.requirements_path().into_os_string(),
        ]
    }

    /// Run every step in order.
    ///
    /// A failing step does not stop the following ones unless `strict` is set.
    pub fn run(&self) -> SetupReport {
        let mut report = SetupReport::default();

        println!("Setting up virtual environment...");
        let outcome = self.run_step(SetupStep::CreateVenv, &self.python, self.venv_args());
        let failed = !outcome.success;
        report.outcomes.push(outcome);
        if failed && self.strict {
            return report;
        }

        // The venv interpreter replaces shell activation.
        let python = venv_python(&self.venv_path());

        println!(
            "Installing dependencies from {}...",
            self.requirements.display()
        );
        let outcome = self.run_step(SetupStep::InstallRequirements, &python, self.install_args());
        report.outcomes.push(outcome);

        report
    }

    fn run_step(&self, step: SetupStep, program: &Path, args: Vec<OsString>) -> StepOutcome {
        tracing::info!(
            %step,
            "executing: {} {}",
            program.display(),
            args.iter()
                .map(|a| a.to_string_lossy())
                .collect::<Vec<_>>()
                .join(" ")
        );

        let result = Command::new(program)
            .args(&args)
            .current_dir(&self.project_dir)
            .status();

        match result {
            Ok(status) if status.success() => StepOutcome {
                step,
                success: true,
                detail: None,
            },
            Ok(status) => {
                tracing::warn!(%step, code = ?status.code(), "step failed");
                StepOutcome {
                    step,
                    success: false,
                    detail: Some(format!("exit code: {:?}", status.code())),
                }
            }
            Err(e) => {
                tracing::warn!(%step, error = %e, "could not start {}", program.display());
                StepOutcome {
                    step,
                    success: false,
                    detail: Some(format!("{}: {}", program.display(), e)),
                }
            }
        }
    }
}

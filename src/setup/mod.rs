//! Python environment bootstrap for the audit tool.
//!
//! Creates a virtual environment, installs the requirements manifest into
//! it and reports how each step went.

mod bootstrap;
mod detect;

pub use bootstrap::{
    Bootstrapper, SetupReport, SetupStep, StepOutcome, DEFAULT_REQUIREMENTS, DEFAULT_VENV_DIR,
};
pub use detect::{find_python, venv_python};

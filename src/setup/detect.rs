//! Python interpreter detection.

use std::path::{Path, PathBuf};

/// Interpreter names searched on PATH, in order.
const PYTHON_CANDIDATES: &[&str] = &["python3", "python"];

/// Attempt to find a Python interpreter.
///
/// Detection order:
/// 1. `python3` on PATH
/// 2. `python` on PATH
pub fn find_python() -> Option<PathBuf> {
    PYTHON_CANDIDATES
        .iter()
        .find_map(|name| which::which(name).ok())
}

/// Path of the interpreter inside a virtual environment.
pub fn venv_python(venv_dir: &Path) -> PathBuf {
    #[cfg(windows)]
    {
        venv_dir.join("Scripts").join("python.exe")
    }

    #[cfg(not(windows))]
    {
        venv_dir.join("bin").join("python")
    }
}

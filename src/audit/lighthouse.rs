//! Page speed measurement through the external `lighthouse` CLI.

use super::report::PageSpeed;
use crate::error::{Result, SeoAuditError};
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use url::Url;

/// Reported whenever Lighthouse cannot produce a measurement.
pub const LIGHTHOUSE_UNAVAILABLE: &str = "Lighthouse API Not Configured";

/// Reported when the user skipped the measurement.
pub const LIGHTHOUSE_SKIPPED: &str = "Page speed check skipped";

/// Attempt to find the Lighthouse executable.
///
/// Detection order:
/// 1. Configured path, if it exists
/// 2. PATH search (via `which`)
pub fn find_lighthouse(configured: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = configured {
        if path.exists() {
            return Some(path.to_path_buf());
        }
        tracing::warn!(path = %path.display(), "configured lighthouse path does not exist");
    }

    which::which("lighthouse").ok()
}

/// Wrapper for executing Lighthouse.
pub struct LighthouseRunner {
    executable: PathBuf,
}

impl LighthouseRunner {
    pub fn new(executable: PathBuf) -> Self {
        Self { executable }
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Run a Lighthouse audit and return its JSON report.
    pub fn run(&self, url: &Url) -> Result<String> {
        let args = lighthouse_args(url);
        tracing::info!(
            "executing: {} {}",
            self.executable.display(),
            args.join(" ")
        );

        let output = Command::new(&self.executable)
            .args(args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()?;

        log_output(&output);

        if !output.status.success() {
            return Err(SeoAuditError::LighthouseFailed(format!(
                "exited with code {:?}: {}",
                output.status.code(),
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Measure First Contentful Paint. Never fails; errors become `Unavailable`.
    pub fn analyze_page_speed(&self, url: &Url) -> PageSpeed {
        let fcp = self
            .run(url)
            .and_then(|report| parse_first_contentful_paint(&report));

        match fcp {
            Ok(Some(value)) => PageSpeed::Measured {
                first_contentful_paint: value,
            },
            Ok(None) => unavailable(LIGHTHOUSE_UNAVAILABLE),
            Err(e) => {
                tracing::info!(error = %e, "lighthouse run failed");
                unavailable(LIGHTHOUSE_UNAVAILABLE)
            }
        }
    }
}

/// Command line passed to Lighthouse for `url`.
fn lighthouse_args(url: &Url) -> [&str; 4] {
    [
        url.as_str(),
        "--quiet",
        "--output=json",
        "--chrome-flags=--headless",
    ]
}

pub fn unavailable(reason: &str) -> PageSpeed {
    PageSpeed::Unavailable {
        error: reason.to_string(),
    }
}

/// Extract `audits["first-contentful-paint"].displayValue` from a report.
pub fn parse_first_contentful_paint(report: &str) -> Result<Option<String>> {
    let json: serde_json::Value = serde_json::from_str(report)?;
    Ok(json
        .pointer("/audits/first-contentful-paint/displayValue")
        .and_then(|v| v.as_str())
        .map(str::to_string))
}

fn log_output(output: &Output) {
    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.is_empty() {
        tracing::debug!("lighthouse stderr:\n{}", stderr);
    }
    tracing::trace!("lighthouse stdout:\n{}", String::from_utf8_lossy(&output.stdout));
}

//! `seo-audit audit` command implementation.

use crate::audit::{validate_url, Auditor};
use crate::config::AuditSettings;
use crate::error::Result;
use std::fs;
use std::path::PathBuf;

/// Output format for the audit report.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Arguments for the audit command.
pub struct AuditArgs {
    pub url: String,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub no_lighthouse: bool,
    pub settings: AuditSettings,
}

/// Execute the audit command.
pub fn execute(args: AuditArgs) -> Result<()> {
    let url = validate_url(&args.url)?;

    eprintln!("Fetching data... Please wait.");
    let report = Auditor::new(&args.settings)?
        .skip_lighthouse(args.no_lighthouse)
        .run(&url)?;

    match args.format {
        OutputFormat::Text => print!("{}", report.render_text()?),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if let Some(path) = args.output {
        fs::write(&path, serde_json::to_string_pretty(&report)?)?;
        eprintln!("Report written to {}", path.display());
    }

    Ok(())
}

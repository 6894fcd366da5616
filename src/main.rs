//! seo-audit CLI entry point.

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{generate, Shell};
use seo_audit::commands::{audit, setup};
use seo_audit::config::Config;
use seo_audit::error::Result;
use seo_audit::setup::{DEFAULT_REQUIREMENTS, DEFAULT_VENV_DIR};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "seo-audit")]
#[command(about = "One Page SEO Audit CLI")]
#[command(version)]
#[command(author)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a seo-audit.toml (default: search current directory and parents)
    #[arg(long, global = true, env = "SEO_AUDIT_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command {
    /// Create the virtual environment and install requirements
    Setup {
        /// Project directory
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Virtual environment directory
        #[arg(long)]
        venv: Option<PathBuf>,

        /// Requirements manifest to install
        #[arg(short, long)]
        requirements: Option<PathBuf>,

        /// Base Python interpreter (overrides auto-detection)
        #[arg(long, env = "SEO_AUDIT_PYTHON")]
        python: Option<PathBuf>,

        /// Stop at the first failing step
        #[arg(long)]
        strict: bool,
    },

    /// Run a one-page SEO audit
    Audit {
        /// Website URL to analyze
        url: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Also write the JSON report to this file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip the Lighthouse page speed check
        #[arg(long)]
        no_lighthouse: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

impl From<OutputFormat> for audit::OutputFormat {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Text => audit::OutputFormat::Text,
            OutputFormat::Json => audit::OutputFormat::Json,
        }
    }
}

fn main() {
    if let Err(e) = run_cli() {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

/// Map `-v` occurrences to a log filter; `RUST_LOG` wins when set.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("seo_audit={level}").into());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Explicit --config must exist; otherwise search upwards from cwd
    let config = match cli.config {
        Some(ref path) => Config::load_file(path)?,
        None => Config::load_from_cwd()?.unwrap_or_default(),
    };

    match cli.command {
        Command::Setup {
            path,
            venv,
            requirements,
            python,
            strict,
        } => {
            let run_hint = config.setup.run_hint().to_string();
            setup::execute(setup::SetupArgs {
                path,
                venv: venv
                    .or(config.setup.venv_dir)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_VENV_DIR)),
                requirements: requirements
                    .or(config.setup.requirements)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_REQUIREMENTS)),
                python: python.or(config.setup.python),
                strict,
                run_hint,
            })
        }

        Command::Audit {
            url,
            format,
            output,
            no_lighthouse,
        } => audit::execute(audit::AuditArgs {
            url,
            format: format.into(),
            output,
            no_lighthouse,
            settings: config.audit,
        }),

        Command::Completions { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "seo-audit", &mut io::stdout());
            Ok(())
        }
    }
}

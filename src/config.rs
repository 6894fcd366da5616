//! Configuration file handling for seo-audit.

use crate::error::{Result, SeoAuditError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// The configuration file name.
pub const CONFIG_FILE_NAME: &str = "seo-audit.toml";

/// Default run hint printed once setup finishes.
pub const DEFAULT_RUN_HINT: &str = "streamlit run seo_audit.py";

/// Configuration from seo-audit.toml.
#[derive(Debug, Deserialize, Serialize, Default, Clone)]
pub struct Config {
    #[serde(default)]
    pub setup: SetupSettings,

    #[serde(default)]
    pub audit: AuditSettings,
}

/// `[setup]` section.
#[derive(Debug, Deserialize, Serialize, Default, Clone)]
pub struct SetupSettings {
    /// Python interpreter used to create the venv
    pub python: Option<PathBuf>,

    /// Virtual environment directory (default: "venv")
    pub venv_dir: Option<PathBuf>,

    /// Requirements manifest (default: "requirements.txt")
    pub requirements: Option<PathBuf>,

    /// Command shown in the completion message
    pub run_hint: Option<String>,
}

impl SetupSettings {
    pub fn run_hint(&self) -> &str {
        self.run_hint.as_deref().unwrap_or(DEFAULT_RUN_HINT)
    }
}

/// `[audit]` section.
#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(default)]
pub struct AuditSettings {
    pub user_agent: String,
    pub page_timeout_secs: u64,
    pub probe_timeout_secs: u64,
    pub max_redirects: usize,
    pub lighthouse_path: Option<PathBuf>,
}

impl Default for AuditSettings {
    fn default() -> Self {
        Self {
            user_agent: format!("seo-audit/{}", env!("CARGO_PKG_VERSION")),
            page_timeout_secs: 10,
            probe_timeout_secs: 5,
            max_redirects: 10,
            lighthouse_path: None,
        }
    }
}

impl AuditSettings {
    pub fn page_timeout(&self) -> Duration {
        Duration::from_secs(self.page_timeout_secs)
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }
}

impl Config {
    /// Load configuration from seo-audit.toml in the given directory or its parents.
    ///
    /// Returns `Ok(None)` if no configuration file is found.
    pub fn load(start_dir: &Path) -> Result<Option<Self>> {
        let mut current = start_dir
            .canonicalize()
            .unwrap_or_else(|_| start_dir.to_path_buf());

        loop {
            let config_path = current.join(CONFIG_FILE_NAME);
            if config_path.exists() {
                tracing::debug!(path = %config_path.display(), "loading config");
                return Self::load_file(&config_path).map(Some);
            }

            if !current.pop() {
                break;
            }
        }

        Ok(None)
    }

    /// Load configuration from the current directory.
    pub fn load_from_cwd() -> Result<Option<Self>> {
        let cwd = std::env::current_dir()?;
        Self::load(&cwd)
    }

    /// Load configuration from an explicit file path.
    pub fn load_file(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(SeoAuditError::ConfigError(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        if config.audit.max_redirects == 0 {
            return Err(SeoAuditError::ConfigError(
                "audit.max_redirects must be at least 1".into(),
            ));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_complete_config() {
        let toml = r#"
[setup]
python = "/usr/bin/python3.12"
venv_dir = ".venv"
requirements = "requirements-dev.txt"
run_hint = "python seo_audit.py"

[audit]
user_agent = "audit-bot/2.0"
page_timeout_secs = 20
probe_timeout_secs = 3
max_redirects = 4
lighthouse_path = "/opt/node/bin/lighthouse"
"#;
        let config = Config::from_toml(toml).unwrap();
        assert_eq!(
            config.setup.python,
            Some(PathBuf::from("/usr/bin/python3.12"))
        );
        assert_eq!(config.setup.venv_dir, Some(PathBuf::from(".venv")));
        assert_eq!(
            config.setup.requirements,
            Some(PathBuf::from("requirements-dev.txt"))
        );
        assert_eq!(config.setup.run_hint(), "python seo_audit.py");
        assert_eq!(config.audit.user_agent, "audit-bot/2.0");
        assert_eq!(config.audit.page_timeout(), Duration::from_secs(20));
        assert_eq!(config.audit.probe_timeout(), Duration::from_secs(3));
        assert_eq!(config.audit.max_redirects, 4);
        assert_eq!(
            config.audit.lighthouse_path,
            Some(PathBuf::from("/opt/node/bin/lighthouse"))
        );
    }

    #[test]
    fn test_parse_minimal_config() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.setup.python, None);
        assert_eq!(config.setup.run_hint(), DEFAULT_RUN_HINT);
        assert_eq!(config.audit.page_timeout_secs, 10);
        assert_eq!(config.audit.probe_timeout_secs, 5);
        assert_eq!(config.audit.max_redirects, 10);
        assert!(config.audit.user_agent.starts_with("seo-audit/"));
    }

    #[test]
    fn test_parse_partial_audit_section() {
        let toml = r#"
[audit]
probe_timeout_secs = 1
"#;
        let config = Config::from_toml(toml).unwrap();
        assert_eq!(config.audit.probe_timeout_secs, 1);
        assert_eq!(config.audit.page_timeout_secs, 10);
    }

    #[test]
    fn test_zero_redirects_rejected() {
        let result = Config::from_toml("[audit]\nmax_redirects = 0\n");
        assert!(matches!(result, Err(SeoAuditError::ConfigError(_))));
    }

    #[test]
    fn test_load_searches_parent_directories() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILE_NAME),
            "[setup]\nrun_hint = \"make run\"\n",
        )
        .unwrap();

        let nested = temp.path().join("site").join("pages");
        fs::create_dir_all(&nested).unwrap();

        let config = Config::load(&nested).unwrap().unwrap();
        assert_eq!(config.setup.run_hint(), "make run");
    }

    #[test]
    fn test_load_returns_none_when_not_found() {
        let temp = TempDir::new().unwrap();
        assert!(Config::load(temp.path()).unwrap().is_none());
    }

    #[test]
    fn test_load_file_missing() {
        let temp = TempDir::new().unwrap();
        let result = Config::load_file(&temp.path().join("nope.toml"));
        assert!(matches!(result, Err(SeoAuditError::ConfigError(_))));
    }

    #[test]
    fn test_parse_invalid_toml() {
        let result = Config::from_toml("this is not valid toml [[[");
        assert!(result.is_err());
    }
}

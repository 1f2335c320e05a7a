//! Project configuration file support for promptsmith.
//!
//! Loads configuration from `promptsmith.toml` in the working directory.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use promptsmith_credentials::DEFAULT_SECRETS_FILE;
use promptsmith_critic::{ClientSettings, DEFAULT_API_BASE, DEFAULT_MODEL};

/// The config file name
pub const CONFIG_FILE_NAME: &str = "promptsmith.toml";

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8501;

/// Project-level configuration loaded from `promptsmith.toml`
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Model identifier sent with every request
    pub model: Option<String>,
    /// API root, e.g. `https://api.openai.com/v1`
    pub api_base: Option<String>,
    /// Secrets file path; relative paths resolve against the working directory
    pub secrets_file: Option<PathBuf>,
    /// Web server settings
    #[serde(default)]
    pub server: ServerConfig,
}

/// Configuration for `promptsmith serve`
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

impl ProjectConfig {
    /// Load configuration from the working directory.
    ///
    /// Returns:
    /// - `Ok(Some(config))` if file exists and parses successfully
    /// - `Ok(None)` if file does not exist
    /// - `Err(...)` if file exists but fails to parse (hard error)
    pub fn load(working_dir: &Path) -> Result<Option<Self>> {
        let config_path = working_dir.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;

        let config: ProjectConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;

        Ok(Some(config))
    }

    /// Effective model. Priority: CLI flag > config file > default
    pub fn model(&self, cli: Option<&str>) -> String {
        cli.or(self.model.as_deref())
            .unwrap_or(DEFAULT_MODEL)
            .to_string()
    }

    /// Effective API root. Priority: config file > default
    pub fn api_base(&self) -> String {
        self.api_base
            .as_deref()
            .unwrap_or(DEFAULT_API_BASE)
            .to_string()
    }

    /// Absolute path of the secrets file
    pub fn secrets_path(&self, working_dir: &Path) -> PathBuf {
        let path = self
            .secrets_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SECRETS_FILE));
        if path.is_absolute() {
            path
        } else {
            working_dir.join(path)
        }
    }

    pub fn client_settings(&self, cli_model: Option<&str>) -> ClientSettings {
        ClientSettings::default()
            .with_model(self.model(cli_model))
            .with_api_base(self.api_base())
    }

    /// Effective bind host. Priority: CLI flag > config file > default
    pub fn host(&self, cli: Option<&str>) -> String {
        cli.or(self.server.host.as_deref())
            .unwrap_or(DEFAULT_HOST)
            .to_string()
    }

    /// Effective bind port. Priority: CLI flag > config file > default
    pub fn port(&self, cli: Option<u16>) -> u16 {
        cli.or(self.server.port).unwrap_or(DEFAULT_PORT)
    }
}

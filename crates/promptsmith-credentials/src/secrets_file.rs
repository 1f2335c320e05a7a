//! TOML secrets file, the deployment-side secret store.
//!
//! The file holds top-level string keys:
//!
//! ```toml
//! OPENAI_API_KEY = "sk-..."
//! ```

use std::path::PathBuf;

use tracing::debug;

use crate::{CredentialProvider, ProviderError};

/// Default location of the secrets file, relative to the working directory
pub const DEFAULT_SECRETS_FILE: &str = ".promptsmith/secrets.toml";

/// Reads credentials from a TOML secrets file
#[derive(Debug, Clone)]
pub struct SecretsFileProvider {
    path: PathBuf,
}

impl SecretsFileProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn load(&self) -> Result<Option<toml::Table>, ProviderError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "No secrets file");
            return Ok(None);
        }

        let content = std::fs::read_to_string(&self.path).map_err(|source| ProviderError::Read {
            path: self.path.clone(),
            source,
        })?;

        let table = content.parse::<toml::Table>().map_err(|e| ProviderError::Parse {
            path: self.path.clone(),
            message: e.to_string(),
        })?;

        Ok(Some(table))
    }
}

impl CredentialProvider for SecretsFileProvider {
    fn name(&self) -> &str {
        "secrets file"
    }

    fn try_get(&self, key: &str) -> Result<Option<String>, ProviderError> {
        let Some(table) = self.load()? else {
            return Ok(None);
        };

        match table.get(key) {
            None => Ok(None),
            Some(toml::Value::String(value)) if value.is_empty() => Ok(None),
            Some(toml::Value::String(value)) => Ok(Some(value.clone())),
            Some(_) => Err(ProviderError::NotAString(key.to_string())),
        }
    }
}

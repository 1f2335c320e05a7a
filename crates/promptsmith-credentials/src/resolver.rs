use std::path::PathBuf;

use tracing::{debug, warn};

use crate::{Credential, CredentialProvider, EnvProvider, SecretsFileProvider};

/// Name of the credential looked up by [`resolve_credential`]
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";

/// A credential together with the source that supplied it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCredential {
    pub credential: Credential,
    pub source: String,
}

/// Consults credential providers in a fixed priority order
pub struct CredentialResolver {
    providers: Vec<Box<dyn CredentialProvider>>,
}

impl CredentialResolver {
    pub fn new(providers: Vec<Box<dyn CredentialProvider>>) -> Self {
        Self { providers }
    }

    /// Environment first, then the secrets file at `secrets_path`.
    pub fn standard(secrets_path: impl Into<PathBuf>) -> Self {
        Self::new(vec![
            Box::new(EnvProvider::new()),
            Box::new(SecretsFileProvider::new(secrets_path)),
        ])
    }

    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Return the first non-empty value for `key`.
    ///
    /// Providers after the first hit are not consulted. A provider that
    /// fails is treated as having no value; resolution itself never fails.
    pub fn resolve(&self, key: &str) -> Option<ResolvedCredential> {
        for provider in &self.providers {
            match provider.try_get(key) {
                Ok(Some(value)) if !value.is_empty() => {
                    debug!(key, source = provider.name(), "Credential resolved");
                    return Some(ResolvedCredential {
                        credential: Credential::new(value),
                        source: provider.name().to_string(),
                    });
                }
                Ok(_) => {
                    debug!(key, source = provider.name(), "Credential not found");
                }
                Err(e) => {
                    // Masked as absence; surfaced here so a broken store is not silent.
                    warn!(key, source = provider.name(), error = %e, "Credential source failed");
                }
            }
        }
        None
    }
}

/// Resolve [`API_KEY_VAR`] from the environment, then the secrets file.
pub fn resolve_credential(secrets_path: impl Into<PathBuf>) -> Option<ResolvedCredential> {
    CredentialResolver::standard(secrets_path).resolve(API_KEY_VAR)
}

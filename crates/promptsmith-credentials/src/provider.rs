use std::path::PathBuf;
use thiserror::Error;

/// Errors a credential source can hit while looking up a key.
///
/// The resolver never surfaces these to its caller; they only reach the log.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Failed to read secrets file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse secrets file {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Secret '{0}' is not a string")]
    NotAString(String),

    #[error("Credential source unavailable: {0}")]
    Unavailable(String),
}

/// An opaque API token.
///
/// Formatting never reveals the value; call [`Credential::expose`] to get
/// the raw token for an outbound request.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

impl std::fmt::Display for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("<redacted>")
    }
}

/// A named source consulted during credential resolution
pub trait CredentialProvider: Send + Sync {
    /// Human-readable name of the source (e.g., "environment", "secrets file")
    fn name(&self) -> &str;

    /// Look up `key`.
    ///
    /// `Ok(None)` means the source has no value for the key. Empty values
    /// count as absent; the resolver also filters them.
    fn try_get(&self, key: &str) -> Result<Option<String>, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credential_formatting_is_redacted() {
        let credential = Credential::new("sk-live-secret");
        assert_eq!(format!("{}", credential), "<redacted>");
        assert!(!format!("{:?}", credential).contains("sk-live-secret"));
        assert_eq!(credential.expose(), "sk-live-secret");
    }
}

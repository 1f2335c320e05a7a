use std::env;

use crate::{CredentialProvider, ProviderError};

/// Reads credentials from the process environment
#[derive(Debug, Clone, Default)]
pub struct EnvProvider;

impl EnvProvider {
    pub fn new() -> Self {
        Self
    }
}

impl CredentialProvider for EnvProvider {
    fn name(&self) -> &str {
        "environment"
    }

    fn try_get(&self, key: &str) -> Result<Option<String>, ProviderError> {
        // Unset and non-UTF-8 values are both treated as absent.
        Ok(env::var(key).ok().filter(|v| !v.is_empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reads_set_variable() {
        let key = "PROMPTSMITH_TEST_ENV_PROVIDER_SET";
        env::set_var(key, "sk-env-456");
        let value = EnvProvider::new().try_get(key).unwrap();
        env::remove_var(key);
        assert_eq!(value.as_deref(), Some("sk-env-456"));
    }

    #[test]
    fn test_empty_variable_is_absent() {
        let key = "PROMPTSMITH_TEST_ENV_PROVIDER_EMPTY";
        env::set_var(key, "");
        let value = EnvProvider::new().try_get(key).unwrap();
        env::remove_var(key);
        assert_eq!(value, None);
    }

    #[test]
    fn test_unset_variable_is_absent() {
        let value = EnvProvider::new()
            .try_get("PROMPTSMITH_TEST_ENV_PROVIDER_NEVER_SET")
            .unwrap();
        assert_eq!(value, None);
    }
}

use std::collections::HashMap;

use crate::{CredentialProvider, ProviderError};

/// In-memory credential source
#[derive(Debug, Clone, Default)]
pub struct StaticProvider {
    name: String,
    values: HashMap<String, String>,
}

impl StaticProvider {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: HashMap::new(),
        }
    }

    pub fn with_value(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl CredentialProvider for StaticProvider {
    fn name(&self) -> &str {
        &self.name
    }

    fn try_get(&self, key: &str) -> Result<Option<String>, ProviderError> {
        Ok(self.values.get(key).filter(|v| !v.is_empty()).cloned())
    }
}

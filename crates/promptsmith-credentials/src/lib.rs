mod env;
mod memory;
mod provider;
mod resolver;
mod secrets_file;

pub use env::EnvProvider;
pub use memory::StaticProvider;
pub use provider::{Credential, CredentialProvider, ProviderError};
pub use resolver::{resolve_credential, CredentialResolver, ResolvedCredential, API_KEY_VAR};
pub use secrets_file::{SecretsFileProvider, DEFAULT_SECRETS_FILE};

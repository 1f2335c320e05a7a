use std::env;
use std::fs;

use promptsmith_credentials::{CredentialResolver, EnvProvider, SecretsFileProvider};
use tempfile::TempDir;

/// Helper: write a secrets file holding `key = value` into a temp directory.
fn secrets_dir(key: &str, value: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir_all(dir.path().join(".promptsmith")).unwrap();
    fs::write(
        dir.path().join(".promptsmith/secrets.toml"),
        format!("{} = \"{}\"\n", key, value),
    )
    .unwrap();
    dir
}

#[test]
fn test_standard_chain_reads_secrets_file_when_env_unset() {
    let key = "PROMPTSMITH_IT_SECRET_ONLY";
    env::remove_var(key);
    let dir = secrets_dir(key, "sk-test-123");

    let resolver = CredentialResolver::standard(dir.path().join(".promptsmith/secrets.toml"));
    let resolved = resolver.resolve(key).unwrap();

    assert_eq!(resolved.credential.expose(), "sk-test-123");
    assert_eq!(resolved.source, "secrets file");
}

#[test]
fn test_standard_chain_prefers_environment() {
    let key = "PROMPTSMITH_IT_ENV_WINS";
    let dir = secrets_dir(key, "sk-secret-789");
    env::set_var(key, "sk-env-456");

    let resolver = CredentialResolver::standard(dir.path().join(".promptsmith/secrets.toml"));
    let resolved = resolver.resolve(key);
    env::remove_var(key);

    let resolved = resolved.unwrap();
    assert_eq!(resolved.credential.expose(), "sk-env-456");
    assert_eq!(resolved.source, "environment");
}

#[test]
fn test_standard_chain_absent_everywhere() {
    let key = "PROMPTSMITH_IT_NOWHERE";
    env::remove_var(key);
    let dir = TempDir::new().unwrap();

    let resolver = CredentialResolver::standard(dir.path().join("missing.toml"));
    assert!(resolver.resolve(key).is_none());
    // Unchanged state, unchanged answer.
    assert!(resolver.resolve(key).is_none());
}

#[test]
fn test_malformed_secrets_file_is_masked_as_absence() {
    let key = "PROMPTSMITH_IT_MALFORMED";
    env::remove_var(key);
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("secrets.toml");
    fs::write(&path, "[[[ not toml").unwrap();

    let resolver = CredentialResolver::new(vec![
        Box::new(EnvProvider::new()),
        Box::new(SecretsFileProvider::new(&path)),
    ]);
    assert!(resolver.resolve(key).is_none());
}

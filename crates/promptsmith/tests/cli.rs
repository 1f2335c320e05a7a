use std::fs;
use std::path::Path;
use std::process::Stdio;

use serde_json::{json, Value};
use tempfile::TempDir;
use tokio::process::Command;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Helper: a working directory whose config points the client at `api_base`.
fn workspace(api_base: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("promptsmith.toml"),
        format!("api_base = \"{}\"\n", api_base),
    )
    .unwrap();
    dir
}

fn promptsmith(working_dir: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_promptsmith"));
    cmd.arg("-d")
        .arg(working_dir)
        .arg("--log-format")
        .arg("compact")
        .env_remove("OPENAI_API_KEY")
        .env_remove("RUST_LOG")
        .stdin(Stdio::null())
        .kill_on_drop(true);
    cmd
}

fn output_body(text: &str) -> Value {
    json!({
        "output": [{
            "type": "message",
            "role": "assistant",
            "content": [{"type": "output_text", "text": text}]
        }]
    })
}

#[tokio::test]
async fn test_missing_credential_halts_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(output_body("unused")))
        .expect(0)
        .mount(&server)
        .await;

    let dir = workspace(&format!("{}/v1", server.uri()));
    let output = promptsmith(dir.path())
        .args(["critique", "--prompt", "write me an email"])
        .output()
        .await
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("OpenAI API key not found!"), "{}", stderr);
    assert!(stderr.contains("OPENAI_API_KEY=your-key-here"), "{}", stderr);
}

#[tokio::test]
async fn test_one_shot_with_dotenv_key() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/responses"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(output_body("## What I Found\nClear enough.")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let dir = workspace(&format!("{}/v1", server.uri()));
    fs::write(dir.path().join(".env"), "OPENAI_API_KEY=sk-dotenv-1\n").unwrap();

    let output = promptsmith(dir.path())
        .args(["critique", "--prompt", "write me an email", "--json"])
        .output()
        .await
        .unwrap();

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let body: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(body["ok"], true);
    assert_eq!(body["result"], "## What I Found\nClear enough.");

    let requests = server.received_requests().await.unwrap();
    assert_eq!(
        requests[0].headers.get("authorization").unwrap(),
        "Bearer sk-dotenv-1"
    );
}

#[tokio::test]
async fn test_one_shot_with_secrets_file_reports_request_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/responses"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "error": {"message": "The server had an error"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let dir = workspace(&format!("{}/v1", server.uri()));
    fs::create_dir_all(dir.path().join(".promptsmith")).unwrap();
    fs::write(
        dir.path().join(".promptsmith/secrets.toml"),
        "OPENAI_API_KEY = \"sk-test-123\"\n",
    )
    .unwrap();

    let output = promptsmith(dir.path())
        .args(["critique", "--prompt", "hello"])
        .output()
        .await
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.trim_end(), "Error: API returned 500: The server had an error");
}

#[tokio::test]
async fn test_blank_prompt_is_refused() {
    let dir = workspace("http://127.0.0.1:9/v1");

    let output = promptsmith(dir.path())
        .env("OPENAI_API_KEY", "sk-test-123")
        .args(["critique", "--prompt", "   "])
        .output()
        .await
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Please enter a prompt!"));
}

#[tokio::test]
async fn test_repl_exits_on_end_of_input() {
    let dir = workspace("http://127.0.0.1:9/v1");

    let output = promptsmith(dir.path())
        .env("OPENAI_API_KEY", "sk-test-123")
        .output()
        .await
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Enter your prompt (or 'quit' to exit):"));
    assert!(stdout.contains("Goodbye!"));
}

#[tokio::test]
async fn test_malformed_dotenv_is_reported_not_fatal() {
    let dir = workspace("http://127.0.0.1:9/v1");
    fs::write(dir.path().join(".env"), "lol$wut\n").unwrap();

    let output = promptsmith(dir.path())
        .env("OPENAI_API_KEY", "sk-test-123")
        .output()
        .await
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load .env file"), "{}", stderr);
}

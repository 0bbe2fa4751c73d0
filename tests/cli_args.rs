//! Tests for the binary's command line.

mod common;

use common::mock_service::{MockResponse, MockService};
use std::io::Write;
use std::process::{Command, Output, Stdio};

fn explaincode_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_explaincode"))
}

/// Run the binary off the async runtime so the mock service keeps serving.
async fn run_blocking(mut cmd: Command, stdin: Option<&'static str>) -> Output {
    tokio::task::spawn_blocking(move || {
        cmd.stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        let mut child = cmd.spawn().expect("Failed to execute command");
        if let Some(input) = stdin {
            child
                .stdin
                .take()
                .unwrap()
                .write_all(input.as_bytes())
                .unwrap();
        } else {
            drop(child.stdin.take());
        }
        child.wait_with_output().unwrap()
    })
    .await
    .unwrap()
}

#[test]
fn test_help_lists_options() {
    let output = explaincode_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("--language"));
    assert!(stdout.contains("--base-url"));
    assert!(stdout.contains("explain"));
}

#[test]
fn test_unknown_language_is_rejected_by_clap() {
    let output = explaincode_cmd()
        .args(["--language", "ruby", "explain"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ruby"), "{}", stderr);
    assert!(stderr.contains("python"), "{}", stderr);
}

#[test]
fn test_invalid_base_url_exits_with_error() {
    let (_dir, config) = common::temp_config("");
    let output = explaincode_cmd()
        .arg("--config")
        .arg(&config)
        .args(["--base-url", "not a url", "explain"])
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Config validation failed"), "{}", stderr);
}

#[test]
fn test_missing_config_file_exits_with_error() {
    let output = explaincode_cmd()
        .args(["--config", "/nonexistent/explaincode/config.toml", "explain"])
        .stdin(Stdio::null())
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not found"), "{}", stderr);
}

#[tokio::test]
async fn test_explain_subcommand_prints_explanation() {
    let mock = MockService::start().await;
    mock.enqueue_response(MockResponse::explanation("Prints 1")).await;
    let (_dir, config) = common::temp_config("");

    let mut cmd = explaincode_cmd();
    cmd.arg("--config")
        .arg(&config)
        .args(["--base-url", &mock.base_url(), "explain"]);
    let output = run_blocking(cmd, Some("print(1)")).await;

    assert!(output.status.success(), "{:?}", output);
    assert_eq!(String::from_utf8_lossy(&output.stdout).trim_end(), "Prints 1");

    let captured = mock.captured_requests().await;
    assert_eq!(
        captured[0].json(),
        serde_json::json!({ "code": "print(1)", "language": "python" })
    );
}

#[tokio::test]
async fn test_explain_subcommand_reads_file_and_language() {
    let mock = MockService::start().await;
    mock.enqueue_response(MockResponse::explanation("Logs 1")).await;
    let (dir, config) = common::temp_config("");
    let code_path = dir.path().join("snippet.js");
    std::fs::write(&code_path, "console.log(1)").unwrap();

    let mut cmd = explaincode_cmd();
    cmd.arg("--config")
        .arg(&config)
        .args(["--base-url", &mock.base_url(), "--language", "javascript"])
        .arg("--file")
        .arg(&code_path)
        .arg("explain");
    let output = run_blocking(cmd, None).await;

    assert!(output.status.success(), "{:?}", output);
    let captured = mock.captured_requests().await;
    assert_eq!(captured[0].json()["language"], "javascript");
    assert_eq!(captured[0].json()["code"], "console.log(1)");
}

#[tokio::test]
async fn test_explain_subcommand_reports_service_error() {
    let mock = MockService::start().await;
    mock.enqueue_response(MockResponse::detail(500, "server error")).await;
    let (_dir, config) = common::temp_config("");

    let mut cmd = explaincode_cmd();
    cmd.arg("--config")
        .arg(&config)
        .args(["--base-url", &mock.base_url(), "explain"]);
    let output = run_blocking(cmd, Some("print(1)")).await;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: "), "{}", stderr);
    assert!(stderr.contains("server error"), "{}", stderr);
}

//! Tests for the `airtable-fetch` binary: environment handling and exit codes
//!
//! Each test runs the binary with a cleared environment inside a scratch
//! project root, so only the variables and env files set up here are seen.

mod common;

use common::{TEST_API_KEY, TEST_TABLE_ID, api_page};
use serde_json::Value;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn run_binary(root: &Path, vars: &[(&str, &str)]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_airtable-fetch"))
        .current_dir(root)
        .env_clear()
        .envs(vars.iter().copied())
        .output()
        .expect("failed to run airtable-fetch")
}

async fn run_binary_async(root: &Path, vars: Vec<(String, String)>) -> Output {
    let root = root.to_path_buf();
    tokio::task::spawn_blocking(move || {
        let vars: Vec<(&str, &str)> = vars.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
        run_binary(&root, &vars)
    })
    .await
    .expect("binary task panicked")
}

#[test]
fn test_missing_env_exits_with_status_1_and_no_output() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_binary(temp_dir.path(), &[("AIRTABLE_BASE_ID", "appTEST")]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("AIRTABLE_API_KEY"), "stderr: {stderr}");
    assert!(stderr.contains("AIRTABLE_TABLE_ID"), "stderr: {stderr}");
    assert!(!temp_dir.path().join("public").exists());
}

#[test]
fn test_empty_env_values_count_as_missing() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_binary(
        temp_dir.path(),
        &[
            ("AIRTABLE_API_KEY", ""),
            ("AIRTABLE_BASE_ID", "appTEST"),
            ("AIRTABLE_TABLE_ID", TEST_TABLE_ID),
        ],
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(!temp_dir.path().join("public").exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_env_local_preferred_and_process_env_wins() {
    let server = MockServer::start().await;

    // Base id from the process environment, table id from .env.local.
    Mock::given(method("GET"))
        .and(path("/v0/appPROCESS/tblLOCAL"))
        .and(header("Authorization", format!("Bearer {}", TEST_API_KEY).as_str()))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(api_page(&[("rec001", "Alpha")], None)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join(".env.local"),
        format!(
            "AIRTABLE_API_KEY={}\nAIRTABLE_BASE_ID=appFILE\nAIRTABLE_TABLE_ID=tblLOCAL\nAIRTABLE_API_URL={}/v0\n",
            TEST_API_KEY,
            server.uri()
        ),
    )
    .unwrap();
    std::fs::write(
        temp_dir.path().join(".env"),
        "AIRTABLE_API_KEY=wrong\nAIRTABLE_BASE_ID=appDOTENV\nAIRTABLE_TABLE_ID=tblDOTENV\n",
    )
    .unwrap();

    let output = run_binary_async(
        temp_dir.path(),
        vec![("AIRTABLE_BASE_ID".to_string(), "appPROCESS".to_string())],
    )
    .await;

    assert_eq!(
        output.status.code(),
        Some(0),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let out_path = temp_dir
        .path()
        .join("public")
        .join("data")
        .join("ecosystem-table.json");
    let written: Vec<Value> =
        serde_json::from_str(&std::fs::read_to_string(out_path).unwrap()).unwrap();
    assert_eq!(written.len(), 1);
    assert!(written[0].get("createdTime").is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_dotenv_used_when_no_env_local() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v0/appDOTENV/tblDOTENV"))
        .respond_with(ResponseTemplate::new(200).set_body_json(api_page(&[], None)))
        .expect(1)
        .mount(&server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    std::fs::write(
        temp_dir.path().join(".env"),
        format!(
            "AIRTABLE_API_KEY={}\nAIRTABLE_BASE_ID=appDOTENV\nAIRTABLE_TABLE_ID=tblDOTENV\nAIRTABLE_API_URL={}/v0\n",
            TEST_API_KEY,
            server.uri()
        ),
    )
    .unwrap();

    let output = run_binary_async(temp_dir.path(), Vec::new()).await;

    assert_eq!(output.status.code(), Some(0));
    let raw = std::fs::read_to_string(
        temp_dir
            .path()
            .join("public")
            .join("data")
            .join("ecosystem-table.json"),
    )
    .unwrap();
    assert_eq!(raw, "[]");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_api_failure_exits_with_status_1() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("NOT_FOUND"))
        .mount(&server)
        .await;

    let temp_dir = TempDir::new().unwrap();
    let api_url = format!("{}/v0", server.uri());

    let output = run_binary_async(
        temp_dir.path(),
        vec![
            ("AIRTABLE_API_KEY".to_string(), TEST_API_KEY.to_string()),
            ("AIRTABLE_BASE_ID".to_string(), "appTEST".to_string()),
            ("AIRTABLE_TABLE_ID".to_string(), TEST_TABLE_ID.to_string()),
            ("AIRTABLE_API_URL".to_string(), api_url),
        ],
    )
    .await;

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("404"), "stderr: {stderr}");
    assert!(stderr.contains("NOT_FOUND"), "stderr: {stderr}");
    assert!(!temp_dir.path().join("public").exists());
}

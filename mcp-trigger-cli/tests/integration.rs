use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

fn stderr_text(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_endpoints_lists_builtin_tools() {
    let mut cmd = Command::cargo_bin("mcp-trigger").unwrap();
    let output = cmd
        .args(["endpoints", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let options = json["options"].as_array().unwrap();
    assert_eq!(options.len(), 6);
    assert_eq!(options[0]["name"], "Busca cargorias dos Produtos");
    assert_eq!(options[0]["value"], "Busca_cargorias_dos_Produtos");
}

#[test]
fn test_endpoints_text_format() {
    let mut cmd = Command::cargo_bin("mcp-trigger").unwrap();
    let output = cmd.args(["endpoints", "--workflow-id", "W"]).output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("  - Consulta restaurante (Consulta_restaurante)"));
}

#[test]
fn test_endpoints_empty_workflow_id_yields_placeholder() {
    let mut cmd = Command::cargo_bin("mcp-trigger").unwrap();
    let output = cmd
        .args(["endpoints", "--workflow-id", "", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output),
        serde_json::json!({"options": [{"name": "No endpoints found", "value": ""}]})
    );
}

#[test]
fn test_endpoints_from_catalog_file_skips_trigger() {
    let tmp_dir = TempDir::new().unwrap();
    let catalog = tmp_dir.path().join("catalog.json");
    fs::write(
        &catalog,
        r#"{"nodes": [{"name": "MCP Server Trigger"}, {"name": "Foo_Bar"}]}"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("mcp-trigger").unwrap();
    let output = cmd
        .args(["endpoints", "--format", "json", "--catalog", catalog.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output),
        serde_json::json!({"options": [{"name": "Foo Bar", "value": "Foo_Bar"}]})
    );
}

#[test]
fn test_endpoints_broken_catalog_degrades() {
    let tmp_dir = TempDir::new().unwrap();
    let catalog = tmp_dir.path().join("catalog.json");
    fs::write(&catalog, "not json").unwrap();

    let mut cmd = Command::cargo_bin("mcp-trigger").unwrap();
    let output = cmd
        .args(["endpoints", "--format", "json", "--catalog", catalog.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output),
        serde_json::json!({"options": [{"name": "Error loading endpoints", "value": ""}]})
    );
}

#[test]
fn test_invoke_without_endpoint_is_config_error() {
    let mut cmd = Command::cargo_bin("mcp-trigger").unwrap();
    let output = cmd.args(["invoke", "--continue-on-fail"]).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr_text(&output).contains("no endpoint selected to trigger."));
}

#[test]
fn test_invoke_invalid_data_is_config_error() {
    let mut cmd = Command::cargo_bin("mcp-trigger").unwrap();
    cmd.args(["invoke", "--endpoint", "Foo", "--data", "{oops"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn test_invoke_stdout_events_with_json_format_is_config_error() {
    let mut cmd = Command::cargo_bin("mcp-trigger").unwrap();
    let output = cmd
        .args([
            "invoke",
            "--base-url",
            "http://127.0.0.1:1/mcp/",
            "--endpoint",
            "Foo",
            "--events",
            "stdout",
            "--format",
            "json",
        ])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty());
    assert!(stderr_text(&output).contains("--events stdout cannot be combined with --format json"));
}

#[test]
fn test_invoke_unreachable_server_fails_batch() {
    let mut cmd = Command::cargo_bin("mcp-trigger").unwrap();
    let output = cmd
        .args([
            "invoke",
            "--base-url",
            "http://127.0.0.1:1/mcp/",
            "--workflow-id",
            "W",
            "--endpoint",
            "Foo_Bar",
        ])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    assert!(stderr_text(&output).contains("failed to trigger endpoint 'Foo_Bar'"));
}

#[test]
fn test_invoke_continue_on_fail_emits_error_records() {
    let tmp_dir = TempDir::new().unwrap();
    let items = tmp_dir.path().join("items.json");
    fs::write(
        &items,
        r#"[{"dataToSend": {"n": 1}}, {"endpointToTrigger": "Other_Tool"}]"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("mcp-trigger").unwrap();
    let output = cmd
        .args([
            "invoke",
            "--base-url",
            "http://127.0.0.1:1/mcp/",
            "--workflow-id",
            "W",
            "--endpoint",
            "Foo_Bar",
            "--items",
            items.to_str().unwrap(),
            "--continue-on-fail",
            "--format",
            "json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    for group in results {
        let group = group.as_array().unwrap();
        assert_eq!(group.len(), 1);
        let record = group[0].as_object().unwrap();
        assert_eq!(record.len(), 1);
        assert!(record["error"].is_string());
    }
    assert_eq!(json["metrics"]["items"]["continued"], 2);
}

#[test]
fn test_invoke_set_overrides_endpoint() {
    let mut cmd = Command::cargo_bin("mcp-trigger").unwrap();
    let output = cmd
        .args([
            "invoke",
            "--base-url",
            "http://127.0.0.1:1/mcp/",
            "--set",
            "endpointToTrigger=From_Set",
        ])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));
    assert!(stderr_text(&output).contains("'From_Set'"));
}

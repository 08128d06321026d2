//
//  reporte-client
//  tests/cli.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use assert_cmd::Command;
use mockito::Matcher;
use predicates::prelude::*;
use tempfile::TempDir;

/// A `reporte` command isolated from the user's config and environment.
fn reporte(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("reporte").unwrap();
    cmd.env("REPORTE_CONFIG_DIR", config_dir.path())
        .env_remove("REPORTE_API_URL")
        .env_remove("REPORTE_DEBUG");
    cmd
}

#[test]
fn test_version() {
    let dir = TempDir::new().unwrap();
    reporte(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_command_is_usage_error() {
    let dir = TempDir::new().unwrap();
    reporte(&dir).arg("frobnicate").assert().code(2);
}

#[test]
fn test_config_path_honours_override() {
    let dir = TempDir::new().unwrap();
    reporte(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            dir.path().join("config.toml").display().to_string(),
        ));
}

#[test]
fn test_config_set_then_get() {
    let dir = TempDir::new().unwrap();
    reporte(&dir)
        .args(["config", "set", "environment", "dev"])
        .assert()
        .success();
    reporte(&dir)
        .args(["config", "get", "environment"])
        .assert()
        .success()
        .stdout("development\n");

    reporte(&dir)
        .args(["config", "list", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://localhost:5000"));
}

#[test]
fn test_config_set_rejects_unknown_key() {
    let dir = TempDir::new().unwrap();
    reporte(&dir)
        .args(["config", "set", "colour", "blue"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_ping_unreachable_exits_with_server_code() {
    let dir = TempDir::new().unwrap();
    reporte(&dir)
        .args(["ping", "--api-url", "http://127.0.0.1:1"])
        .assert()
        .code(32)
        .stderr(predicate::str::contains("Cannot connect to server at"));
}

#[test]
fn test_ping_reachable() {
    let dir = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    let _mock = server.mock("GET", "/").with_status(404).create();

    reporte(&dir)
        .args(["ping", "--api-url", &server.url()])
        .assert()
        .success();
}

#[test]
fn test_users_list_prints_envelope_as_json() {
    let dir = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("GET", "/users")
        .match_query(Matcher::UrlEncoded("page".into(), "2".into()))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"users":[{"id":1,"email":"ana@example.com"}],"total":1}"#)
        .create();

    reporte(&dir)
        .args(["users", "list", "--page", "2", "--json", "--api-url", &server.url()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"email\": \"ana@example.com\""));

    mock.assert();
}

#[test]
fn test_reports_list_renders_table() {
    let dir = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    let _mock = server
        .mock("GET", "/reports")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"[{"id":4,"title":"Bache en la avenida","status":"pending"}]"#)
        .create();

    reporte(&dir)
        .args(["reports", "list", "--api-url", &server.url()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Bache en la avenida"))
        .stdout(predicate::str::contains("status"));
}

#[test]
fn test_not_found_exit_code() {
    let dir = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    let _mock = server.mock("GET", "/reports/9").with_status(404).create();

    reporte(&dir)
        .args(["reports", "view", "9", "--api-url", &server.url()])
        .assert()
        .code(8)
        .stderr(predicate::str::contains("Resource not found"));
}

#[test]
fn test_server_error_exit_code() {
    let dir = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    let _mock = server.mock("GET", "/stats/overview").with_status(503).create();

    reporte(&dir)
        .args(["stats", "overview", "--api-url", &server.url()])
        .assert()
        .code(32);
}

#[test]
fn test_api_command_sends_fields_as_json() {
    let dir = TempDir::new().unwrap();
    let mut server = mockito::Server::new();
    let mock = server
        .mock("POST", "/reports/12/rate")
        .match_header("content-type", "application/json")
        .match_body(Matcher::Json(serde_json::json!({"rating": 5})))
        .with_status(204)
        .create();

    reporte(&dir)
        .args([
            "api",
            "-X",
            "POST",
            "/reports/12/rate",
            "-F",
            "rating=5",
            "--json",
            "--api-url",
            &server.url(),
        ])
        .assert()
        .success()
        .stdout("null\n");

    mock.assert();
}

#[test]
fn test_completion_bash() {
    let dir = TempDir::new().unwrap();
    reporte(&dir)
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("reporte"));
}

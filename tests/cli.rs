use assert_cmd::Command;
use mockito::Server;
use predicates::prelude::*;
use serde_json::json;

fn flatlinectl() -> Command {
    Command::cargo_bin("flatlinectl").expect("binary built")
}

#[test]
fn purge_succeeds_end_to_end() {
    let mut server = Server::new();
    let login = server
        .mock("POST", "/api/v1/auth/login")
        .with_status(200)
        .with_body(json!({"payload": {"access_token": "abc123"}}).to_string())
        .create();
    let maintenance = server
        .mock("GET", "/api/v1/maintenance/delete-expired-jwt")
        .match_header("authorization", "Bearer abc123")
        .with_status(200)
        .with_body(json!({"deleted": 5}).to_string())
        .create();

    let base_url = format!("{}/", server.url());
    flatlinectl()
        .args([base_url.as_str(), "admin", "secret"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Logging in as admin"))
        .stdout(predicate::str::contains(
            "Authenticated. Deleting expired tokens...",
        ))
        .stdout(predicate::str::contains(r#"response={"deleted":5}"#));

    login.assert();
    maintenance.assert();
}

#[test]
fn rejected_login_exits_one_without_touching_maintenance() {
    let mut server = Server::new();
    server
        .mock("POST", "/api/v1/auth/login")
        .with_status(401)
        .with_body(json!({"message": "invalid credentials"}).to_string())
        .create();
    let maintenance = server
        .mock("GET", "/api/v1/maintenance/delete-expired-jwt")
        .expect(0)
        .create();

    flatlinectl()
        .args([server.url().as_str(), "admin", "wrong"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Login failed: 401"));

    maintenance.assert();
}

#[test]
fn empty_maintenance_payload_exits_one() {
    let mut server = Server::new();
    server
        .mock("POST", "/api/v1/auth/login")
        .with_status(200)
        .with_body(json!({"payload": {"access_token": "abc123"}}).to_string())
        .create();
    server
        .mock("GET", "/api/v1/maintenance/delete-expired-jwt")
        .with_status(200)
        .with_body("{}")
        .create();

    flatlinectl()
        .args([server.url().as_str(), "admin", "secret"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("empty response"));
}

#[test]
fn failing_maintenance_status_exits_one() {
    let mut server = Server::new();
    server
        .mock("POST", "/api/v1/auth/login")
        .with_status(200)
        .with_body(json!({"payload": {"access_token": "abc123"}}).to_string())
        .create();
    server
        .mock("GET", "/api/v1/maintenance/delete-expired-jwt")
        .with_status(503)
        .create();

    flatlinectl()
        .args([server.url().as_str(), "admin", "secret"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("failed to delete expired jwt"));
}

#[test]
fn missing_arguments_fail_with_usage_error() {
    flatlinectl()
        .arg("http://localhost:8080")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

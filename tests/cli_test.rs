//! Integration tests for the todofile command line interface.
//!
//! These cover argument parsing and fatal startup failure; the serving path
//! itself is exercised by the router-level tests in `api_test.rs`.

use assert_cmd::Command;

#[test]
fn test_help() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_todofile"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("Port to listen on"))
        .stdout(predicates::str::contains("--file"));
}

#[test]
fn test_version() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_todofile"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("todofile"));
}

#[test]
fn test_invalid_port_rejected() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_todofile"));
    cmd.arg("--port").arg("notaport");
    cmd.assert().failure();
}

#[test]
fn test_startup_fails_when_file_cannot_be_created() {
    let temp = tempfile::tempdir().unwrap();
    let bad_path = temp.path().join("no-such-dir").join("todos.json");

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_todofile"));
    cmd.arg("--file").arg(&bad_path);
    cmd.assert()
        .failure()
        .stderr(predicates::str::contains("failed to initialize todo file"));
}

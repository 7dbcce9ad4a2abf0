//! Integration tests for the `netinv` CLI binary.
//!
//! These cover argument parsing, help output, shell completions and
//! configuration handling without starting the HTTP server.
#![allow(clippy::unwrap_used)]

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────

/// Build a [`Command`] for the `netinv` binary with env isolation.
///
/// Clears `NETINV_*` overrides and points config directories at a
/// nonexistent path so tests never touch the user's real configuration.
fn netinv_cmd() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("netinv");
    cmd.env("HOME", "/tmp/netinv-cli-test-nonexistent")
        .env("XDG_CONFIG_HOME", "/tmp/netinv-cli-test-nonexistent")
        .env_remove("NETINV_CONFIG")
        .env_remove("NETINV_SERVER__HOST")
        .env_remove("NETINV_SERVER__PORT")
        .env_remove("NETINV_LOGGING__LEVEL")
        .env_remove("RUST_LOG");
    cmd
}

// ── Basic invocation ────────────────────────────────────────────────

#[test]
fn test_no_args_shows_help() {
    let output = netinv_cmd().output().unwrap();
    assert_eq!(output.status.code(), Some(2), "Expected exit code 2");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage"), "Expected 'Usage' in output:\n{stderr}");
}

#[test]
fn test_help_lists_subcommands() {
    netinv_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("serve")
            .and(predicate::str::contains("config"))
            .and(predicate::str::contains("completions")),
    );
}

#[test]
fn test_version_flag() {
    netinv_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("netinv"));
}

#[test]
fn test_quiet_and_verbose_conflict() {
    netinv_cmd()
        .args(["-q", "-v", "config", "path"])
        .assert()
        .code(2);
}

// ── Shell completions ───────────────────────────────────────────────

#[test]
fn test_completions_bash() {
    netinv_cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("netinv"));
}

#[test]
fn test_completions_unknown_shell() {
    netinv_cmd().args(["completions", "tcsh"]).assert().failure();
}

// ── Config ──────────────────────────────────────────────────────────

#[test]
fn test_config_path_honours_flag() {
    netinv_cmd()
        .args(["--config", "/srv/netinv.toml", "config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("/srv/netinv.toml"));
}

#[test]
fn test_config_show_defaults() {
    netinv_cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("[server]")
                .and(predicate::str::contains("port = 8000"))
                .and(predicate::str::contains("[logging]")),
        );
}

#[test]
fn test_config_show_applies_env_override() {
    netinv_cmd()
        .env("NETINV_SERVER__PORT", "9321")
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("port = 9321"));
}

#[test]
fn test_missing_config_file_exits_with_config_code() {
    netinv_cmd()
        .args(["--config", "/tmp/netinv-cli-test-nonexistent/none.toml", "config", "show"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_malformed_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "[server]\nport = \"eighty\"\n").unwrap();

    netinv_cmd()
        .arg("--config")
        .arg(&path)
        .args(["config", "show"])
        .assert()
        .code(3);
}

#[test]
fn test_config_init_writes_then_refuses_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("netinv.toml");

    netinv_cmd()
        .arg("--config")
        .arg(&path)
        .args(["config", "init", "--with-samples"])
        .assert()
        .success();

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("Router-01"), "seed entries missing:\n{written}");

    netinv_cmd()
        .arg("--config")
        .arg(&path)
        .args(["config", "init"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("already exists"));

    netinv_cmd()
        .arg("--config")
        .arg(&path)
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn test_serve_rejects_invalid_seed() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("seeds.toml");
    std::fs::write(
        &path,
        "[[inventory.devices]]\nname = \"Edge\"\nip_address = \"999.1.1.1\"\ndevice_type = \"router\"\n",
    )
    .unwrap();

    netinv_cmd()
        .arg("--config")
        .arg(&path)
        .args(["serve", "--port", "0"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("seed device #0"));
}

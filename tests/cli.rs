//! Integration tests for top-level CLI behavior.
//!
//! These never reach a real backend: they exercise argument parsing,
//! configuration errors, and the paths that fail before any request is
//! sent (or against a closed local port).

use std::process::Command;

fn run_hopshare(args: &[&str], env: &[(&str, &str)], clear: &[&str]) -> std::process::Output {
    let bin = env!("CARGO_BIN_EXE_hopshare");
    let mut command = Command::new(bin);
    command.args(args);
    for key in clear {
        command.env_remove(key);
    }
    for (key, value) in env {
        command.env(key, value);
    }
    command.output().expect("failed to run hopshare binary")
}

fn temp_home(name: &str) -> String {
    let dir = std::env::temp_dir().join(name);
    let _ = std::fs::remove_dir_all(&dir);
    dir.to_string_lossy().into_owned()
}

/// Base URL pointing at a port nothing listens on.
const DEAD_BASE: &str = "http://127.0.0.1:9";

#[test]
fn help_shows_subcommands() {
    let output = run_hopshare(&["--help"], &[], &[]);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("login"));
    assert!(stdout.contains("reviews"));
    assert!(stdout.contains("routes"));
}

#[test]
fn invalid_subcommand_exits_with_error() {
    let output = run_hopshare(&["nonsense"], &[], &[]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("unrecognized subcommand"));
}

#[test]
fn missing_api_base_is_reported() {
    let output = run_hopshare(&["users", "list"], &[], &["HOPSHARE_API_BASE"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("HOPSHARE_API_BASE"));
}

#[test]
fn logout_succeeds_without_a_stored_profile() {
    let home = temp_home("hopshare_cli_logout");
    let output = run_hopshare(
        &["logout"],
        &[("HOPSHARE_API_BASE", DEAD_BASE), ("HOPSHARE_HOME", &home)],
        &[],
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success());
    assert!(stdout.contains("Logged out"));
}

#[test]
fn reviews_add_requires_the_user_flag() {
    let output = run_hopshare(&["reviews", "add", "--rating", "4"], &[], &[]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("--user"));
}

#[test]
fn mutating_commands_require_a_login() {
    let home = temp_home("hopshare_cli_not_logged_in");
    let output = run_hopshare(
        &["cars", "list"],
        &[("HOPSHARE_API_BASE", DEAD_BASE), ("HOPSHARE_HOME", &home)],
        &[],
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("not logged in"));
}

#[test]
fn routes_add_rejects_a_bad_date_before_any_request() {
    let home = temp_home("hopshare_cli_bad_date");
    let output = run_hopshare(
        &[
            "routes", "add", "--start", "Graz", "--end", "Vienna", "--stops", "none",
            "--date", "next tuesday",
        ],
        &[("HOPSHARE_API_BASE", DEAD_BASE), ("HOPSHARE_HOME", &home)],
        &[],
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("invalid date"));
}

#[test]
fn login_rejects_malformed_input_before_any_request() {
    let home = temp_home("hopshare_cli_bad_login");
    let output = run_hopshare(
        &["login", "--email", "not-an-email", "--password", "short"],
        &[("HOPSHARE_API_BASE", DEAD_BASE), ("HOPSHARE_HOME", &home)],
        &[],
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("invalid email"));
    assert!(stderr.contains("password"));
}

#[test]
fn login_surfaces_transport_errors() {
    let home = temp_home("hopshare_cli_dead_backend");
    let output = run_hopshare(
        &["login", "--email", "alice@example.com", "--password", "secret1"],
        &[("HOPSHARE_API_BASE", DEAD_BASE), ("HOPSHARE_HOME", &home)],
        &[],
    );
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(stderr.contains("network error"));
}

//! Runs the compiled binary for commands that never reach the network

use std::process::{Command, Output};
use tempfile::TempDir;

fn run_binary(args: &[&str]) -> Output {
    // Isolated working directory so no stray config/ is picked up. Token
    // variables are pinned blank; `.env` never overrides a set variable.
    let workdir = TempDir::new().unwrap();

    Command::new(env!("CARGO_BIN_EXE_vulncheck-harness"))
        .args(args)
        .current_dir(workdir.path())
        .env_remove("RUST_LOG")
        .env("VULNCHECK_API_TOKEN", "")
        .env("VULNCHECK__API__TOKEN", "")
        .output()
        .expect("failed to run vulncheck-harness")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_help_command() {
    let output = run_binary(&["help"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("VulnCheck API Exercise CLI"), "{text}");
    assert!(text.contains("Usage:"), "{text}");
}

#[test]
fn test_list_command() {
    let output = run_binary(&["list"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Available components:"));
    assert!(text.contains("backup"));
    assert!(text.contains("index-vulnrichment"));

    // Listing needs no token, so nothing about one is reported
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.to_lowercase().contains("token"), "{stderr}");
}

#[test]
fn test_invalid_component_exits_cleanly() {
    let output = run_binary(&["nonexistent-function"]);

    assert!(output.status.success());
    assert!(stdout(&output).contains("Error: Component 'nonexistent-function' not found"));
}

#[test]
fn test_missing_token_fails_component() {
    let output = run_binary(&["tag"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).starts_with("Running: Get Tag"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("VULNCHECK_API_TOKEN"), "{stderr}");
}

#[test]
fn test_bad_flag_exits_with_usage_code() {
    let output = run_binary(&["--definitely-not-a-flag"]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_version_includes_build_date() {
    let output = run_binary(&["--version"]);

    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains(env!("CARGO_PKG_VERSION")));
    assert!(text.contains("built"), "{text}");
}

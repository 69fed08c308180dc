//! CLI integration tests
//!
//! These tests run the compiled `timeago` binary directly, so they work
//! even though the helper functions live in private modules of the bin crate.

use std::process::{Command, Output};
use tempfile::TempDir;

fn bin() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_timeago"));
    for var in ["LC_ALL", "LC_MESSAGES", "LANG", "TIMEAGO_LOCALE_DIR", "RUST_LOG"] {
        command.env_remove(var);
    }
    command
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

// ── help / version ────────────────────────────────────────────────────────────

#[test]
fn test_help_exits_zero() {
    let status = bin().arg("--help").status().expect("failed to run binary");
    assert!(status.success(), "--help should exit 0");
}

#[test]
fn test_version_flag() {
    let output = bin().arg("--version").output().expect("failed to run binary");
    assert!(output.status.success());
    let stdout = stdout(&output);
    // clap emits "timeago X.Y.Z"
    assert!(
        stdout.contains("timeago"),
        "version output should contain binary name, got: {}",
        stdout
    );
}

// ── format ────────────────────────────────────────────────────────────────────

#[test]
fn test_format_hour_ago() {
    let output = bin()
        .args(["format", "0", "--now", "3600000"])
        .output()
        .expect("failed to run binary");
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "1 hour ago");
}

#[test]
fn test_format_many_inputs_keeps_order() {
    let output = bin()
        .args(["format", "0", "3540000", "3600000", "7200000", "--now", "3600000"])
        .output()
        .expect("failed to run binary");
    assert!(output.status.success());
    let lines: Vec<String> = stdout(&output).lines().map(str::to_string).collect();
    assert_eq!(lines, ["1 hour ago", "1 minute ago", "just now", "in 1 hour"]);
}

#[test]
fn test_format_with_locale_and_style() {
    let output = bin()
        .args(["--locale", "de-AT", "format", "1970-01-01T00:00:00Z", "--now", "7200000", "--style", "mini"])
        .output()
        .expect("failed to run binary");
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "2 Std.");
}

#[test]
fn test_locale_from_lang() {
    let output = bin()
        .env("LANG", "ru_RU.UTF-8")
        .args(["format", "0", "--now", "18000000"])
        .output()
        .expect("failed to run binary");
    assert_eq!(stdout(&output).trim(), "5 часов назад");
}

#[test]
fn test_lc_all_wins_over_lang() {
    let output = bin()
        .env("LANG", "ru_RU.UTF-8")
        .env("LC_ALL", "de_DE.UTF-8")
        .args(["format", "0", "--now", "7200000"])
        .output()
        .expect("failed to run binary");
    assert_eq!(stdout(&output).trim(), "vor 2 Stunden");
}

#[test]
fn test_future_flag_at_zero() {
    let output = bin()
        .args(["format", "5000", "--now", "5000", "--future"])
        .output()
        .expect("failed to run binary");
    assert_eq!(stdout(&output).trim(), "in a moment");
}

#[test]
fn test_format_table() {
    let output = bin()
        .args(["format", "0", "--now", "61000", "--table"])
        .output()
        .expect("failed to run binary");
    assert!(output.status.success());
    let stdout = stdout(&output);
    assert!(stdout.contains("1 minute ago"), "got: {}", stdout);
    assert!(stdout.contains("1970-01-01 00:00:00"), "got: {}", stdout);
}

#[test]
fn test_unknown_style_suggests_and_fails() {
    let output = bin()
        .args(["format", "0", "--style", "aproximate"])
        .output()
        .expect("failed to run binary");
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("approximate"), "expected a suggestion, got: {}", stderr);
}

#[test]
fn test_invalid_input_fails() {
    let output = bin()
        .args(["format", "last tuesday"])
        .output()
        .expect("failed to run binary");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("last tuesday"), "got: {}", stderr);
}

// ── locales / styles ──────────────────────────────────────────────────────────

#[test]
fn test_locales_lists_bundled() {
    let output = bin().arg("locales").output().expect("failed to run binary");
    assert!(output.status.success());
    let stdout = stdout(&output);
    for tag in ["en", "de", "ru"] {
        assert!(stdout.contains(tag), "missing {} in: {}", tag, stdout);
    }
    assert!(stdout.contains("just now"));
}

#[test]
fn test_styles_lists_builtins() {
    let output = bin().arg("styles").output().expect("failed to run binary");
    assert!(output.status.success());
    let stdout = stdout(&output);
    for name in ["round", "approximate", "mini-minute-now"] {
        assert!(stdout.contains(name), "missing {} in: {}", name, stdout);
    }
}

#[test]
fn test_locale_dir_registers_extra_locale() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join("eo.json"),
        r#"{
            "locale": "eo",
            "long": {
                "hour": { "past": "antaŭ {0} horoj", "future": "post {0} horoj" },
                "second": { "current": "nun", "past": "antaŭ {0} sekundoj", "future": "post {0} sekundoj" }
            }
        }"#,
    )
    .unwrap();

    let output = bin()
        .env("TIMEAGO_LOCALE_DIR", tmp.path())
        .args(["--locale", "eo", "format", "0", "--now", "7200000"])
        .output()
        .expect("failed to run binary");
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "antaŭ 2 horoj");
}

#[test]
fn test_broken_locale_dir_fails() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("bad.json"), "{ not json").unwrap();

    let output = bin()
        .arg("--locale-dir").arg(tmp.path())
        .args(["locales"])
        .output()
        .expect("failed to run binary");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("bad.json"), "got: {}", stderr);
}

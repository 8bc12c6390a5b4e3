// tests/integration_test.rs
use std::process::Command;

const FIXTURE: &str = "tests/fixtures/custom_signals.toml";

#[test]
fn test_py_publish_help() {
    let output = Command::new("cargo")
        .args(&["run", "--bin", "py-publish", "--", "--help"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("py-publish"));
    assert!(stdout.contains("Python binding packages"));
}

#[test]
fn test_translate_snapshot_version() {
    let output = Command::new("cargo")
        .args(&["run", "--bin", "py-publish", "--", "translate", "0.0.1-SNAPSHOT"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim(), "0.0.1.preview");
}

#[test]
fn test_translate_release_version_unchanged() {
    let output = Command::new("cargo")
        .args(&["run", "--bin", "py-publish", "--", "translate", "2.0.0"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim(), "2.0.0");
}

#[test]
fn test_translate_nonstandard_keeps_stdout_clean() {
    let output = Command::new("cargo")
        .args(&["run", "--bin", "py-publish", "--", "translate", "weird-SNAPSHOT-text"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    // Only the translation reaches stdout; the shape advisory goes to stderr
    assert_eq!(stdout.trim(), "weird.preview-text");
    assert!(stderr.contains("not a standard source version"));
}

#[test]
fn test_gate_once_requests_the_step() {
    let output = Command::new("cargo")
        .args(&[
            "run", "--bin", "py-publish", "--", "-c", FIXTURE, "gate", "--once", "--quiet",
        ])
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_gate_skips_without_signals() {
    let output = Command::new("cargo")
        .args(&["run", "--bin", "py-publish", "--", "-c", FIXTURE, "gate", "--quiet"])
        .env_remove("PYPUBLISH_TEST_LOCAL")
        .env_remove("PYPUBLISH_TEST_CI")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_gate_sees_local_opt_in() {
    let output = Command::new("cargo")
        .args(&["run", "--bin", "py-publish", "--", "-c", FIXTURE, "gate", "--quiet"])
        .env_remove("PYPUBLISH_TEST_CI")
        .env("PYPUBLISH_TEST_LOCAL", "1")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(0));
}

#[test]
fn test_gate_bad_config_exits_with_error_code() {
    let output = Command::new("cargo")
        .args(&[
            "run", "--bin", "py-publish", "--", "-c", "/nonexistent/pypublish.toml", "gate",
            "--quiet",
        ])
        .output()
        .expect("Failed to execute command");

    // Errors are distinct from a skip decision: 2, never 1
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error loading config"));
}

#[test]
fn test_signals_lists_configured_names() {
    let output = Command::new("cargo")
        .args(&["run", "--bin", "py-publish", "--", "-c", FIXTURE, "signals"])
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("bindings-now"));
    assert!(stdout.contains("PYPUBLISH_TEST_LOCAL"));
    assert!(stdout.contains("PYPUBLISH_TEST_CI"));
}

#[test]
fn test_plan_reports_translation_and_decision() {
    let output = Command::new("cargo")
        .args(&[
            "run", "--bin", "py-publish", "--", "-c", FIXTURE, "plan", "0.0.1-SNAPSHOT", "--once",
        ])
        .env_remove("PYPUBLISH_TEST_LOCAL")
        .env_remove("PYPUBLISH_TEST_CI")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("0.0.1.preview"));
    assert!(stdout.contains("ACTIVE"));
}

#[test]
fn test_plan_without_signals_still_succeeds() {
    let output = Command::new("cargo")
        .args(&["run", "--bin", "py-publish", "--", "-c", FIXTURE, "plan", "3.1.4"])
        .env_remove("PYPUBLISH_TEST_LOCAL")
        .env_remove("PYPUBLISH_TEST_CI")
        .output()
        .expect("Failed to execute command");

    // Plan only reports; a skip decision is not a failure.
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("SKIPPED"));
}

#[test]
fn test_translation_and_policy_agree_with_library() {
    use py_publish::config::Config;
    use py_publish::policy::ActivationPolicy;
    use py_publish::translate::translate;
    use std::collections::HashSet;

    assert_eq!(translate("1.2.3-SNAPSHOT"), "1.2.3.preview");

    let policy = ActivationPolicy::new(Config::default().signals);
    let mut present = HashSet::new();
    present.insert("PYTHON_BINDINGS".to_string());
    assert!(policy.should_activate(&present));
}

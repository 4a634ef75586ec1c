use std::fs;
use std::path::Path;
use std::process::{Command, Output};

fn report_merge(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_report-merge"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("binary should start")
}

fn seed(dir: &Path, base: &str, secondary: &str) {
    fs::write(dir.join("base.json"), base).unwrap();
    fs::write(dir.join("fiorandomreadlatency_output.json"), secondary).unwrap();
}

#[test]
fn no_arguments_writes_final_json() {
    let dir = tempfile::tempdir().unwrap();
    seed(dir.path(), r#"{"hostname": "node1"}"#, r#"{"p50": 1.2, "p99": 3.4}"#);

    let output = report_merge(dir.path(), &[]);
    assert!(output.status.success());
    assert_eq!(
        fs::read_to_string(dir.path().join("final.json")).unwrap(),
        r#"{"hostname":"node1","fiorandomreadlatency":{"p50":1.2,"p99":3.4}}"#
    );
}

#[test]
fn missing_base_exits_non_zero_without_output() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("fiorandomreadlatency_output.json"), "{}").unwrap();

    let output = report_merge(dir.path(), &[]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("base.json"));
    assert!(!dir.path().join("final.json").exists());
}

#[test]
fn malformed_secondary_exits_non_zero() {
    let dir = tempfile::tempdir().unwrap();
    seed(dir.path(), r#"{"hostname": "node1"}"#, r#"{"p50": 1.2,}"#);

    let output = report_merge(dir.path(), &[]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Invalid JSON"));
}

#[test]
fn console_mode_prints_secondary_only() {
    let dir = tempfile::tempdir().unwrap();
    seed(dir.path(), r#"{"hostname": "node1"}"#, r#"{"p50": 1.2}"#);

    let output = report_merge(dir.path(), &["--mode", "console"]);
    assert!(output.status.success());

    let printed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(printed, serde_json::json!({ "p50": 1.2 }));
    assert!(!dir.path().join("final.json").exists());
}

#[test]
fn console_mode_warns_about_ignored_output_on_stderr() {
    let dir = tempfile::tempdir().unwrap();
    seed(dir.path(), r#"{"hostname": "node1"}"#, r#"{"pct": 100.000000}"#);

    let output = report_merge(
        dir.path(),
        &["--mode", "console", "--output", "elsewhere.json"],
    );
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("--output is ignored"));

    let printed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(printed, serde_json::json!({ "pct": 100 }));
    assert!(!dir.path().join("elsewhere.json").exists());
}

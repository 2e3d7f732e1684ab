//! Runs the `vikor` binary end to end.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

fn run_cli(report_dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_vikor"))
        .args(args)
        .env("VIKOR__REPORT__OUTPUT_DIR", report_dir)
        .env("RUST_LOG", "off")
        .output()
        .expect("failed to run vikor")
}

#[test]
fn reference_example_prints_ranking_and_saves_report() {
    let dir = TempDir::new().unwrap();
    let out = run_cli(dir.path(), &[]);

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Best alternative: 2"));
    assert!(stdout.contains("1. Alternative 2"));
    assert!(stdout.contains("Report saved to file:"));

    let report = fs::read_to_string(dir.path().join("vikor_report.md")).unwrap();
    assert!(report.contains("**Best alternative:** Alternative 2"));
}

#[test]
fn json_output_is_the_full_result() {
    let dir = TempDir::new().unwrap();
    let out = run_cli(dir.path(), &["--json", "--no-report"]);

    assert!(out.status.success());
    let json: Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["best_alternative"], 2);
    assert_eq!(json["compromise"], 0.5);
    assert_eq!(json["q_values"][1], 0.0);
    assert_eq!(json["ranked_alternatives"][0]["alternative"], 2);
    assert!(!dir.path().join("vikor_report.md").exists());
}

#[test]
fn compromise_flag_overrides_example() {
    let dir = TempDir::new().unwrap();
    let out = run_cli(dir.path(), &["--json", "--no-report", "--compromise", "0"]);

    assert!(out.status.success());
    let json: Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["best_alternative"], 1);
    assert_eq!(json["compromise"], 0.0);
}

#[test]
fn input_file_and_report_path() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("problem.yaml");
    fs::write(
        &input,
        "alternatives: [Cheap, Premium]\nmatrix:\n  - [0.2, 0.9]\n  - [0.9, 0.3]\nweights: [0.6, 0.4]\n",
    )
    .unwrap();
    let report = dir.path().join("out").join("ranking.md");

    let out = run_cli(
        dir.path(),
        &[
            "--input",
            input.to_str().unwrap(),
            "--report",
            report.to_str().unwrap(),
        ],
    );

    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Best alternative: 2 (Premium)"));
    assert!(report.exists());
}

#[test]
fn invalid_compromise_fails() {
    let dir = TempDir::new().unwrap();
    let out = run_cli(dir.path(), &["--no-report", "--compromise", "1.5"]);

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Invalid --compromise"));
}

#[test]
fn missing_input_file_fails() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("absent.json");
    let out = run_cli(dir.path(), &["--input", missing.to_str().unwrap()]);

    assert!(!out.status.success());
}

//! E2E tests for the process, console and schema commands

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

fn letter_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("taxnote-e2e-{}-{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).expect("create letter dir");
    dir
}

/// Process a valid JSON file and check the summary table
#[test]
fn process_json_file() {
    let dir = letter_dir("process");
    let output = Command::new("cargo")
        .args(["run", "--", "process", "-f", "tests/data/persons.json", "-o"])
        .arg(&dir)
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    // Names are capitalized on the way in
    assert!(stdout.contains("Hans Müller"));
    assert!(stdout.contains("Anna Keller"));

    // Hans: net 86000 -> 18% flat on the whole salary
    assert!(stdout.contains("86'000.00"));
    assert!(stdout.contains("18.0"));
    assert!(stdout.contains("15'480.00"));

    // Anna: net 23500 is below the tax-free limit
    assert!(stdout.contains("0.00"));

    assert!(stdout.contains("2 letter(s) written, 0 record(s) skipped"));

    // Letters land in the output directory
    let letters: Vec<_> = std::fs::read_dir(&dir)
        .expect("read letter dir")
        .filter_map(|e| e.ok())
        .filter(|e| e.file_name().to_string_lossy().ends_with("_tax_letter.html"))
        .collect();
    assert_eq!(letters.len(), 2);
}

/// Process with JSON summary output
#[test]
fn process_json_summary() {
    let dir = letter_dir("summary");
    let output = Command::new("cargo")
        .args([
            "run",
            "--",
            "process",
            "-f",
            "tests/data/persons.json",
            "--json",
            "-o",
        ])
        .arg(&dir)
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    assert!(stdout.contains("\"record_count\": 2"));
    assert!(stdout.contains("\"skipped_count\": 0"));
    assert!(stdout.contains("\"letters\""));
    assert!(stdout.contains("\"percentage\": \"18.0\""));
}

/// Invalid records are skipped, not fatal
#[test]
fn process_skips_invalid_records() {
    let dir = letter_dir("mixed");
    let output = Command::new("cargo")
        .args(["run", "--", "process", "-f", "tests/data/mixed.json", "-o"])
        .arg(&dir)
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    assert!(stdout.contains("Hans Müller"));
    assert!(!stdout.contains("doe"));
    assert!(stdout.contains("1 letter(s) written, 1 record(s) skipped"));
}

/// Schema command prints the input record schema
#[test]
fn schema_lists_input_fields() {
    let output = Command::new("cargo")
        .args(["run", "--", "schema"])
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    assert!(stdout.contains("\"first_name\""));
    assert!(stdout.contains("\"gross_salary\""));
    assert!(stdout.contains("\"social_deduction\""));
}

/// Full interactive session piped through stdin
#[test]
fn console_session() {
    let dir = letter_dir("console");
    let mut child = Command::new("cargo")
        .args(["run", "--", "console", "-o"])
        .arg(&dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn command");

    let session = "hans\nmüller\nm\nBahnhofstrasse 12 8001 Zürich\n95000\n6000\n3000\nn\n";
    child
        .stdin
        .as_mut()
        .expect("stdin")
        .write_all(session.as_bytes())
        .expect("write session");

    let output = child.wait_with_output().expect("Failed to wait for command");
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success(), "Command failed: {:?}", output);

    assert!(stdout.contains("Welcome to Tax Data Processor"));
    assert!(stdout.contains("Enter first name:"));
    assert!(stdout.contains("Tax: CHF 15480.00 at 18.0%"));
    assert!(stdout.contains("Thank you. Exiting."));
}

//! CLI binary smoke tests using assert_cmd.
//!
//! These tests exercise the compiled `crimescope` binary to verify that
//! argument parsing, status output, and error handling work end-to-end.

use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("crimescope").unwrap()
}

const HEADER: &str = "state/ut,rape,kidnapping_and_abduction,dowry_deaths,\
assault_on_women_with_intent_to_outrage_her_modesty,insult_to_modesty_of_women,\
cruelty_by_husband_or_his_relatives,importation_of_girls";

fn sample_csv() -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    write!(
        file,
        "{}\n\
         A,2,1,0,3,0,5,0\n\
         A,0,0,1,0,2,0,0\n\
         B,4,2,0,1,0,3,1\n\
         B,1,0,0,0,1,2,0\n\
         B,0,3,2,0,0,1,0\n",
        HEADER
    )
    .unwrap();
    file.flush().unwrap();
    file
}

// ---------------------------------------------------------------------------
// Top-level
// ---------------------------------------------------------------------------

#[test]
fn no_args_shows_help() {
    cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn help_flag() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("predict"))
        .stdout(predicate::str::contains("categories"));
}

#[test]
fn version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("crimescope"));
}

// ---------------------------------------------------------------------------
// categories subcommand
// ---------------------------------------------------------------------------

#[test]
fn categories_lists_all_seven() {
    cmd()
        .arg("categories")
        .assert()
        .success()
        .stdout(predicate::str::contains("rape"))
        .stdout(predicate::str::contains("importation_of_girls"))
        .stdout(predicate::str::contains("cruelty_by_husband_or_his_relatives"));
}

// ---------------------------------------------------------------------------
// predict subcommand
// ---------------------------------------------------------------------------

#[test]
fn predict_no_data_arg_errors() {
    cmd().arg("predict").assert().failure();
}

#[test]
fn predict_nonexistent_file_errors() {
    cmd()
        .args(["predict", "/nonexistent/crime_stats.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn predict_wrong_extension_errors() {
    let file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
    cmd()
        .arg("predict")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(".csv"));
}

#[test]
fn predict_unknown_category_rejected() {
    let file = sample_csv();
    cmd()
        .arg("predict")
        .arg(file.path())
        .args(["--category", "arson", "--no-report"])
        .assert()
        .failure();
}

#[test]
fn predict_end_to_end_prints_statuses() {
    let file = sample_csv();
    cmd()
        .arg("predict")
        .arg(file.path())
        .arg("--no-report")
        .assert()
        .success()
        .stdout(predicate::str::contains("Data loaded successfully!"))
        .stdout(predicate::str::contains("Models trained successfully!"))
        .stdout(predicate::str::contains("prediction:"));
}

#[test]
fn predict_single_category_status() {
    let file = sample_csv();
    cmd()
        .arg("predict")
        .arg(file.path())
        .args(["--category", "rape", "--no-report"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rape prediction:"))
        .stdout(predicate::str::contains("probability"));
}

#[test]
fn predict_writes_report() {
    let file = sample_csv();
    let dir = tempfile::tempdir().unwrap();
    let report = dir.path().join("report.html");

    cmd()
        .arg("predict")
        .arg(file.path())
        .arg("--output")
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::contains("Report written to"));

    let html = std::fs::read_to_string(&report).unwrap();
    assert!(html.contains("Crime Prediction Probabilities"));
    assert!(html.contains("Average Crime Risk by State"));
}

#[test]
fn predict_too_few_rows_reports_error() {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    write!(file, "{}\nA,1,0,0,0,0,0,0\n", HEADER).unwrap();
    file.flush().unwrap();

    cmd()
        .arg("predict")
        .arg(file.path())
        .arg("--no-report")
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 2 rows"));
}

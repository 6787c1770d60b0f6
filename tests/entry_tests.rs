//! Integration tests for adding, listing and deleting entries

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{add_entry, init_tracker, worktrack_cmd};

fn list_output(dir: &std::path::Path, date: &str) -> String {
    let output = worktrack_cmd()
        .current_dir(dir)
        .args(["list", date])
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_add_and_list() {
    let temp = TempDir::new().unwrap();
    init_tracker(temp.path());

    worktrack_cmd()
        .current_dir(temp.path())
        .args(["add", "2025-01-17", "--start", "09:00", "--end", "17:30", "--rate", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added entry for 17-01-2025"))
        .stdout(predicate::str::contains("Hours: 8.50, Earned: 170.00 PLN"));

    worktrack_cmd()
        .current_dir(temp.path())
        .args(["list", "17-01-2025"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entries for 17 Jan 2025"))
        .stdout(predicate::str::contains("Start: 09:00, End: 17:30"))
        .stdout(predicate::str::contains("Day Total Hours: 8.50"))
        .stdout(predicate::str::contains("Day Total Earned: 170.00 PLN"));
}

#[test]
fn test_list_empty_day() {
    let temp = TempDir::new().unwrap();
    init_tracker(temp.path());
    add_entry(temp.path(), "2025-01-17", "09:00", "17:00", "20");

    worktrack_cmd()
        .current_dir(temp.path())
        .args(["list", "2025-01-18"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found"))
        .stdout(predicate::str::contains("Day Total").not());
}

#[test]
fn test_entries_persist_as_json() {
    let temp = TempDir::new().unwrap();
    init_tracker(temp.path());
    add_entry(temp.path(), "2025-01-17", "09:00", "17:00", "20,5");

    let raw = fs::read_to_string(temp.path().join(".worktrack/work_entries.json")).unwrap();
    assert!(raw.contains("\"hourlyRate\":20.5"));
    assert!(raw.contains("\"startTime\""));
    assert!(raw.contains("\"endTime\""));
}

#[test]
fn test_add_reuses_last_values() {
    let temp = TempDir::new().unwrap();
    init_tracker(temp.path());
    add_entry(temp.path(), "2025-01-17", "08:00", "12:00", "30");

    worktrack_cmd()
        .current_dir(temp.path())
        .args(["add", "2025-01-18"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Start: 08:00, End: 12:00"))
        .stdout(predicate::str::contains("Earned: 120.00 PLN"));
}

#[test]
fn test_add_dry_run_shows_summary_without_saving() {
    let temp = TempDir::new().unwrap();
    init_tracker(temp.path());

    worktrack_cmd()
        .current_dir(temp.path())
        .args(["add", "2025-01-17", "--start", "09:00", "--end", "16:30", "--rate", "20", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Hours: 7.50"))
        .stdout(predicate::str::contains("Earned: 150.00 PLN"))
        .stdout(predicate::str::contains("Added entry").not());

    worktrack_cmd()
        .current_dir(temp.path())
        .args(["add", "2025-01-17", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Enter valid times and rate"));

    assert!(list_output(temp.path(), "2025-01-17").contains("No entries found"));
}

#[test]
fn test_add_invalid_rate_fails() {
    let temp = TempDir::new().unwrap();
    init_tracker(temp.path());

    worktrack_cmd()
        .current_dir(temp.path())
        .args(["add", "2025-01-17", "--start", "09:00", "--end", "17:00", "--rate", "abc"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Hourly rate 'abc'"));

    worktrack_cmd()
        .current_dir(temp.path())
        .args(["add", "2025-01-17", "--rate", "-5"])
        .assert()
        .code(4);

    assert!(list_output(temp.path(), "2025-01-17").contains("No entries found"));
}

#[test]
fn test_add_end_before_start_fails() {
    let temp = TempDir::new().unwrap();
    init_tracker(temp.path());

    worktrack_cmd()
        .current_dir(temp.path())
        .args(["add", "2025-01-17", "--start", "17:00", "--end", "09:00", "--rate", "20"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("End time must be after start time"));
}

#[test]
fn test_add_invalid_time_fails() {
    let temp = TempDir::new().unwrap();
    init_tracker(temp.path());

    worktrack_cmd()
        .current_dir(temp.path())
        .args(["add", "2025-01-17", "--start", "9am"])
        .assert()
        .code(4);
}

#[test]
fn test_invalid_date_reference() {
    let temp = TempDir::new().unwrap();
    init_tracker(temp.path());

    worktrack_cmd()
        .current_dir(temp.path())
        .args(["list", "someday"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Invalid date reference: 'someday'"));
}

#[test]
fn test_delete_by_prefix() {
    let temp = TempDir::new().unwrap();
    init_tracker(temp.path());
    add_entry(temp.path(), "2025-01-17", "09:00", "17:00", "20");

    let listing = list_output(temp.path(), "2025-01-17");
    let entry_line = listing
        .lines()
        .find(|line| line.contains("Start: 09:00"))
        .unwrap();
    let prefix = entry_line.split_whitespace().next().unwrap();
    assert_eq!(prefix.len(), 8);

    worktrack_cmd()
        .current_dir(temp.path())
        .args(["delete", prefix])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("Deleted entry {}", prefix)));

    assert!(list_output(temp.path(), "2025-01-17").contains("No entries found"));
}

#[test]
fn test_delete_unknown_id() {
    let temp = TempDir::new().unwrap();
    init_tracker(temp.path());
    add_entry(temp.path(), "2025-01-17", "09:00", "17:00", "20");

    worktrack_cmd()
        .current_dir(temp.path())
        .args(["delete", "00000000-0000-4000-8000-000000000000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entry with id"));

    assert!(list_output(temp.path(), "2025-01-17").contains("Start: 09:00"));
}

#[test]
fn test_not_initialized_exit_code() {
    let temp = TempDir::new().unwrap();

    worktrack_cmd()
        .current_dir(temp.path())
        .args(["list", "today"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Not a worktrack directory"));
}

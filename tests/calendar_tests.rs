//! Integration tests for the month calendar view

#![allow(deprecated)]

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{add_entry, init_tracker, worktrack_cmd};

fn calendar_output(dir: &std::path::Path, args: &[&str]) -> String {
    let output = worktrack_cmd()
        .current_dir(dir)
        .arg("calendar")
        .args(args)
        .output()
        .unwrap();
    assert!(output.status.success());
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_calendar_layout() {
    let temp = TempDir::new().unwrap();
    init_tracker(temp.path());
    add_entry(temp.path(), "2025-02-10", "09:00", "17:00", "20");

    let output = calendar_output(temp.path(), &["2025-02", "--select", "2025-02-14"]);
    let lines: Vec<&str> = output.lines().collect();

    assert!(lines[0].contains("February 2025"));
    assert!(lines[1].trim_start().starts_with("Mon"));
    assert_eq!(lines.len(), 8);

    // Monday-first February 2025 opens on 27 January
    assert!(lines[2].starts_with("·27"));
    assert!(output.contains("[14]"));
    assert!(output.contains("10 *"));
    assert!(!output.contains("11 *"));
}

#[test]
fn test_calendar_sunday_first() {
    let temp = TempDir::new().unwrap();
    worktrack_cmd()
        .arg("init")
        .arg(temp.path())
        .args(["--first-weekday", "sunday"])
        .assert()
        .success();

    let output = calendar_output(temp.path(), &["2025-02", "--select", "2025-02-01"]);
    let lines: Vec<&str> = output.lines().collect();

    assert!(lines[1].trim_start().starts_with("Sun"));
    assert!(lines[2].starts_with("·26"));
    assert!(lines[2].ends_with("[ 1]"));
}

#[test]
fn test_calendar_anchor_from_selection() {
    let temp = TempDir::new().unwrap();
    init_tracker(temp.path());

    worktrack_cmd()
        .current_dir(temp.path())
        .args(["calendar", "--select", "2024-06-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("June 2024"))
        .stdout(predicate::str::contains("[15]"));
}

#[test]
fn test_calendar_month_navigation() {
    let temp = TempDir::new().unwrap();
    init_tracker(temp.path());

    worktrack_cmd()
        .current_dir(temp.path())
        .args(["calendar", "2025-01", "--shift", "-1", "--select", "2024-12-24"])
        .assert()
        .success()
        .stdout(predicate::str::contains("December 2024"))
        .stdout(predicate::str::contains("[24]"));

    worktrack_cmd()
        .current_dir(temp.path())
        .args(["calendar", "2025-12", "--shift", "1", "--select", "2026-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("January 2026"));
}

#[test]
fn test_calendar_invalid_month() {
    let temp = TempDir::new().unwrap();
    init_tracker(temp.path());

    worktrack_cmd()
        .current_dir(temp.path())
        .args(["calendar", "February"])
        .assert()
        .code(3);
}

#[test]
fn test_calendar_plain_without_appearance() {
    let temp = TempDir::new().unwrap();
    init_tracker(temp.path());

    let output = calendar_output(temp.path(), &["2025-02", "--select", "2025-02-14"]);
    assert!(!output.contains('\u{1b}'));
}

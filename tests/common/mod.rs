#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn worktrack_cmd() -> Command {
    let mut cmd = Command::cargo_bin("worktrack").unwrap();
    cmd.env_remove("WORKTRACK_ROOT");
    cmd.env_remove("WORKTRACK_LOG");
    cmd
}

/// Initialize a tracker in `dir` with Monday-first weeks
pub fn init_tracker(dir: &Path) {
    worktrack_cmd().arg("init").arg(dir).assert().success();
}

/// Add an entry through the CLI, run from `dir`
pub fn add_entry(dir: &Path, date: &str, start: &str, end: &str, rate: &str) {
    worktrack_cmd()
        .current_dir(dir)
        .args(["add", date, "--start", start, "--end", end, "--rate", rate])
        .assert()
        .success();
}

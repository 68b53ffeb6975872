// tests/common/mod.rs
// Shared test utilities for integration tests
#![allow(dead_code)]

use std::collections::HashMap;
use std::fs;
use std::process::{Command, Stdio};
use tempfile::TempDir;

/// Run logtally in a fresh directory; `file_log` is written to `file.log` when present
pub fn run_logtally_in_dir(file_log: Option<&str>) -> (String, String, i32) {
    let (stdout, stderr, exit_code) = run_logtally_raw(file_log.map(str::as_bytes));
    (String::from_utf8_lossy(&stdout).to_string(), stderr, exit_code)
}

/// Like `run_logtally_in_dir`, but with byte input and stdout left undecoded
pub fn run_logtally_raw(file_log: Option<&[u8]>) -> (Vec<u8>, String, i32) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    if let Some(content) = file_log {
        fs::write(dir.path().join("file.log"), content).expect("Failed to write file.log");
    }

    let output = Command::new(env!("CARGO_BIN_EXE_logtally"))
        .current_dir(dir.path())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute logtally");

    (
        output.stdout,
        String::from_utf8_lossy(&output.stderr).to_string(),
        output.status.code().unwrap_or(-1),
    )
}

/// Parse the report printed on stdout into its header and level counts
pub fn parse_report(stdout: &str) -> (String, HashMap<String, usize>) {
    let mut lines = stdout.lines();
    let header = lines.next().unwrap_or_default().to_string();
    let counts = lines
        .map(|line| {
            let (level, count) = line
                .rsplit_once(": ")
                .unwrap_or_else(|| panic!("Malformed report line: {:?}", line));
            (
                level.to_string(),
                count.parse().expect("Count should be a number"),
            )
        })
        .collect();
    (header, counts)
}

pub fn counts(pairs: &[(&str, usize)]) -> HashMap<String, usize> {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

//! Integration tests for the `hotpath` binary.
//!
//! The benchmark invocation runs the full reference counts, so this
//! suite has one end-to-end benchmark test and keeps the rest on the
//! cheap `area` path.

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn bare_invocation_prints_both_measurement_blocks() {
    Command::cargo_bin("hotpath")
        .unwrap()
        .assert()
        .success()
        .stdout(predicate::str::contains("fast_sum8 (1000000 calls):"))
        .stdout(predicate::str::contains("slow_compute (100 calls):"))
        .stdout(predicate::str::contains("Total time:"))
        .stdout(predicate::str::contains("Per call:"))
        .stdout(predicate::str::contains("checksum: 0x"));
}

#[test]
fn area_reports_area_and_timing() {
    Command::cargo_bin("hotpath")
        .unwrap()
        .arg("area")
        .arg(fixture("rect.yaml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Rectangle area: 6.00"))
        .stdout(predicate::str::contains("Time: "));
}

#[test]
fn area_with_missing_file_fails_with_message() {
    Command::cargo_bin("hotpath")
        .unwrap()
        .arg("area")
        .arg("no-such-file.yaml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("reading coordinate file"));
}

#[test]
fn area_with_malformed_yaml_fails_with_message() {
    Command::cargo_bin("hotpath")
        .unwrap()
        .arg("area")
        .arg(fixture("not-a-rect.yaml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("as YAML"));
}

//! Tests for the omni-stitch command-line driver.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

const REQUEST: &str = r#"<rspec type="request">
  <link id="L1"><interface id="I1"/></link>
  <stitching lastUpdateTime="t0">
    <path id="P1">
      <hop id="H1"><link id="L1"/><nextHop>H2</nextHop></hop>
      <hop id="H2"><link id="urn:remote"/><nextHop>null</nextHop></hop>
    </path>
  </stitching>
</rspec>"#;

fn write_request(dir: &TempDir, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join("request.xml");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_inspect_prints_summary() {
    let dir = TempDir::new().unwrap();
    let file = write_request(&dir, REQUEST);

    Command::cargo_bin("omni-stitch")
        .unwrap()
        .arg("inspect")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Links: 1"))
        .stdout(predicate::str::contains("hop H1 -> L1 (next: H2)"))
        .stdout(predicate::str::contains("link urn:remote not declared"));
}

#[test]
fn test_render_to_file_round_trips() {
    let dir = TempDir::new().unwrap();
    let file = write_request(&dir, REQUEST);
    let output = dir.path().join("out.xml");

    Command::cargo_bin("omni-stitch")
        .unwrap()
        .arg("render")
        .arg(&file)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let rendered = fs::read_to_string(&output).unwrap();
    assert_eq!(
        omni_stitch::parse(&rendered).unwrap(),
        omni_stitch::parse(REQUEST).unwrap()
    );
}

#[test]
fn test_render_compact_to_stdout() {
    let dir = TempDir::new().unwrap();
    let file = write_request(&dir, r#"<rspec><link id="L1"/></rspec>"#);

    Command::cargo_bin("omni-stitch")
        .unwrap()
        .arg("render")
        .arg(&file)
        .arg("--compact")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#"<rspec><link id="L1"/></rspec>"#));
}

#[test]
fn test_json_output() {
    let dir = TempDir::new().unwrap();
    let file = write_request(&dir, REQUEST);

    let output = Command::cargo_bin("omni-stitch")
        .unwrap()
        .arg("json")
        .arg(&file)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["links"][0]["id"], "L1");
    assert_eq!(value["links"][0]["interfaces"][0]["owner"]["kind"], "link");
    assert_eq!(value["stitching"]["last_update_time"], "t0");
    assert_eq!(value["stitching"]["paths"][0]["hops"][1]["next_hop"], "null");
}

#[test]
fn test_schema_violation_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let file = write_request(&dir, r#"<rspec><link/></rspec>"#);

    Command::cargo_bin("omni-stitch")
        .unwrap()
        .arg("inspect")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing required attribute 'id'"));
}

#[test]
fn test_missing_file_exits_with_error() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("omni-stitch")
        .unwrap()
        .arg("inspect")
        .arg(dir.path().join("missing.xml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.xml"));
}

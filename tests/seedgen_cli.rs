use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

fn seedgen(bytes: &str) -> assert_cmd::assert::Assert {
    Command::cargo_bin("seedgen")
        .unwrap()
        .args(["--deterministic", "7", "--bytes", bytes, "--json"])
        .assert()
}

#[test]
fn seed_length_bounds() {
    seedgen("0").code(2).stderr(predicate::str::contains("--bytes"));
    seedgen("4096").code(2).stderr(predicate::str::contains("--bytes"));
}

#[test]
fn largest_seed_length_accepted() {
    let output = Command::cargo_bin("seedgen")
        .unwrap()
        .args(["--deterministic", "7", "--bytes", "1024", "--json"])
        .output()
        .expect("run");
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(v["server_seed"].as_str().map(str::len), Some(2048));
    assert_eq!(v["client_seed"].as_str().map(str::len), Some(2048));
}

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

const ABC_SHA256: &str = "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad";

#[test]
fn matching_round_passes() {
    Command::cargo_bin("verify")
        .unwrap()
        .args([
            "--server-seed", "abc",
            "--client-seed", "def",
            "--mines", "3",
            "--claimed", "20,10,16",
            "--digest", "cdb2c5f0977290d7326a7fa29db5b29b76c606bca4a6c4fa525a11c0fe7ea261",
            "--commitment", ABC_SHA256,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("[verify] Placement: OK"))
        .stdout(predicate::str::contains("[verify] Digest: OK"))
        .stdout(predicate::str::contains("[verify] Commitment: OK"));
}

#[test]
fn mismatched_claim_exits_3() {
    Command::cargo_bin("verify")
        .unwrap()
        .args(["--server-seed", "abc", "--client-seed", "def", "--mines", "3", "--claimed", "10,16,21"])
        .assert()
        .code(3)
        .stdout(predicate::str::contains("missing [20], unexpected [21]"));
}

#[test]
fn bad_commitment_exits_3() {
    Command::cargo_bin("verify")
        .unwrap()
        .args([
            "--server-seed", "abd",
            "--client-seed", "def",
            "--mines", "0",
            "--commitment", ABC_SHA256,
        ])
        .assert()
        .code(3)
        .stdout(predicate::str::contains("Commitment: MISMATCH"));
}

#[test]
fn digest_mismatch_exits_3() {
    Command::cargo_bin("verify")
        .unwrap()
        .args([
            "--server-seed", "abc",
            "--client-seed", "def",
            "--mines", "0",
            "--digest", ABC_SHA256,
        ])
        .assert()
        .code(3)
        .stdout(predicate::str::contains("Digest: MISMATCH"));
}

#[test]
fn malformed_digest_exits_1() {
    Command::cargo_bin("verify")
        .unwrap()
        .args(["--server-seed", "abc", "--client-seed", "def", "--mines", "0", "--digest", "not-hex"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid hex digest"));
}

#[test]
fn json_report() {
    let output = Command::cargo_bin("verify")
        .unwrap()
        .args(["--server-seed", "abc", "--client-seed", "def", "--mines", "3", "--claimed", "10,16,20", "--json"])
        .output()
        .expect("run");
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(v["placement_matches"], true);
    assert_eq!(v["placement"], serde_json::json!([10, 16, 20]));
    assert!(v.get("digest_matches").is_none());
}

#[test]
fn garbage_position_is_an_error() {
    Command::cargo_bin("verify")
        .unwrap()
        .args(["--server-seed", "abc", "--client-seed", "def", "--claimed", "1,x"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid position 'x'"));
}

#[test]
fn off_board_position_is_an_error() {
    Command::cargo_bin("verify")
        .unwrap()
        .args(["--server-seed", "abc", "--client-seed", "def", "--claimed", "30"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Position 30 is outside the 5x5 board"));
}

#[test]
fn seedgen_deterministic_pair_verifies() {
    let output = Command::cargo_bin("seedgen")
        .unwrap()
        .args(["--deterministic", "12345", "--json"])
        .output()
        .expect("run");
    assert!(output.status.success());
    let v: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    let server = v["server_seed"].as_str().unwrap().to_string();
    let client = v["client_seed"].as_str().unwrap().to_string();
    let commit = v["commitment"].as_str().unwrap().to_string();
    assert_eq!(server.len(), 64);
    assert_ne!(server, client);
    assert_eq!(v["algorithm"], "SHA-256");

    // Same seed, same pair
    let again = Command::cargo_bin("seedgen")
        .unwrap()
        .args(["--deterministic", "12345", "--json"])
        .output()
        .expect("run");
    assert_eq!(again.stdout, output.stdout);

    Command::cargo_bin("verify")
        .unwrap()
        .args(["--server-seed", server.as_str(), "--client-seed", client.as_str(), "--mines", "0", "--commitment", commit.as_str()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Commitment: OK"));
}

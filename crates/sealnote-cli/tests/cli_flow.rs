use std::path::PathBuf;
use std::process::Command;

use sealnote_core::password::{derive_credential, CredentialRecord};

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_sealnote"))
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

#[test]
fn test_keygen_prints_hex_key() {
    let output = Command::new(bin())
        .arg("keygen")
        .output()
        .expect("keygen should run");
    assert!(output.status.success());

    let key_hex = stdout_of(&output);
    assert_eq!(key_hex.len(), 64);
    assert!(key_hex.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn test_encrypt_decrypt_round_trip_via_env_key() {
    let keygen = Command::new(bin())
        .arg("keygen")
        .output()
        .expect("keygen should run");
    let key_hex = stdout_of(&keygen);

    let encrypt = Command::new(bin())
        .args(["encrypt", "the quick brown note"])
        .env("SEALNOTE_KEY", &key_hex)
        .output()
        .expect("encrypt should run");
    assert!(encrypt.status.success());
    let envelope = stdout_of(&encrypt);
    assert!(envelope.contains(':'));

    let decrypt = Command::new(bin())
        .args(["decrypt", &envelope])
        .env("SEALNOTE_KEY", &key_hex)
        .output()
        .expect("decrypt should run");
    assert!(decrypt.status.success());
    assert_eq!(stdout_of(&decrypt), "the quick brown note");
}

#[test]
fn test_decrypt_with_wrong_key_fails() {
    fn fresh_key() -> String {
        let output = Command::new(bin()).arg("keygen").output().expect("keygen");
        stdout_of(&output)
    }
    let (key_a, key_b) = (fresh_key(), fresh_key());

    let encrypt = Command::new(bin())
        .args(["encrypt", "secret"])
        .env("SEALNOTE_KEY", &key_a)
        .output()
        .expect("encrypt should run");
    let envelope = stdout_of(&encrypt);

    let decrypt = Command::new(bin())
        .args(["decrypt", &envelope])
        .env("SEALNOTE_KEY", &key_b)
        .output()
        .expect("decrypt should run");
    assert!(!decrypt.status.success());
    let stderr = String::from_utf8_lossy(&decrypt.stderr);
    assert!(stderr.contains("Decryption error"));
}

#[test]
fn test_password_check_reports_first_unmet_rule() {
    let output = Command::new(bin())
        .args(["password", "check", "Password1"])
        .output()
        .expect("check should run");
    assert!(!output.status.success());
    assert!(stdout_of(&output).contains("special character"));

    let output = Command::new(bin())
        .args(["password", "check", "P@ssw0rd1"])
        .output()
        .expect("check should run");
    assert!(output.status.success());
}

#[test]
fn test_password_check_json_output() {
    let output = Command::new(bin())
        .args(["password", "check", "--json", "P@ssw0rd1"])
        .output()
        .expect("check should run");
    assert!(output.status.success());

    let value: serde_json::Value =
        serde_json::from_str(&stdout_of(&output)).expect("output should be JSON");
    assert_eq!(value["valid"], serde_json::Value::Bool(true));
}

#[test]
fn test_password_hash_then_verify() {
    let hash = Command::new(bin())
        .args(["password", "hash", "P@ssw0rd1"])
        .output()
        .expect("hash should run");
    assert!(hash.status.success());
    let credential = stdout_of(&hash);
    assert!(credential.starts_with("$argon2id$"));

    let verify = Command::new(bin())
        .args(["password", "verify", &credential, "P@ssw0rd1"])
        .output()
        .expect("verify should run");
    assert!(verify.status.success());

    let verify = Command::new(bin())
        .args(["password", "verify", &credential, "Wr0ng!guess"])
        .output()
        .expect("verify should run");
    assert!(!verify.status.success());
}

#[test]
fn test_login_locks_after_five_failures() {
    let dir = tempfile::tempdir().expect("tempdir");
    let record_path = dir.path().join("account.json");

    let record =
        CredentialRecord::new(derive_credential("P@ssw0rd1").expect("derivation should succeed"));
    std::fs::write(
        &record_path,
        serde_json::to_string_pretty(&record).expect("serialize"),
    )
    .expect("write record");

    for _ in 0..5 {
        let output = Command::new(bin())
            .args(["login"])
            .arg(&record_path)
            .arg("Wr0ng!guess")
            .output()
            .expect("login should run");
        assert!(!output.status.success());
    }

    let stored: CredentialRecord = serde_json::from_str(
        &std::fs::read_to_string(&record_path).expect("read record"),
    )
    .expect("parse record");
    assert!(stored.account_locked);
    assert!(stored.lock_until.is_some());

    // Correct password is still rejected while the lock holds
    let output = Command::new(bin())
        .args(["login"])
        .arg(&record_path)
        .arg("P@ssw0rd1")
        .output()
        .expect("login should run");
    assert!(!output.status.success());
    assert!(stdout_of(&output).contains("Account locked"));
}

#[test]
fn test_login_success_resets_record() {
    let dir = tempfile::tempdir().expect("tempdir");
    let record_path = dir.path().join("account.json");

    let mut record =
        CredentialRecord::new(derive_credential("P@ssw0rd1").expect("derivation should succeed"));
    record.failed_login_attempts = 3;
    std::fs::write(
        &record_path,
        serde_json::to_string_pretty(&record).expect("serialize"),
    )
    .expect("write record");

    let output = Command::new(bin())
        .args(["login"])
        .arg(&record_path)
        .arg("P@ssw0rd1")
        .output()
        .expect("login should run");
    assert!(output.status.success());

    let stored: CredentialRecord = serde_json::from_str(
        &std::fs::read_to_string(&record_path).expect("read record"),
    )
    .expect("parse record");
    assert_eq!(stored.failed_login_attempts, 0);
    assert!(!stored.account_locked);
}
